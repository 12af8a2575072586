//! Shared fixtures: schema-driven node factories, and a small lexer and
//! parser for the type grammar that feeds real token streams into trees.

#![allow(dead_code, reason = "each test binary uses a subset")]

use tessera_schema::{BaseKind, Child, ChildKind, NodeChoice, TokenChoice};
use tessera_syntax::{
    NodeBuilder, RawTokenKind, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, Token,
    TokenKind, Trivia,
};
use tessera_token::Keyword;

// -- Schema-driven factories --

/// A bare token of `raw`, spelled `text` if the tag carries text.
pub fn bare(raw: RawTokenKind, text: &str) -> SyntaxElement {
    let text = if raw.has_text_payload() { text } else { "" };
    SyntaxToken::bare(TokenKind::lift(raw, text)).into()
}

/// A value the slot accepts. Nodes are the smallest valid node of the
/// required kind.
pub fn fitting(child: &Child) -> SyntaxElement {
    match child.kind {
        ChildKind::Node(NodeChoice::Base(BaseKind::SyntaxCollection)) => {
            minimal(SyntaxKind::GenericArgumentList).into()
        }
        ChildKind::Node(NodeChoice::Base(_)) => minimal(SyntaxKind::IdentifierType).into(),
        ChildKind::Node(NodeChoice::Kind(kind)) | ChildKind::Collection { kind, .. } => {
            minimal(kind).into()
        }
        ChildKind::AnyToken => bare(RawTokenKind::BinaryOperator, "&"),
        ChildKind::Token(choices) => match choices[0] {
            TokenChoice::Keyword(keyword) => SyntaxToken::bare(TokenKind::Keyword(keyword)).into(),
            TokenChoice::Token(raw) => bare(raw, "T"),
        },
    }
}

/// A value the slot rejects.
pub fn misfit(child: &Child) -> Option<SyntaxElement> {
    if !child.is_optional {
        None
    } else if child.kind.is_token() {
        Some(minimal(SyntaxKind::IdentifierType).into())
    } else {
        Some(bare(RawTokenKind::Comma, ""))
    }
}

/// Mandatory slots filled, optional slots absent, collections empty.
pub fn minimal(kind: SyntaxKind) -> SyntaxNode {
    let children = kind
        .children()
        .iter()
        .map(|c| (!c.is_optional).then(|| fitting(c)))
        .collect();
    SyntaxNode::new(kind, children).unwrap()
}

/// Every slot filled.
pub fn full(kind: SyntaxKind) -> SyntaxNode {
    let children = kind.children().iter().map(|c| Some(fitting(c))).collect();
    SyntaxNode::new(kind, children).unwrap()
}

pub fn layout_kinds() -> Vec<SyntaxKind> {
    SyntaxKind::ALL
        .iter()
        .copied()
        .filter(|k| !k.is_collection())
        .collect()
}

// -- Lexer --

fn trivia_end(source: &str, mut pos: usize) -> usize {
    let bytes = source.as_bytes();
    while pos < bytes.len() {
        let rest = &source[pos..];
        if matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\r') {
            pos += 1;
        } else if rest.starts_with("//") {
            pos += rest.find('\n').unwrap_or(rest.len());
        } else if rest.starts_with("/*") {
            pos += rest.find("*/").map_or(rest.len(), |end| end + 2);
        } else {
            break;
        }
    }
    pos
}

fn token_end(source: &str, pos: usize) -> (RawTokenKind, usize) {
    let rest = &source[pos..];
    if rest.starts_with("->") {
        return (RawTokenKind::Arrow, pos + 2);
    }
    let first = rest.as_bytes()[0];
    let raw = match first {
        b'[' => RawTokenKind::LeftSquare,
        b']' => RawTokenKind::RightSquare,
        b'(' => RawTokenKind::LeftParen,
        b')' => RawTokenKind::RightParen,
        b'<' => RawTokenKind::LeftAngle,
        b'>' => RawTokenKind::RightAngle,
        b',' => RawTokenKind::Comma,
        b':' => RawTokenKind::Colon,
        b'.' => RawTokenKind::Period,
        b'!' => RawTokenKind::ExclamationMark,
        b'?' => RawTokenKind::PostfixQuestionMark,
        b'@' => RawTokenKind::AtSign,
        b'&' => RawTokenKind::BinaryOperator,
        b'~' => RawTokenKind::PrefixOperator,
        c if c.is_ascii_alphanumeric() || c == b'_' => {
            let len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let word = &rest[..len];
            let raw = match Keyword::from_text(word) {
                _ if word == "_" => RawTokenKind::Wildcard,
                Some(keyword) if keyword.is_lexer_classified() => RawTokenKind::Keyword,
                _ => RawTokenKind::Identifier,
            };
            return (raw, pos + len);
        }
        _ => RawTokenKind::Unknown,
    };
    (raw, pos + 1)
}

/// Split `source` into tokens. Trailing trivia is the run of spaces and
/// tabs after a token; everything else leads the next token. The last
/// token is always `Eof`.
pub fn lex(source: &str) -> Vec<SyntaxToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let start = pos;
        pos = trivia_end(source, pos);
        let leading = Trivia::parse(&source[start..pos]);
        if pos == source.len() {
            tokens.push(SyntaxToken::new(Token::new(
                TokenKind::Eof,
                leading,
                Trivia::new(),
            )));
            return tokens;
        }
        let (raw, end) = token_end(source, pos);
        let text = &source[pos..end];
        pos = end;
        let trailing_start = pos;
        while pos < source.len() && matches!(source.as_bytes()[pos], b' ' | b'\t') {
            pos += 1;
        }
        let trailing = Trivia::parse(&source[trailing_start..pos]);
        tokens.push(SyntaxToken::from_raw(raw, text, leading, trailing));
    }
}

// -- Parser --

/// Recursive descent over the type grammar, building validated nodes.
pub struct Parser {
    tokens: Vec<SyntaxToken>,
    pos: usize,
}

pub type ParseResult<T> = Result<T, String>;

impl Parser {
    pub fn new(source: &str) -> Self {
        Parser {
            tokens: lex(source),
            pos: 0,
        }
    }

    /// Parse one type and return it with the `Eof` token that holds any
    /// trivia after it.
    pub fn parse(source: &str) -> ParseResult<(SyntaxNode, SyntaxToken)> {
        let mut parser = Parser::new(source);
        let ty = parser.parse_type()?;
        match parser.peek() {
            TokenKind::Eof => Ok((ty, parser.tokens[parser.pos].clone())),
            other => Err(format!("expected end of input, found `{other}`")),
        }
    }

    fn peek(&self) -> TokenKind {
        self.tokens[self.pos].kind()
    }

    fn peek_nth(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, SyntaxToken::kind)
    }

    fn at(&self, raw: RawTokenKind) -> bool {
        self.peek().raw_kind() == raw
    }

    /// An identifier spelled like `keyword`. Contextual keywords are lexed
    /// as identifiers.
    fn at_contextual(&self, keyword: Keyword) -> bool {
        self.peek() == TokenKind::Keyword(keyword)
            || (self.at(RawTokenKind::Identifier) && self.peek().text() == keyword.text())
    }

    fn bump(&mut self) -> SyntaxElement {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token.into()
    }

    /// Consume a contextual keyword, re-kinding it.
    fn bump_keyword(&mut self, keyword: Keyword) -> SyntaxElement {
        let token = self.tokens[self.pos]
            .token()
            .clone()
            .with_kind(TokenKind::Keyword(keyword));
        self.pos += 1;
        SyntaxToken::new(token).into()
    }

    fn expect(&mut self, raw: RawTokenKind) -> ParseResult<SyntaxElement> {
        if self.at(raw) {
            Ok(self.bump())
        } else {
            Err(format!("expected {raw:?}, found `{}`", self.peek()))
        }
    }

    fn eat(&mut self, raw: RawTokenKind) -> Option<SyntaxElement> {
        self.at(raw).then(|| self.bump())
    }

    fn build(builder: NodeBuilder) -> ParseResult<SyntaxNode> {
        builder.build().map_err(|violation| violation.to_string())
    }

    pub fn parse_type(&mut self) -> ParseResult<SyntaxNode> {
        let first = self.parse_postfix()?;
        if !self.at(RawTokenKind::BinaryOperator) {
            return Ok(first);
        }
        let mut elements = Vec::new();
        let mut ty = first;
        loop {
            let ampersand = self.eat(RawTokenKind::BinaryOperator);
            let done = ampersand.is_none();
            let element = NodeBuilder::new(SyntaxKind::CompositionTypeElement)
                .set("type", ty)
                .set_optional("ampersand", ampersand);
            elements.push(Self::build(element)?.into());
            if done {
                break;
            }
            ty = self.parse_postfix()?;
        }
        let list = SyntaxNode::collection(SyntaxKind::CompositionTypeElementList, elements)
            .map_err(|v| v.to_string())?;
        Self::build(NodeBuilder::new(SyntaxKind::CompositionType).set("elements", list))
    }

    fn parse_postfix(&mut self) -> ParseResult<SyntaxNode> {
        let mut ty = self.parse_primary()?;
        loop {
            ty = match self.peek().raw_kind() {
                RawTokenKind::PostfixQuestionMark => Self::build(
                    NodeBuilder::new(SyntaxKind::OptionalType)
                        .set("wrappedType", ty)
                        .set("questionMark", self.bump()),
                )?,
                RawTokenKind::ExclamationMark => Self::build(
                    NodeBuilder::new(SyntaxKind::ImplicitlyUnwrappedOptionalType)
                        .set("wrappedType", ty)
                        .set("exclamationMark", self.bump()),
                )?,
                RawTokenKind::Period => {
                    let period = self.bump();
                    if self.at_contextual(Keyword::Type) || self.at_contextual(Keyword::ProtocolUpper)
                    {
                        let keyword = if self.at_contextual(Keyword::Type) {
                            Keyword::Type
                        } else {
                            Keyword::ProtocolUpper
                        };
                        Self::build(
                            NodeBuilder::new(SyntaxKind::MetatypeType)
                                .set("baseType", ty)
                                .set("period", period)
                                .set("metatypeSpecifier", self.bump_keyword(keyword)),
                        )?
                    } else {
                        let name = self.expect(RawTokenKind::Identifier)?;
                        let clause = self.parse_generic_arguments()?;
                        Self::build(
                            NodeBuilder::new(SyntaxKind::MemberType)
                                .set("baseType", ty)
                                .set("period", period)
                                .set("name", name)
                                .set_optional("genericArgumentClause", clause),
                        )?
                    }
                }
                _ => return Ok(ty),
            };
        }
    }

    fn parse_primary(&mut self) -> ParseResult<SyntaxNode> {
        for keyword in [Keyword::Some, Keyword::AnyLower] {
            if self.at_contextual(keyword) {
                let specifier = self.bump_keyword(keyword);
                let constraint = self.parse_postfix()?;
                return Self::build(
                    NodeBuilder::new(SyntaxKind::SomeOrAnyType)
                        .set("someOrAnySpecifier", specifier)
                        .set("constraint", constraint),
                );
            }
        }
        match self.peek() {
            TokenKind::LeftSquare => self.parse_collection_type(),
            TokenKind::LeftParen => self.parse_tuple_or_function(),
            TokenKind::Identifier(_)
            | TokenKind::Wildcard
            | TokenKind::Keyword(Keyword::SelfUpper | Keyword::AnyUpper) => {
                let name = self.bump();
                let clause = self.parse_generic_arguments()?;
                Self::build(
                    NodeBuilder::new(SyntaxKind::IdentifierType)
                        .set("name", name)
                        .set_optional("genericArgumentClause", clause),
                )
            }
            other => Err(format!("expected a type, found `{other}`")),
        }
    }

    fn parse_collection_type(&mut self) -> ParseResult<SyntaxNode> {
        let left = self.expect(RawTokenKind::LeftSquare)?;
        let first = self.parse_type()?;
        if let Some(colon) = self.eat(RawTokenKind::Colon) {
            let value = self.parse_type()?;
            let right = self.expect(RawTokenKind::RightSquare)?;
            return Self::build(
                NodeBuilder::new(SyntaxKind::DictionaryType)
                    .set("leftSquare", left)
                    .set("key", first)
                    .set("colon", colon)
                    .set("value", value)
                    .set("rightSquare", right),
            );
        }
        let right = self.expect(RawTokenKind::RightSquare)?;
        Self::build(
            NodeBuilder::new(SyntaxKind::ArrayType)
                .set("leftSquare", left)
                .set("element", first)
                .set("rightSquare", right),
        )
    }

    fn parse_generic_arguments(&mut self) -> ParseResult<Option<SyntaxElement>> {
        let Some(left) = self.eat(RawTokenKind::LeftAngle) else {
            return Ok(None);
        };
        let mut arguments = Vec::new();
        while !self.at(RawTokenKind::RightAngle) {
            let argument = self.parse_type()?;
            let comma = self.eat(RawTokenKind::Comma);
            let done = comma.is_none();
            let node = NodeBuilder::new(SyntaxKind::GenericArgument)
                .set("argument", argument)
                .set_optional("trailingComma", comma);
            arguments.push(Self::build(node)?.into());
            if done {
                break;
            }
        }
        let right = self.expect(RawTokenKind::RightAngle)?;
        let list = SyntaxNode::collection(SyntaxKind::GenericArgumentList, arguments)
            .map_err(|v| v.to_string())?;
        let clause = Self::build(
            NodeBuilder::new(SyntaxKind::GenericArgumentClause)
                .set("leftAngle", left)
                .set("arguments", list)
                .set("rightAngle", right),
        )?;
        Ok(Some(clause.into()))
    }

    fn parse_tuple_or_function(&mut self) -> ParseResult<SyntaxNode> {
        let left = self.expect(RawTokenKind::LeftParen)?;
        let mut elements = Vec::new();
        while !self.at(RawTokenKind::RightParen) {
            let mut element = NodeBuilder::new(SyntaxKind::TupleTypeElement);
            if self.at(RawTokenKind::Identifier) && self.peek_nth(1) == TokenKind::Colon {
                element = element
                    .set("firstName", self.bump())
                    .set("colon", self.bump());
            }
            let ty = self.parse_type()?;
            let comma = self.eat(RawTokenKind::Comma);
            let done = comma.is_none();
            element = element.set("type", ty).set_optional("trailingComma", comma);
            elements.push(Self::build(element)?.into());
            if done {
                break;
            }
        }
        let right = self.expect(RawTokenKind::RightParen)?;
        let list = SyntaxNode::collection(SyntaxKind::TupleTypeElementList, elements)
            .map_err(|v| v.to_string())?;

        let asynchronous = self
            .at_contextual(Keyword::Async)
            .then(|| self.bump_keyword(Keyword::Async));
        let throws = matches!(
            self.peek(),
            TokenKind::Keyword(Keyword::Throws | Keyword::Rethrows)
        )
        .then(|| self.bump());
        if asynchronous.is_none() && throws.is_none() && !self.at(RawTokenKind::Arrow) {
            return Self::build(
                NodeBuilder::new(SyntaxKind::TupleType)
                    .set("leftParen", left)
                    .set("elements", list)
                    .set("rightParen", right),
            );
        }
        let effects = if asynchronous.is_some() || throws.is_some() {
            let specifiers = NodeBuilder::new(SyntaxKind::TypeEffectSpecifiers)
                .set_optional("asyncSpecifier", asynchronous)
                .set_optional("throwsSpecifier", throws);
            Some(Self::build(specifiers)?.into())
        } else {
            None
        };
        let arrow = self.expect(RawTokenKind::Arrow)?;
        let output = self.parse_type()?;
        let return_clause = Self::build(
            NodeBuilder::new(SyntaxKind::ReturnClause)
                .set("arrow", arrow)
                .set("type", output),
        )?;
        Self::build(
            NodeBuilder::new(SyntaxKind::FunctionType)
                .set("leftParen", left)
                .set("parameters", list)
                .set("rightParen", right)
                .set_optional("effectSpecifiers", effects)
                .set("returnClause", return_clause),
        )
    }
}
