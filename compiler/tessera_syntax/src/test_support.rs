//! Small tree fixtures shared by the unit tests.

use tessera_token::{RawTokenKind, TokenKind, Trivia};

use crate::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// A fixed-spelling token with no trivia.
pub(crate) fn token(raw: RawTokenKind) -> SyntaxElement {
    SyntaxToken::bare(TokenKind::lift(raw, "")).into()
}

/// A token with trivia given as source text.
pub(crate) fn spaced(raw: RawTokenKind, text: &str, leading: &str, trailing: &str) -> SyntaxElement {
    SyntaxToken::from_raw(raw, text, Trivia::parse(leading), Trivia::parse(trailing)).into()
}

pub(crate) fn ident(text: &str) -> SyntaxElement {
    SyntaxToken::bare(TokenKind::lift(RawTokenKind::Identifier, text)).into()
}

/// `Name` as an `IdentifierType`.
pub(crate) fn ident_type(name: &str) -> SyntaxNode {
    SyntaxNode::new(SyntaxKind::IdentifierType, vec![Some(ident(name)), None]).unwrap()
}

/// `[element]`
pub(crate) fn array_type(element: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(
        SyntaxKind::ArrayType,
        vec![
            Some(token(RawTokenKind::LeftSquare)),
            Some(element.into()),
            Some(token(RawTokenKind::RightSquare)),
        ],
    )
    .unwrap()
}

/// `Name` or `Name,` as a `GenericArgument`.
pub(crate) fn generic_argument(name: &str, trailing_comma: bool) -> SyntaxNode {
    let comma = trailing_comma.then(|| spaced(RawTokenKind::Comma, ",", "", " "));
    SyntaxNode::new(
        SyntaxKind::GenericArgument,
        vec![Some(ident_type(name).into()), comma],
    )
    .unwrap()
}

/// `Int` followed by `depth` question marks, one `OptionalType` per level.
pub(crate) fn optional_chain(depth: usize) -> SyntaxNode {
    (0..depth).fold(ident_type("Int"), |wrapped, _| {
        SyntaxNode::new(
            SyntaxKind::OptionalType,
            vec![
                Some(wrapped.into()),
                Some(token(RawTokenKind::PostfixQuestionMark)),
            ],
        )
        .unwrap()
    })
}
