//! Compact, payload-free discriminant for token kinds.

/// Payload-free token tag, densely numbered from 0.
///
/// This is the hot-path discriminant: every parser decision and tree
/// dispatch compares one byte. Free-form text (identifiers, literals,
/// operators) and the concrete keyword live in [`TokenKind`](crate::TokenKind).
///
/// Variants are numbered in declaration order (alphabetical, with `Eof`
/// first). Generators rely on the numbering being dense: `ALL[i] as u8 == i`.
///
/// | Shape               | Tags |
/// |---------------------|------|
/// | Fixed punctuation   | `Arrow`, `Comma`, brackets, quotes, ... |
/// | Fixed keywords      | `Pound*` directives |
/// | Fixed, unclassified | `Wildcard` |
/// | Keyword             | `Keyword` (spelling resolved via [`Keyword`](crate::Keyword)) |
/// | Free-form text      | `Identifier`, literals, operators, `Unknown` |
/// | Control             | `Eof` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum RawTokenKind {
    Eof = 0,
    Arrow = 1,                 // ->
    AtSign = 2,                // @
    Backslash = 3,             // \
    Backtick = 4,              // `
    BinaryOperator = 5,        // text
    Colon = 6,                 // :
    Comma = 7,                 // ,
    DollarIdentifier = 8,      // text
    Ellipsis = 9,              // ...
    Equal = 10,                // =
    ExclamationMark = 11,      // !
    FloatLiteral = 12,         // text
    Identifier = 13,           // text
    InfixQuestionMark = 14,    // ?
    IntegerLiteral = 15,       // text
    Keyword = 16,              // keyword spelling
    LeftAngle = 17,            // <
    LeftBrace = 18,            // {
    LeftParen = 19,            // (
    LeftSquare = 20,           // [
    MultilineStringQuote = 21, // """
    Period = 22,               // .
    PostfixOperator = 23,      // text
    PostfixQuestionMark = 24,  // ?
    Pound = 25,                // #
    PoundAvailable = 26,       // #available
    PoundElse = 27,            // #else
    PoundElseif = 28,          // #elseif
    PoundEndif = 29,           // #endif
    PoundIf = 30,              // #if
    PoundSourceLocation = 31,  // #sourceLocation
    PoundUnavailable = 32,     // #unavailable
    PrefixAmpersand = 33,      // &
    PrefixOperator = 34,       // text
    RawStringDelimiter = 35,   // text
    RegexLiteral = 36,         // text
    RightAngle = 37,           // >
    RightBrace = 38,           // }
    RightParen = 39,           // )
    RightSquare = 40,          // ]
    Semicolon = 41,            // ;
    SingleQuote = 42,          // '
    StringQuote = 43,          // "
    StringSegment = 44,        // text
    Unknown = 45,              // text
    Wildcard = 46,             // _
}

// Compile-time assertion: RawTokenKind is exactly 1 byte.
const _: () = assert!(size_of::<RawTokenKind>() == 1);

impl RawTokenKind {
    /// Every tag, indexed by its discriminant.
    pub const ALL: &'static [RawTokenKind] = &[
        Self::Eof,
        Self::Arrow,
        Self::AtSign,
        Self::Backslash,
        Self::Backtick,
        Self::BinaryOperator,
        Self::Colon,
        Self::Comma,
        Self::DollarIdentifier,
        Self::Ellipsis,
        Self::Equal,
        Self::ExclamationMark,
        Self::FloatLiteral,
        Self::Identifier,
        Self::InfixQuestionMark,
        Self::IntegerLiteral,
        Self::Keyword,
        Self::LeftAngle,
        Self::LeftBrace,
        Self::LeftParen,
        Self::LeftSquare,
        Self::MultilineStringQuote,
        Self::Period,
        Self::PostfixOperator,
        Self::PostfixQuestionMark,
        Self::Pound,
        Self::PoundAvailable,
        Self::PoundElse,
        Self::PoundElseif,
        Self::PoundEndif,
        Self::PoundIf,
        Self::PoundSourceLocation,
        Self::PoundUnavailable,
        Self::PrefixAmpersand,
        Self::PrefixOperator,
        Self::RawStringDelimiter,
        Self::RegexLiteral,
        Self::RightAngle,
        Self::RightBrace,
        Self::RightParen,
        Self::RightSquare,
        Self::Semicolon,
        Self::SingleQuote,
        Self::StringQuote,
        Self::StringSegment,
        Self::Unknown,
        Self::Wildcard,
    ];

    /// Number of tags.
    pub const COUNT: usize = Self::ALL.len();

    /// Checked conversion from a discriminant.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < Self::COUNT {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// The fixed spelling shared by every token with this tag, or `None`
    /// when the text varies (free-form tags and `Keyword`).
    ///
    /// `Eof` spells as the empty string.
    pub const fn default_text(self) -> Option<&'static str> {
        match self {
            Self::Eof => Some(""),
            Self::Arrow => Some("->"),
            Self::AtSign => Some("@"),
            Self::Backslash => Some("\\"),
            Self::Backtick => Some("`"),
            Self::Colon => Some(":"),
            Self::Comma => Some(","),
            Self::Ellipsis => Some("..."),
            Self::Equal => Some("="),
            Self::ExclamationMark => Some("!"),
            Self::InfixQuestionMark | Self::PostfixQuestionMark => Some("?"),
            Self::LeftAngle => Some("<"),
            Self::LeftBrace => Some("{"),
            Self::LeftParen => Some("("),
            Self::LeftSquare => Some("["),
            Self::MultilineStringQuote => Some("\"\"\""),
            Self::Period => Some("."),
            Self::Pound => Some("#"),
            Self::PoundAvailable => Some("#available"),
            Self::PoundElse => Some("#else"),
            Self::PoundElseif => Some("#elseif"),
            Self::PoundEndif => Some("#endif"),
            Self::PoundIf => Some("#if"),
            Self::PoundSourceLocation => Some("#sourceLocation"),
            Self::PoundUnavailable => Some("#unavailable"),
            Self::PrefixAmpersand => Some("&"),
            Self::RightAngle => Some(">"),
            Self::RightBrace => Some("}"),
            Self::RightParen => Some(")"),
            Self::RightSquare => Some("]"),
            Self::Semicolon => Some(";"),
            Self::SingleQuote => Some("'"),
            Self::StringQuote => Some("\""),
            Self::Wildcard => Some("_"),
            Self::BinaryOperator
            | Self::DollarIdentifier
            | Self::FloatLiteral
            | Self::Identifier
            | Self::IntegerLiteral
            | Self::Keyword
            | Self::PostfixOperator
            | Self::PrefixOperator
            | Self::RawStringDelimiter
            | Self::RegexLiteral
            | Self::StringSegment
            | Self::Unknown => None,
        }
    }

    /// Whether every token with this tag has the same spelling.
    #[inline]
    pub const fn is_fixed_spelling(self) -> bool {
        self.default_text().is_some()
    }

    /// Whether tokens with this tag carry free-form source text.
    ///
    /// `Keyword` is excluded: its text is determined by the keyword.
    #[inline]
    pub const fn has_text_payload(self) -> bool {
        !self.is_fixed_spelling() && !matches!(self, Self::Keyword)
    }

    /// Punctuation tokens separate identifiers from each other, e.g. the
    /// `<` and `>` of a generic argument list or the quotes of a string.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            Self::Arrow
                | Self::AtSign
                | Self::Backslash
                | Self::Backtick
                | Self::Colon
                | Self::Comma
                | Self::Ellipsis
                | Self::Equal
                | Self::ExclamationMark
                | Self::InfixQuestionMark
                | Self::LeftAngle
                | Self::LeftBrace
                | Self::LeftParen
                | Self::LeftSquare
                | Self::MultilineStringQuote
                | Self::Period
                | Self::PostfixQuestionMark
                | Self::Pound
                | Self::PrefixAmpersand
                | Self::RightAngle
                | Self::RightBrace
                | Self::RightParen
                | Self::RightSquare
                | Self::Semicolon
                | Self::SingleQuote
                | Self::StringQuote
        )
    }

    /// Fixed-spelling tags the lexer always classifies as keywords.
    ///
    /// Only the compiler directives. `_` is neither a keyword nor
    /// punctuation.
    pub const fn is_fixed_keyword(self) -> bool {
        matches!(
            self,
            Self::PoundAvailable
                | Self::PoundElse
                | Self::PoundElseif
                | Self::PoundEndif
                | Self::PoundIf
                | Self::PoundSourceLocation
                | Self::PoundUnavailable
        )
    }

    /// Diagnostic label for this tag.
    ///
    /// Fixed tags use their glyph; free-form tags use a category name.
    /// `Keyword` is labelled generically; a concrete keyword token is
    /// labelled by its spelling (see `TokenKind::name_for_diagnostics`).
    pub const fn name_for_diagnostics(self) -> &'static str {
        match self {
            Self::Eof => "end of file",
            Self::BinaryOperator => "binary operator",
            Self::DollarIdentifier => "dollar identifier",
            Self::FloatLiteral => "floating literal",
            Self::Identifier => "identifier",
            Self::IntegerLiteral => "integer literal",
            Self::Keyword => "keyword",
            Self::PostfixOperator => "postfix operator",
            Self::PrefixOperator => "prefix operator",
            Self::RawStringDelimiter => "raw string delimiter",
            Self::RegexLiteral => "regex literal",
            Self::StringSegment => "string segment",
            Self::Unknown => "token",
            Self::Wildcard => "wildcard",
            fixed => match fixed.default_text() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}
