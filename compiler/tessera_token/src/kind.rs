//! Cooked token kinds: a raw tag plus the text or keyword it carries.

use std::fmt;

use crate::{Keyword, Name, RawTokenKind};

/// The kind of a lexical token.
///
/// Fixed-spelling tokens are bare variants. Tokens whose text varies carry
/// an interned [`Name`], and keyword tokens carry their [`Keyword`].
/// Equality is a tag compare plus at most one 4-byte compare, and the whole
/// value is `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    Eof,
    Arrow,
    AtSign,
    Backslash,
    Backtick,
    BinaryOperator(Name),
    Colon,
    Comma,
    DollarIdentifier(Name),
    Ellipsis,
    Equal,
    ExclamationMark,
    FloatLiteral(Name),
    Identifier(Name),
    InfixQuestionMark,
    IntegerLiteral(Name),
    Keyword(Keyword),
    LeftAngle,
    LeftBrace,
    LeftParen,
    LeftSquare,
    MultilineStringQuote,
    Period,
    PostfixOperator(Name),
    PostfixQuestionMark,
    Pound,
    PoundAvailable,
    PoundElse,
    PoundElseif,
    PoundEndif,
    PoundIf,
    PoundSourceLocation,
    PoundUnavailable,
    PrefixAmpersand,
    PrefixOperator(Name),
    RawStringDelimiter(Name),
    RegexLiteral(Name),
    RightAngle,
    RightBrace,
    RightParen,
    RightSquare,
    Semicolon,
    SingleQuote,
    StringQuote,
    StringSegment(Name),
    Unknown(Name),
    Wildcard,
}

/// A `(RawTokenKind, text)` pair that no [`TokenKind`] corresponds to.
///
/// Only a lexer that disagrees with this crate produces one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiftError {
    /// A `Keyword` tag whose text is not a registered keyword.
    UnknownKeyword { text: String },
    /// A fixed-spelling tag whose text is neither empty nor the spelling.
    SpellingMismatch { raw: RawTokenKind, text: String },
}

impl fmt::Display for LiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiftError::UnknownKeyword { text } => {
                write!(f, "`{text}` was lexed as a keyword but is not one")
            }
            LiftError::SpellingMismatch { raw, text } => write!(
                f,
                "{raw:?} token must be spelled `{}`, got `{text}`",
                raw.default_text().unwrap_or_default()
            ),
        }
    }
}

impl std::error::Error for LiftError {}

impl TokenKind {
    /// The payload-free tag of this kind.
    #[inline]
    pub const fn raw_kind(self) -> RawTokenKind {
        match self {
            Self::Eof => RawTokenKind::Eof,
            Self::Arrow => RawTokenKind::Arrow,
            Self::AtSign => RawTokenKind::AtSign,
            Self::Backslash => RawTokenKind::Backslash,
            Self::Backtick => RawTokenKind::Backtick,
            Self::BinaryOperator(_) => RawTokenKind::BinaryOperator,
            Self::Colon => RawTokenKind::Colon,
            Self::Comma => RawTokenKind::Comma,
            Self::DollarIdentifier(_) => RawTokenKind::DollarIdentifier,
            Self::Ellipsis => RawTokenKind::Ellipsis,
            Self::Equal => RawTokenKind::Equal,
            Self::ExclamationMark => RawTokenKind::ExclamationMark,
            Self::FloatLiteral(_) => RawTokenKind::FloatLiteral,
            Self::Identifier(_) => RawTokenKind::Identifier,
            Self::InfixQuestionMark => RawTokenKind::InfixQuestionMark,
            Self::IntegerLiteral(_) => RawTokenKind::IntegerLiteral,
            Self::Keyword(_) => RawTokenKind::Keyword,
            Self::LeftAngle => RawTokenKind::LeftAngle,
            Self::LeftBrace => RawTokenKind::LeftBrace,
            Self::LeftParen => RawTokenKind::LeftParen,
            Self::LeftSquare => RawTokenKind::LeftSquare,
            Self::MultilineStringQuote => RawTokenKind::MultilineStringQuote,
            Self::Period => RawTokenKind::Period,
            Self::PostfixOperator(_) => RawTokenKind::PostfixOperator,
            Self::PostfixQuestionMark => RawTokenKind::PostfixQuestionMark,
            Self::Pound => RawTokenKind::Pound,
            Self::PoundAvailable => RawTokenKind::PoundAvailable,
            Self::PoundElse => RawTokenKind::PoundElse,
            Self::PoundElseif => RawTokenKind::PoundElseif,
            Self::PoundEndif => RawTokenKind::PoundEndif,
            Self::PoundIf => RawTokenKind::PoundIf,
            Self::PoundSourceLocation => RawTokenKind::PoundSourceLocation,
            Self::PoundUnavailable => RawTokenKind::PoundUnavailable,
            Self::PrefixAmpersand => RawTokenKind::PrefixAmpersand,
            Self::PrefixOperator(_) => RawTokenKind::PrefixOperator,
            Self::RawStringDelimiter(_) => RawTokenKind::RawStringDelimiter,
            Self::RegexLiteral(_) => RawTokenKind::RegexLiteral,
            Self::RightAngle => RawTokenKind::RightAngle,
            Self::RightBrace => RawTokenKind::RightBrace,
            Self::RightParen => RawTokenKind::RightParen,
            Self::RightSquare => RawTokenKind::RightSquare,
            Self::Semicolon => RawTokenKind::Semicolon,
            Self::SingleQuote => RawTokenKind::SingleQuote,
            Self::StringQuote => RawTokenKind::StringQuote,
            Self::StringSegment(_) => RawTokenKind::StringSegment,
            Self::Unknown(_) => RawTokenKind::Unknown,
            Self::Wildcard => RawTokenKind::Wildcard,
        }
    }

    /// The free-form text carried by this kind, if any.
    #[inline]
    pub const fn payload(self) -> Option<Name> {
        match self {
            Self::BinaryOperator(name)
            | Self::DollarIdentifier(name)
            | Self::FloatLiteral(name)
            | Self::Identifier(name)
            | Self::IntegerLiteral(name)
            | Self::PostfixOperator(name)
            | Self::PrefixOperator(name)
            | Self::RawStringDelimiter(name)
            | Self::RegexLiteral(name)
            | Self::StringSegment(name)
            | Self::Unknown(name) => Some(name),
            _ => None,
        }
    }

    /// The keyword, if this is a keyword token.
    #[inline]
    pub const fn keyword(self) -> Option<Keyword> {
        match self {
            Self::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// The spelling every token of this kind has, or `None` when the text
    /// is free-form (identifiers, literals, operators).
    #[inline]
    pub const fn canonical_text(self) -> Option<&'static str> {
        match self {
            Self::Keyword(keyword) => Some(keyword.text()),
            _ => self.raw_kind().default_text(),
        }
    }

    /// The source spelling of this kind: payload text or canonical text.
    pub fn text(self) -> &'static str {
        match self.payload() {
            Some(name) => name.as_str(),
            None => self.canonical_text().unwrap_or_default(),
        }
    }

    /// Label for diagnostics: the glyph of fixed tokens, the spelling of
    /// keywords, or a category name such as `identifier`.
    #[inline]
    pub const fn name_for_diagnostics(self) -> &'static str {
        match self {
            Self::Keyword(keyword) => keyword.text(),
            _ => self.raw_kind().name_for_diagnostics(),
        }
    }

    /// Whether this token is reserved unconditionally and can never be an
    /// identifier: lexer-classified keywords, compiler directives and `_`.
    ///
    /// Contextual keywords return `false`.
    #[inline]
    pub const fn is_lexer_classified_keyword(self) -> bool {
        match self {
            Self::Keyword(keyword) => keyword.is_lexer_classified(),
            _ => self.raw_kind().is_fixed_keyword(),
        }
    }

    /// Whether this token is punctuation (see [`RawTokenKind::is_punctuation`]).
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        self.raw_kind().is_punctuation()
    }

    /// Build a kind from lexer output.
    ///
    /// # Panics
    ///
    /// Panics if the pair cannot correspond to any kind (see [`LiftError`]).
    /// The lexer and this crate have diverged when that happens.
    #[inline]
    pub fn lift(raw: RawTokenKind, text: &str) -> TokenKind {
        Self::try_lift(raw, text).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Checked version of [`TokenKind::lift`].
    ///
    /// Fixed-spelling tags accept either the empty string or their spelling.
    /// Free-form tags accept any text. `Keyword` requires a registered
    /// spelling.
    pub fn try_lift(raw: RawTokenKind, text: &str) -> Result<TokenKind, LiftError> {
        let kind = match raw {
            RawTokenKind::BinaryOperator => Self::BinaryOperator(Name::intern(text)),
            RawTokenKind::DollarIdentifier => Self::DollarIdentifier(Name::intern(text)),
            RawTokenKind::FloatLiteral => Self::FloatLiteral(Name::intern(text)),
            RawTokenKind::Identifier => Self::Identifier(Name::intern(text)),
            RawTokenKind::IntegerLiteral => Self::IntegerLiteral(Name::intern(text)),
            RawTokenKind::PostfixOperator => Self::PostfixOperator(Name::intern(text)),
            RawTokenKind::PrefixOperator => Self::PrefixOperator(Name::intern(text)),
            RawTokenKind::RawStringDelimiter => Self::RawStringDelimiter(Name::intern(text)),
            RawTokenKind::RegexLiteral => Self::RegexLiteral(Name::intern(text)),
            RawTokenKind::StringSegment => Self::StringSegment(Name::intern(text)),
            RawTokenKind::Unknown => Self::Unknown(Name::intern(text)),
            RawTokenKind::Keyword => match Keyword::from_text(text) {
                Some(keyword) => Self::Keyword(keyword),
                None => {
                    return Err(LiftError::UnknownKeyword {
                        text: text.to_owned(),
                    })
                }
            },
            fixed => {
                if !text.is_empty() && fixed.default_text() != Some(text) {
                    return Err(LiftError::SpellingMismatch {
                        raw: fixed,
                        text: text.to_owned(),
                    });
                }
                Self::from_fixed(fixed)
            }
        };
        Ok(kind)
    }

    /// Map a fixed-spelling tag to its bare variant.
    fn from_fixed(raw: RawTokenKind) -> TokenKind {
        match raw {
            RawTokenKind::Arrow => Self::Arrow,
            RawTokenKind::AtSign => Self::AtSign,
            RawTokenKind::Backslash => Self::Backslash,
            RawTokenKind::Backtick => Self::Backtick,
            RawTokenKind::Colon => Self::Colon,
            RawTokenKind::Comma => Self::Comma,
            RawTokenKind::Ellipsis => Self::Ellipsis,
            RawTokenKind::Equal => Self::Equal,
            RawTokenKind::ExclamationMark => Self::ExclamationMark,
            RawTokenKind::InfixQuestionMark => Self::InfixQuestionMark,
            RawTokenKind::LeftAngle => Self::LeftAngle,
            RawTokenKind::LeftBrace => Self::LeftBrace,
            RawTokenKind::LeftParen => Self::LeftParen,
            RawTokenKind::LeftSquare => Self::LeftSquare,
            RawTokenKind::MultilineStringQuote => Self::MultilineStringQuote,
            RawTokenKind::Period => Self::Period,
            RawTokenKind::PostfixQuestionMark => Self::PostfixQuestionMark,
            RawTokenKind::Pound => Self::Pound,
            RawTokenKind::PoundAvailable => Self::PoundAvailable,
            RawTokenKind::PoundElse => Self::PoundElse,
            RawTokenKind::PoundElseif => Self::PoundElseif,
            RawTokenKind::PoundEndif => Self::PoundEndif,
            RawTokenKind::PoundIf => Self::PoundIf,
            RawTokenKind::PoundSourceLocation => Self::PoundSourceLocation,
            RawTokenKind::PoundUnavailable => Self::PoundUnavailable,
            RawTokenKind::PrefixAmpersand => Self::PrefixAmpersand,
            RawTokenKind::RightAngle => Self::RightAngle,
            RawTokenKind::RightBrace => Self::RightBrace,
            RawTokenKind::RightParen => Self::RightParen,
            RawTokenKind::RightSquare => Self::RightSquare,
            RawTokenKind::Semicolon => Self::Semicolon,
            RawTokenKind::SingleQuote => Self::SingleQuote,
            RawTokenKind::StringQuote => Self::StringQuote,
            RawTokenKind::Wildcard => Self::Wildcard,
            RawTokenKind::Eof => Self::Eof,
            // try_lift resolves free-form and keyword tags itself.
            other => unreachable!("{other:?} is not a fixed-spelling tag"),
        }
    }

    /// Decompose into the raw tag and, for tokens whose text is not fixed
    /// by the tag, that text.
    ///
    /// Keywords return their spelling since `Keyword` alone does not
    /// determine it. Inverse of [`TokenKind::lift`].
    pub fn lower(self) -> (RawTokenKind, Option<&'static str>) {
        let text = match self {
            Self::Keyword(keyword) => Some(keyword.text()),
            _ => self.payload().map(Name::as_str),
        };
        (self.raw_kind(), text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
