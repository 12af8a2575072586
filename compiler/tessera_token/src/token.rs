//! A token as it appears in a syntax tree: kind plus surrounding trivia.

use std::fmt;

use crate::{LiftError, RawTokenKind, TokenKind, Trivia};

/// Whether a token was present in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SourcePresence {
    #[default]
    Present,
    /// Synthesized by parser recovery; prints as nothing.
    Missing,
}

/// A lexical token with its leading and trailing trivia.
///
/// Printing a present token writes its leading trivia, its text and its
/// trailing trivia. A missing token writes nothing and has no trivia.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    leading_trivia: Trivia,
    trailing_trivia: Trivia,
    presence: SourcePresence,
}

impl Token {
    /// Create a present token.
    pub fn new(kind: TokenKind, leading_trivia: Trivia, trailing_trivia: Trivia) -> Self {
        Token {
            kind,
            leading_trivia,
            trailing_trivia,
            presence: SourcePresence::Present,
        }
    }

    /// Create a present token with no trivia.
    pub fn bare(kind: TokenKind) -> Self {
        Self::new(kind, Trivia::new(), Trivia::new())
    }

    /// Create a token from lexer output.
    ///
    /// # Panics
    ///
    /// Panics if `(raw, text)` does not name a token kind; see [`TokenKind::lift`].
    pub fn from_raw(
        raw: RawTokenKind,
        text: &str,
        leading_trivia: Trivia,
        trailing_trivia: Trivia,
    ) -> Self {
        Self::new(TokenKind::lift(raw, text), leading_trivia, trailing_trivia)
    }

    /// Checked version of [`Token::from_raw`].
    pub fn try_from_raw(
        raw: RawTokenKind,
        text: &str,
        leading_trivia: Trivia,
        trailing_trivia: Trivia,
    ) -> Result<Self, LiftError> {
        let kind = TokenKind::try_lift(raw, text)?;
        Ok(Self::new(kind, leading_trivia, trailing_trivia))
    }

    /// A token the parser expected but did not find.
    pub fn missing(kind: TokenKind) -> Self {
        Token {
            kind,
            leading_trivia: Trivia::new(),
            trailing_trivia: Trivia::new(),
            presence: SourcePresence::Missing,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn raw_kind(&self) -> RawTokenKind {
        self.kind.raw_kind()
    }

    #[inline]
    pub fn leading_trivia(&self) -> &Trivia {
        &self.leading_trivia
    }

    #[inline]
    pub fn trailing_trivia(&self) -> &Trivia {
        &self.trailing_trivia
    }

    #[inline]
    pub fn presence(&self) -> SourcePresence {
        self.presence
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.presence == SourcePresence::Missing
    }

    /// The token's own text, without trivia. Empty for missing tokens.
    pub fn text(&self) -> &'static str {
        match self.presence {
            SourcePresence::Present => self.kind.text(),
            SourcePresence::Missing => "",
        }
    }

    /// Byte length of the token's source, trivia included.
    pub fn text_len(&self) -> usize {
        match self.presence {
            SourcePresence::Present => {
                self.leading_trivia.text_len()
                    + self.kind.text().len()
                    + self.trailing_trivia.text_len()
            }
            SourcePresence::Missing => 0,
        }
    }

    /// Write the token's source, trivia included.
    pub fn write_source<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.is_missing() {
            return Ok(());
        }
        self.leading_trivia.write_to(out)?;
        out.write_str(self.kind.text())?;
        self.trailing_trivia.write_to(out)
    }

    /// Replace the leading trivia. Missing tokens stay trivia-free.
    #[must_use]
    pub fn with_leading_trivia(mut self, trivia: Trivia) -> Self {
        if !self.is_missing() {
            self.leading_trivia = trivia;
        }
        self
    }

    /// Replace the trailing trivia. Missing tokens stay trivia-free.
    #[must_use]
    pub fn with_trailing_trivia(mut self, trivia: Trivia) -> Self {
        if !self.is_missing() {
            self.trailing_trivia = trivia;
        }
        self
    }

    /// Replace the kind, keeping trivia and presence.
    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_source(f)
    }
}
