//! Shared tokens.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tessera_token::{LiftError, RawTokenKind, Token, TokenKind, Trivia};

/// A token leaf in a syntax tree.
///
/// Cloning shares the underlying [`Token`].
#[derive(Clone, Debug)]
pub struct SyntaxToken(Arc<Token>);

impl SyntaxToken {
    pub fn new(token: Token) -> Self {
        SyntaxToken(Arc::new(token))
    }

    /// A present token of `kind` with no trivia.
    pub fn bare(kind: TokenKind) -> Self {
        Self::new(Token::bare(kind))
    }

    /// A token for lexer output.
    ///
    /// # Panics
    ///
    /// Panics if `(raw, text)` does not name a token kind.
    pub fn from_raw(raw: RawTokenKind, text: &str, leading: Trivia, trailing: Trivia) -> Self {
        Self::new(Token::from_raw(raw, text, leading, trailing))
    }

    pub fn try_from_raw(
        raw: RawTokenKind,
        text: &str,
        leading: Trivia,
        trailing: Trivia,
    ) -> Result<Self, LiftError> {
        Token::try_from_raw(raw, text, leading, trailing).map(Self::new)
    }

    /// A token synthesized in place of one the source lacks.
    pub fn missing(kind: TokenKind) -> Self {
        Self::new(Token::missing(kind))
    }

    #[inline]
    pub fn token(&self) -> &Token {
        &self.0
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.0.kind()
    }

    #[inline]
    pub fn raw_kind(&self) -> RawTokenKind {
        self.0.raw_kind()
    }

    /// Token text without trivia.
    pub fn text(&self) -> &'static str {
        self.0.text()
    }

    /// Byte length including trivia.
    pub fn text_len(&self) -> usize {
        self.0.text_len()
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_missing()
    }

    /// Whether both handles share one allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &SyntaxToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn write_source<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.0.write_source(out)
    }
}

impl From<Token> for SyntaxToken {
    fn from(token: Token) -> Self {
        Self::new(token)
    }
}

impl PartialEq for SyntaxToken {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl Eq for SyntaxToken {}

impl Hash for SyntaxToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_source(f)
    }
}
