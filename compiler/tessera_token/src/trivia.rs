//! Whitespace and comments attached to tokens.
//!
//! Trivia carries no meaning for the grammar but is kept on every token so
//! that printing a tree reproduces its source byte for byte. Runs of the
//! same whitespace character are stored as a count; comments and
//! unrecognized text are interned.

use std::fmt;

use smallvec::SmallVec;

use crate::Name;

/// One run of trivia.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriviaPiece {
    /// ` ` repeated
    Spaces(u32),
    /// `\t` repeated
    Tabs(u32),
    /// `\u{b}` repeated
    VerticalTabs(u32),
    /// `\u{c}` repeated
    Formfeeds(u32),
    /// `\n` repeated
    Newlines(u32),
    /// `\r` repeated
    CarriageReturns(u32),
    /// `\r\n` repeated
    CarriageReturnLineFeeds(u32),
    /// `\` repeated, e.g. around raw string delimiters
    Backslashes(u32),
    /// `#` repeated
    Pounds(u32),
    /// `// ...` up to, not including, the line break
    LineComment(Name),
    /// `/* ... */`, possibly nested
    BlockComment(Name),
    /// `/// ...`
    DocLineComment(Name),
    /// `/** ... */`
    DocBlockComment(Name),
    /// Source text the lexer could not attach to any token.
    UnexpectedText(Name),
}

const _: () = assert!(size_of::<TriviaPiece>() == 8);

impl TriviaPiece {
    /// The repeated character and count of a counted piece.
    fn run(self) -> Option<(&'static str, u32)> {
        match self {
            Self::Spaces(n) => Some((" ", n)),
            Self::Tabs(n) => Some(("\t", n)),
            Self::VerticalTabs(n) => Some(("\u{b}", n)),
            Self::Formfeeds(n) => Some(("\u{c}", n)),
            Self::Newlines(n) => Some(("\n", n)),
            Self::CarriageReturns(n) => Some(("\r", n)),
            Self::CarriageReturnLineFeeds(n) => Some(("\r\n", n)),
            Self::Backslashes(n) => Some(("\\", n)),
            Self::Pounds(n) => Some(("#", n)),
            Self::LineComment(_)
            | Self::BlockComment(_)
            | Self::DocLineComment(_)
            | Self::DocBlockComment(_)
            | Self::UnexpectedText(_) => None,
        }
    }

    /// The interned text of a comment or unexpected-text piece.
    fn interned(self) -> Option<Name> {
        match self {
            Self::LineComment(text)
            | Self::BlockComment(text)
            | Self::DocLineComment(text)
            | Self::DocBlockComment(text)
            | Self::UnexpectedText(text) => Some(text),
            _ => None,
        }
    }

    /// Length of this piece in bytes.
    pub fn text_len(self) -> usize {
        match (self.run(), self.interned()) {
            (Some((unit, count)), _) => unit.len() * count as usize,
            (None, Some(text)) => text.as_str().len(),
            (None, None) => 0,
        }
    }

    /// Whether this piece contains a line break.
    pub fn is_newline(self) -> bool {
        matches!(
            self,
            Self::Newlines(_) | Self::CarriageReturns(_) | Self::CarriageReturnLineFeeds(_)
        )
    }

    /// Whether this piece is any kind of comment.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Self::LineComment(_)
                | Self::BlockComment(_)
                | Self::DocLineComment(_)
                | Self::DocBlockComment(_)
        )
    }

    /// Whether this is a doc comment.
    pub fn is_doc_comment(self) -> bool {
        matches!(self, Self::DocLineComment(_) | Self::DocBlockComment(_))
    }

    /// Whether this piece is plain whitespace (including line breaks).
    pub fn is_whitespace(self) -> bool {
        matches!(
            self,
            Self::Spaces(_)
                | Self::Tabs(_)
                | Self::VerticalTabs(_)
                | Self::Formfeeds(_)
                | Self::Newlines(_)
                | Self::CarriageReturns(_)
                | Self::CarriageReturnLineFeeds(_)
        )
    }

    /// Combine two runs of the same character, if `next` continues `self`.
    fn merged_with(self, next: TriviaPiece) -> Option<TriviaPiece> {
        let merged = match (self, next) {
            (Self::Spaces(a), Self::Spaces(b)) => Self::Spaces(a.checked_add(b)?),
            (Self::Tabs(a), Self::Tabs(b)) => Self::Tabs(a.checked_add(b)?),
            (Self::VerticalTabs(a), Self::VerticalTabs(b)) => {
                Self::VerticalTabs(a.checked_add(b)?)
            }
            (Self::Formfeeds(a), Self::Formfeeds(b)) => Self::Formfeeds(a.checked_add(b)?),
            (Self::Newlines(a), Self::Newlines(b)) => Self::Newlines(a.checked_add(b)?),
            (Self::CarriageReturns(a), Self::CarriageReturns(b)) => {
                Self::CarriageReturns(a.checked_add(b)?)
            }
            (Self::CarriageReturnLineFeeds(a), Self::CarriageReturnLineFeeds(b)) => {
                Self::CarriageReturnLineFeeds(a.checked_add(b)?)
            }
            (Self::Backslashes(a), Self::Backslashes(b)) => Self::Backslashes(a.checked_add(b)?),
            (Self::Pounds(a), Self::Pounds(b)) => Self::Pounds(a.checked_add(b)?),
            _ => return None,
        };
        Some(merged)
    }

    /// Write the source text of this piece.
    pub fn write_to<W: fmt::Write>(self, out: &mut W) -> fmt::Result {
        if let Some((unit, count)) = self.run() {
            for _ in 0..count {
                out.write_str(unit)?;
            }
            return Ok(());
        }
        match self.interned() {
            Some(text) => out.write_str(text.as_str()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for TriviaPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// The trivia on one side of a token, in source order.
///
/// Most tokens have zero, one or two pieces (a space, or a newline followed
/// by indentation), so the pieces are stored inline up to two.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Trivia {
    pieces: SmallVec<[TriviaPiece; 2]>,
}

impl Trivia {
    /// Empty trivia.
    #[inline]
    pub fn new() -> Self {
        Trivia {
            pieces: SmallVec::new(),
        }
    }

    /// A single run of `count` spaces.
    pub fn spaces(count: u32) -> Self {
        Self::from_iter([TriviaPiece::Spaces(count)])
    }

    /// Split trivia source text into pieces.
    ///
    /// Total and lossless: `Trivia::parse(text).to_string() == text` for
    /// every input. Text that is neither whitespace nor a comment becomes
    /// [`TriviaPiece::UnexpectedText`].
    pub fn parse(text: &str) -> Self {
        let mut trivia = Trivia::new();
        let mut rest = text;
        while let Some(first) = rest.chars().next() {
            let (piece, consumed) = match first {
                ' ' => (TriviaPiece::Spaces(1), 1),
                '\t' => (TriviaPiece::Tabs(1), 1),
                '\u{b}' => (TriviaPiece::VerticalTabs(1), 1),
                '\u{c}' => (TriviaPiece::Formfeeds(1), 1),
                '\n' => (TriviaPiece::Newlines(1), 1),
                '\r' if rest.starts_with("\r\n") => (TriviaPiece::CarriageReturnLineFeeds(1), 2),
                '\r' => (TriviaPiece::CarriageReturns(1), 1),
                '\\' => (TriviaPiece::Backslashes(1), 1),
                '#' => (TriviaPiece::Pounds(1), 1),
                '/' if rest.starts_with("//") => {
                    let len = rest.find(|c| c == '\n' || c == '\r').unwrap_or(rest.len());
                    let body = Name::intern(&rest[..len]);
                    if rest.starts_with("///") {
                        (TriviaPiece::DocLineComment(body), len)
                    } else {
                        (TriviaPiece::LineComment(body), len)
                    }
                }
                '/' if rest.starts_with("/*") => {
                    let len = block_comment_len(rest);
                    let body = Name::intern(&rest[..len]);
                    if rest.starts_with("/**") && !rest.starts_with("/**/") {
                        (TriviaPiece::DocBlockComment(body), len)
                    } else {
                        (TriviaPiece::BlockComment(body), len)
                    }
                }
                _ => {
                    let len = unexpected_len(rest);
                    (TriviaPiece::UnexpectedText(Name::intern(&rest[..len])), len)
                }
            };
            trivia.push(piece);
            rest = &rest[consumed..];
        }
        trivia
    }

    /// Append a piece, extending the last run when it repeats the same
    /// character.
    pub fn push(&mut self, piece: TriviaPiece) {
        if let Some(last) = self.pieces.last_mut() {
            if let Some(merged) = last.merged_with(piece) {
                *last = merged;
                return;
            }
        }
        self.pieces.push(piece);
    }

    /// Number of pieces.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Get a slice of all pieces.
    #[inline]
    pub fn pieces(&self) -> &[TriviaPiece] {
        &self.pieces
    }

    /// Iterate over pieces.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = TriviaPiece> + '_ {
        self.pieces.iter().copied()
    }

    /// Total length in bytes.
    pub fn text_len(&self) -> usize {
        self.iter().map(TriviaPiece::text_len).sum()
    }

    /// Whether any piece is a line break.
    pub fn contains_newline(&self) -> bool {
        self.iter().any(TriviaPiece::is_newline)
    }

    /// Whether any piece is a comment.
    pub fn contains_comment(&self) -> bool {
        self.iter().any(TriviaPiece::is_comment)
    }

    /// Write the source text of every piece in order.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.iter().try_for_each(|piece| piece.write_to(out))
    }
}

/// Length of the block comment at the start of `text`, honoring nesting.
///
/// An unterminated comment runs to the end of the text.
fn block_comment_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos..].starts_with(b"/*") {
            depth += 1;
            pos += 2;
        } else if bytes[pos..].starts_with(b"*/") {
            depth -= 1;
            pos += 2;
            if depth == 0 {
                return pos;
            }
        } else {
            pos += 1;
        }
    }
    bytes.len()
}

/// Length of the run of non-trivia text at the start of `text`.
///
/// Always covers at least the first character.
fn unexpected_len(text: &str) -> usize {
    let start = text.chars().next().map_or(0, char::len_utf8);
    text[start..]
        .char_indices()
        .map(|(pos, c)| (start + pos, c))
        .find(|&(pos, c)| starts_trivia(&text[pos..], c))
        .map_or(text.len(), |(pos, _)| pos)
}

fn starts_trivia(text: &str, first: char) -> bool {
    match first {
        ' ' | '\t' | '\u{b}' | '\u{c}' | '\n' | '\r' | '\\' | '#' => true,
        '/' => text.starts_with("//") || text.starts_with("/*"),
        _ => false,
    }
}

impl FromIterator<TriviaPiece> for Trivia {
    fn from_iter<I: IntoIterator<Item = TriviaPiece>>(iter: I) -> Self {
        let mut trivia = Trivia::new();
        for piece in iter {
            trivia.push(piece);
        }
        trivia
    }
}

impl<'a> IntoIterator for &'a Trivia {
    type Item = &'a TriviaPiece;
    type IntoIter = std::slice::Iter<'a, TriviaPiece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

impl fmt::Debug for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pieces.iter()).finish()
    }
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
