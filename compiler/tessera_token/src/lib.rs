//! Tessera token model.
//!
//! This crate describes every lexical token a syntax tree can hold:
//! - [`RawTokenKind`]: one-byte tag, the hot-path discriminant
//! - [`Keyword`]: reserved words, lexer-classified or contextual
//! - [`TokenKind`]: tag plus interned text, with `lift`/`lower` conversions
//! - [`Trivia`] and [`Token`]: whitespace and comments around a token
//!
//! # Design Philosophy
//!
//! - **Tag first**: parser decisions compare a single byte
//! - **Intern text**: identifiers and literals are `Name(u32)`, so equality
//!   never touches string data
//! - **Lossless**: every token prints back to its exact source bytes
//!
//! No dependency on the schema or tree crates. Lexers and highlighters can
//! use this crate alone.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod keyword;
mod kind;
mod name;
mod raw_kind;
mod token;
mod trivia;

pub use interner::{global as global_interner, InternError, StringInterner};
pub use keyword::Keyword;
pub use kind::{LiftError, TokenKind};
pub use name::Name;
pub use raw_kind::RawTokenKind;
pub use token::{SourcePresence, Token};
pub use trivia::{Trivia, TriviaPiece};

static_assert_size!(TokenKind, 8);
static_assert_size!(Name, 4);
