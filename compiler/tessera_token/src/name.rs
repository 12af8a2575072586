//! Interned token text.
//!
//! Provides compact 32-bit handles for the free-form text carried by
//! identifiers, literals, operators and comment trivia.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::interner;

/// Handle to interned text.
///
/// The top four bits pick a shard of the interner and the low 28 bits a
/// slot inside it. Text and handle are one-to-one, so comparing two
/// payload-bearing token kinds never reads string data.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, interned up front.
    pub const EMPTY: Name = Name(0);

    pub const NUM_SHARDS: usize = 16;

    /// Largest slot index a shard can hand out.
    pub const MAX_SLOT: u32 = (1 << 28) - 1;

    #[inline]
    pub(crate) const fn from_parts(shard: u32, slot: u32) -> Self {
        debug_assert!((shard as usize) < Self::NUM_SHARDS);
        debug_assert!(slot <= Self::MAX_SLOT);
        Name((shard << 28) | slot)
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    pub const fn slot(self) -> usize {
        (self.0 & Self::MAX_SLOT) as usize
    }

    /// Intern `text` in the process-wide interner.
    #[inline]
    pub fn intern(text: &str) -> Name {
        interner::global().intern(text)
    }

    /// The text this name was interned from.
    ///
    /// Only meaningful for names produced by the process-wide interner
    /// (i.e. via [`Name::intern`]).
    #[inline]
    pub fn as_str(self) -> &'static str {
        interner::global().lookup(self)
    }
}

impl Hash for Name {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

// Handles are process-local; serialize the text instead.
#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
