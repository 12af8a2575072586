//! Process-wide table of token and trivia text.
//!
//! Text is spread over [`Name::NUM_SHARDS`] shards picked by hash, each
//! behind its own lock, so lexers running on different threads rarely
//! touch the same lock. Interned text is leaked and lives until exit.

use std::fmt;
use std::hash::BuildHasher;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::Name;

/// Interning failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// A shard already holds [`Name::MAX_SLOT`] + 1 texts.
    ShardOverflow { shard: u32, len: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::ShardOverflow { shard, len } => write!(
                f,
                "text shard {shard} is full ({len} entries, limit {})",
                u64::from(Name::MAX_SLOT) + 1
            ),
        }
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Shard {
    slots: FxHashMap<&'static str, u32>,
    texts: Vec<&'static str>,
}

impl Shard {
    fn holding_empty() -> Self {
        let mut shard = Shard::default();
        shard.texts.push("");
        shard.slots.insert("", 0);
        shard
    }

    fn find(&self, text: &str) -> Option<u32> {
        self.slots.get(text).copied()
    }

    fn insert(&mut self, shard: u32, text: &str) -> Result<u32, InternError> {
        let slot = u32::try_from(self.texts.len())
            .ok()
            .filter(|&slot| slot <= Name::MAX_SLOT)
            .ok_or(InternError::ShardOverflow {
                shard,
                len: self.texts.len(),
            })?;
        let text: &'static str = Box::leak(Box::from(text));
        self.texts.push(text);
        self.slots.insert(text, slot);
        Ok(slot)
    }
}

/// Sharded text interner.
///
/// The same text always yields the same [`Name`], so names compare equal
/// exactly when their text does.
pub struct StringInterner {
    shards: [RwLock<Shard>; Name::NUM_SHARDS],
    len: AtomicUsize,
}

impl StringInterner {
    /// An interner holding only the empty string, as [`Name::EMPTY`].
    ///
    /// Crate-private: [`Name`] always resolves through [`global`], so every
    /// handle in circulation must come from that one table.
    pub(crate) fn new() -> Self {
        StringInterner {
            shards: std::array::from_fn(|shard| {
                RwLock::new(if shard == 0 {
                    Shard::holding_empty()
                } else {
                    Shard::default()
                })
            }),
            len: AtomicUsize::new(1),
        }
    }

    /// The empty string lives in shard 0; other text goes where the top
    /// four bits of its hash point.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a 64-bit hash shifted right by 60 fits in 4 bits"
    )]
    fn shard_of(text: &str) -> u32 {
        if text.is_empty() {
            0
        } else {
            (FxBuildHasher.hash_one(text) >> 60) as u32
        }
    }

    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        let shard = Self::shard_of(text);
        let lock = &self.shards[shard as usize];
        if let Some(slot) = lock.read().find(text) {
            return Ok(Name::from_parts(shard, slot));
        }

        let mut table = lock.write();
        // Another writer may have added it between the two locks.
        let slot = match table.find(text) {
            Some(slot) => slot,
            None => {
                let slot = table.insert(shard, text)?;
                self.len.fetch_add(1, Ordering::Relaxed);
                slot
            }
        };
        Ok(Name::from_parts(shard, slot))
    }

    /// # Panics
    ///
    /// Panics if the text's shard is full.
    pub fn intern(&self, text: &str) -> Name {
        match self.try_intern(text) {
            Ok(name) => name,
            Err(err) => panic!("{err}"),
        }
    }

    /// The text behind `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` came from another interner and has no slot here.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().texts[name.slot()]
    }

    /// Distinct texts held, the empty string included.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    /// Whether nothing but the empty string has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

static GLOBAL: OnceLock<StringInterner> = OnceLock::new();

/// The interner behind [`Name::intern`] and [`Name::as_str`].
pub fn global() -> &'static StringInterner {
    GLOBAL.get_or_init(|| {
        tracing::debug!("token text interner initialized");
        StringInterner::new()
    })
}

#[cfg(test)]
mod tests;
