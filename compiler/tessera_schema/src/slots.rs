//! Slot name lookup.
//!
//! Two maps per kind, built once on first use: current names, then
//! deprecated names consulted only when the current-name lookup misses.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::SyntaxKind;

struct SlotTable {
    /// Indexed by `SyntaxKind as usize`.
    current: Vec<FxHashMap<&'static str, usize>>,
    deprecated: Vec<FxHashMap<&'static str, usize>>,
}

impl SlotTable {
    fn build() -> Self {
        let mut current = Vec::with_capacity(SyntaxKind::COUNT);
        let mut deprecated = Vec::with_capacity(SyntaxKind::COUNT);
        let mut aliases = 0usize;
        for kind in SyntaxKind::ALL {
            let children = kind.children();
            let mut by_name = FxHashMap::default();
            let mut by_alias = FxHashMap::default();
            for (index, child) in children.iter().enumerate() {
                by_name.insert(child.name, index);
                if let Some(alias) = child.deprecated_name {
                    by_alias.insert(alias, index);
                }
            }
            aliases += by_alias.len();
            current.push(by_name);
            deprecated.push(by_alias);
        }
        tracing::debug!(kinds = SyntaxKind::COUNT, aliases, "built slot table");
        SlotTable {
            current,
            deprecated,
        }
    }
}

static SLOT_TABLE: OnceLock<SlotTable> = OnceLock::new();

fn table() -> &'static SlotTable {
    SLOT_TABLE.get_or_init(SlotTable::build)
}

/// Resolve `name` to a slot index of `kind`.
pub(crate) fn slot_index(kind: SyntaxKind, name: &str) -> Option<usize> {
    let table = table();
    let index = kind as usize;
    table.current[index]
        .get(name)
        .or_else(|| table.deprecated[index].get(name))
        .copied()
}
