//! Slot-by-name node construction.

use tessera_schema::{ChildKind, SchemaViolation, SyntaxKind};

use crate::element::supplied;
use crate::{SyntaxElement, SyntaxNode};

/// Collects children by slot name, then validates once in [`build`].
///
/// Slots left unset are absent, except collection slots marked
/// `defaults_to_empty`, which get an empty collection. The first unknown
/// slot name is remembered and returned by `build`.
///
/// [`build`]: NodeBuilder::build
#[derive(Clone, Debug)]
pub struct NodeBuilder {
    kind: SyntaxKind,
    slots: Vec<Option<SyntaxElement>>,
    error: Option<SchemaViolation>,
}

impl NodeBuilder {
    pub fn new(kind: SyntaxKind) -> Self {
        NodeBuilder {
            kind,
            slots: vec![None; kind.children().len()],
            error: None,
        }
    }

    /// Fill slot `name`, current or deprecated.
    #[must_use]
    pub fn set(self, name: &str, value: impl Into<SyntaxElement>) -> Self {
        self.set_optional(name, Some(value.into()))
    }

    /// Fill or clear slot `name`.
    #[must_use]
    pub fn set_optional(mut self, name: &str, value: Option<SyntaxElement>) -> Self {
        match self.kind.slot_index(name) {
            Some(index) => self.slots[index] = value,
            None if self.error.is_none() => {
                let violation =
                    SchemaViolation::unknown_slot(self.kind, name, supplied(value.as_ref()));
                tracing::trace!(%violation, "slot name rejected");
                self.error = Some(violation);
            }
            None => {}
        }
        self
    }

    pub fn build(self) -> Result<SyntaxNode, SchemaViolation> {
        if let Some(violation) = self.error {
            return Err(violation);
        }
        let mut slots = self.slots;
        for (slot, child) in slots.iter_mut().zip(self.kind.children()) {
            if slot.is_some() {
                continue;
            }
            if let ChildKind::Collection {
                kind,
                defaults_to_empty: true,
                ..
            } = child.kind
            {
                *slot = Some(SyntaxNode::empty_collection(kind).into());
            }
        }
        SyntaxNode::new(self.kind, slots)
    }
}
