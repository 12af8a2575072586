//! Schema entries: one per syntax kind.

use crate::{BaseKind, Child, SyntaxKind, TraitSet};

/// The shape of one syntax kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    pub kind: SyntaxKind,
    pub base: BaseKind,
    /// Label used in diagnostics. Kinds without one are described by
    /// their parent's slot instead.
    pub name_for_diagnostics: Option<&'static str>,
    pub documentation: Option<&'static str>,
    pub traits: TraitSet,
    pub data: NodeData,
}

/// Fixed slots, or a homogeneous list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeData {
    Layout { children: &'static [Child] },
    Collection { element_choices: &'static [SyntaxKind] },
}

impl Node {
    pub(crate) const fn layout(
        kind: SyntaxKind,
        base: BaseKind,
        name_for_diagnostics: Option<&'static str>,
        children: &'static [Child],
    ) -> Self {
        Node {
            kind,
            base,
            name_for_diagnostics,
            documentation: None,
            traits: TraitSet::empty(),
            data: NodeData::Layout { children },
        }
    }

    pub(crate) const fn collection(kind: SyntaxKind, element_choices: &'static [SyntaxKind]) -> Self {
        Node {
            kind,
            base: BaseKind::SyntaxCollection,
            name_for_diagnostics: None,
            documentation: None,
            traits: TraitSet::empty(),
            data: NodeData::Collection { element_choices },
        }
    }

    #[must_use]
    pub(crate) const fn with_traits(mut self, traits: TraitSet) -> Self {
        self.traits = traits;
        self
    }

    #[must_use]
    pub(crate) const fn documented(mut self, documentation: &'static str) -> Self {
        self.documentation = Some(documentation);
        self
    }

    /// Slots in source order. Empty for collections.
    pub const fn children(&self) -> &'static [Child] {
        match self.data {
            NodeData::Layout { children } => children,
            NodeData::Collection { .. } => &[],
        }
    }

    /// Accepted element kinds. Empty for layout nodes.
    pub const fn element_choices(&self) -> &'static [SyntaxKind] {
        match self.data {
            NodeData::Layout { .. } => &[],
            NodeData::Collection { element_choices } => element_choices,
        }
    }
}
