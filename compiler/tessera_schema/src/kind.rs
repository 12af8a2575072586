//! Syntax kind tags and their base categories.

use std::fmt;

use crate::catalog::NODES;
use crate::{slots, Child, Node, NodeData, Trait, TraitSet};

/// Category a syntax kind belongs to.
///
/// A slot constrained to a base accepts any kind of that base.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BaseKind {
    /// Any node at all.
    Syntax,
    /// Homogeneous lists.
    SyntaxCollection,
    /// Type expressions.
    Type,
}

impl BaseKind {
    /// Whether a node of `kind` may appear where this base is expected.
    #[inline]
    pub fn admits(self, kind: SyntaxKind) -> bool {
        match self {
            BaseKind::Syntax => true,
            base => kind.base() == base,
        }
    }

    /// Diagnostic label.
    pub const fn name_for_diagnostics(self) -> &'static str {
        match self {
            BaseKind::Syntax => "syntax",
            BaseKind::SyntaxCollection => "collection",
            BaseKind::Type => "type",
        }
    }
}

/// One syntax construct.
///
/// Numbered densely in declaration order, which is also the order of the
/// schema table: `SyntaxKind::ALL[i] as usize == i`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum SyntaxKind {
    // === Types ===
    ArrayType,
    AttributedType,
    ClassRestrictionType,
    CompositionTypeElementList,
    CompositionTypeElement,
    CompositionType,
    SomeOrAnyType,
    DictionaryType,
    FunctionType,
    GenericArgumentClause,
    GenericArgumentList,
    GenericArgument,
    ImplicitlyUnwrappedOptionalType,
    MemberType,
    MetatypeType,
    NamedOpaqueReturnType,
    OptionalType,
    SuppressedType,
    PackExpansionType,
    PackElementType,
    IdentifierType,
    TupleTypeElementList,
    TupleTypeElement,
    TupleType,

    // === Supporting constructs ===
    Attribute,
    AttributeList,
    TypeEffectSpecifiers,
    ReturnClause,
    GenericParameterClause,
    GenericParameterList,
    GenericParameter,
    MissingType,
}

const _: () = assert!(size_of::<SyntaxKind>() == 2);

impl SyntaxKind {
    /// Every kind, indexed by its discriminant.
    pub const ALL: &'static [SyntaxKind] = &[
        Self::ArrayType,
        Self::AttributedType,
        Self::ClassRestrictionType,
        Self::CompositionTypeElementList,
        Self::CompositionTypeElement,
        Self::CompositionType,
        Self::SomeOrAnyType,
        Self::DictionaryType,
        Self::FunctionType,
        Self::GenericArgumentClause,
        Self::GenericArgumentList,
        Self::GenericArgument,
        Self::ImplicitlyUnwrappedOptionalType,
        Self::MemberType,
        Self::MetatypeType,
        Self::NamedOpaqueReturnType,
        Self::OptionalType,
        Self::SuppressedType,
        Self::PackExpansionType,
        Self::PackElementType,
        Self::IdentifierType,
        Self::TupleTypeElementList,
        Self::TupleTypeElement,
        Self::TupleType,
        Self::Attribute,
        Self::AttributeList,
        Self::TypeEffectSpecifiers,
        Self::ReturnClause,
        Self::GenericParameterClause,
        Self::GenericParameterList,
        Self::GenericParameter,
        Self::MissingType,
    ];

    /// Number of kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Checked conversion from a discriminant.
    #[inline]
    pub const fn from_u16(value: u16) -> Option<Self> {
        if (value as usize) < Self::COUNT {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// The schema entry for this kind.
    #[inline]
    pub fn schema(self) -> &'static Node {
        &NODES[self as usize]
    }

    #[inline]
    pub fn base(self) -> BaseKind {
        self.schema().base
    }

    #[inline]
    pub fn is_collection(self) -> bool {
        matches!(self.schema().data, NodeData::Collection { .. })
    }

    /// The slots of a layout kind in source order. Empty for collections.
    #[inline]
    pub fn children(self) -> &'static [Child] {
        self.schema().children()
    }

    /// The element kinds a collection accepts. Empty for layout kinds.
    #[inline]
    pub fn element_choices(self) -> &'static [SyntaxKind] {
        self.schema().element_choices()
    }

    #[inline]
    pub fn traits(self) -> TraitSet {
        self.schema().traits
    }

    #[inline]
    pub fn has_trait(self, t: Trait) -> bool {
        self.traits().contains(TraitSet::from(t))
    }

    /// Diagnostic label, if the kind has one of its own.
    #[inline]
    pub fn name_for_diagnostics(self) -> Option<&'static str> {
        self.schema().name_for_diagnostics
    }

    /// Index of the slot named `name`, accepting the current name or the
    /// deprecated one.
    #[inline]
    pub fn slot_index(self, name: &str) -> Option<usize> {
        slots::slot_index(self, name)
    }

    /// The slot named `name` (current or deprecated).
    pub fn slot(self, name: &str) -> Option<&'static Child> {
        self.slot_index(name).map(|index| &self.children()[index])
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Every node in the schema, in kind order.
///
/// Read-only view for code generators and runtime interpreters.
pub fn all_nodes() -> &'static [Node] {
    &NODES
}
