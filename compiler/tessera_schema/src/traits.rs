//! Capabilities shared by unrelated syntax kinds.
//!
//! A trait names a set of slots. Every kind that declares the trait has
//! those slots with the same names, constraints and optionality, so generic
//! code can read them without knowing the exact kind.

use std::fmt;

use bitflags::bitflags;
use tessera_token::RawTokenKind;

use crate::{Child, ChildKind, SyntaxKind, TokenChoice};

/// A named bundle of slot expectations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Trait {
    /// Carries an `attributes` list.
    WithAttributes,
    /// Wrapped in `(` and `)`.
    Parenthesized,
    /// An element of a comma-separated list.
    WithTrailingComma,
}

impl Trait {
    pub const ALL: &'static [Trait] = &[
        Trait::WithAttributes,
        Trait::Parenthesized,
        Trait::WithTrailingComma,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Trait::WithAttributes => "WithAttributes",
            Trait::Parenthesized => "Parenthesized",
            Trait::WithTrailingComma => "WithTrailingComma",
        }
    }

    /// The slots every conforming kind must have.
    pub const fn expected_children(self) -> &'static [Child] {
        match self {
            Trait::WithAttributes => WITH_ATTRIBUTES,
            Trait::Parenthesized => PARENTHESIZED,
            Trait::WithTrailingComma => WITH_TRAILING_COMMA,
        }
    }

    /// Find the expected slot `name` in a conforming `kind`.
    ///
    /// Returns `None` if the trait has no such slot or `kind` does not
    /// declare the trait.
    pub fn slot_index(self, kind: SyntaxKind, name: &str) -> Option<usize> {
        if !kind.has_trait(self) {
            return None;
        }
        let expected = self.expected_children().iter().find(|c| c.name == name)?;
        kind.children().iter().position(|c| c.name == expected.name)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The traits a kind declares.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct TraitSet: u8 {
        const WITH_ATTRIBUTES = 1 << 0;
        const PARENTHESIZED = 1 << 1;
        const WITH_TRAILING_COMMA = 1 << 2;
    }
}

impl From<Trait> for TraitSet {
    fn from(t: Trait) -> Self {
        match t {
            Trait::WithAttributes => TraitSet::WITH_ATTRIBUTES,
            Trait::Parenthesized => TraitSet::PARENTHESIZED,
            Trait::WithTrailingComma => TraitSet::WITH_TRAILING_COMMA,
        }
    }
}

impl TraitSet {
    /// The traits in this set, in declaration order.
    pub fn traits(self) -> impl Iterator<Item = Trait> {
        Trait::ALL
            .iter()
            .copied()
            .filter(move |t| self.contains(TraitSet::from(*t)))
    }
}

const WITH_ATTRIBUTES: &[Child] = &[Child::new(
    "attributes",
    ChildKind::collection(SyntaxKind::AttributeList, "Attribute"),
)
.defaults_to_empty()];

const PARENTHESIZED: &[Child] = &[
    Child::token("leftParen", &[TokenChoice::Token(RawTokenKind::LeftParen)]),
    Child::token("rightParen", &[TokenChoice::Token(RawTokenKind::RightParen)]),
];

const WITH_TRAILING_COMMA: &[Child] = &[Child::token(
    "trailingComma",
    &[TokenChoice::Token(RawTokenKind::Comma)],
)
.optional()];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_set_round_trips() {
        let set = TraitSet::WITH_ATTRIBUTES | TraitSet::WITH_TRAILING_COMMA;
        assert_eq!(
            set.traits().collect::<Vec<_>>(),
            vec![Trait::WithAttributes, Trait::WithTrailingComma]
        );
        assert_eq!(TraitSet::empty().traits().count(), 0);
    }

    #[test]
    fn every_trait_expects_slots() {
        for t in Trait::ALL {
            assert!(!t.expected_children().is_empty(), "{t}");
        }
    }

    #[test]
    fn trait_slot_lookup() {
        assert_eq!(
            Trait::Parenthesized.slot_index(SyntaxKind::FunctionType, "rightParen"),
            Some(2)
        );
        assert_eq!(
            Trait::Parenthesized.slot_index(SyntaxKind::TupleType, "rightParen"),
            Some(2)
        );
        assert_eq!(
            Trait::WithTrailingComma.slot_index(SyntaxKind::TupleTypeElement, "trailingComma"),
            Some(6)
        );
        assert_eq!(
            Trait::Parenthesized.slot_index(SyntaxKind::ArrayType, "leftParen"),
            None
        );
        assert_eq!(
            Trait::WithAttributes.slot_index(SyntaxKind::AttributedType, "leftParen"),
            None
        );
    }
}
