//! Whole-schema consistency checks.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{all_nodes, BaseKind, ChildKind, NodeData, SyntaxKind, Trait};

/// One inconsistency in the schema table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefect {
    /// The entry at `index` describes a different kind.
    OutOfOrder { index: usize, kind: SyntaxKind },
    /// The base is `SyntaxCollection` but the entry is a layout, or the
    /// other way round.
    BaseMismatch { kind: SyntaxKind },
    /// Two slots of one kind answer to the same name, current or deprecated.
    DuplicateSlotName { kind: SyntaxKind, name: &'static str },
    /// A kind declares a trait but lacks one of its slots, or has it with a
    /// different constraint or optionality.
    TraitMismatch {
        kind: SyntaxKind,
        trait_: Trait,
        slot: &'static str,
    },
    /// A collection slot names a kind that is not a collection.
    NotACollection { kind: SyntaxKind, slot: &'static str },
    /// A token slot accepts no tokens.
    EmptyTokenChoices { kind: SyntaxKind, slot: &'static str },
    /// A collection accepts no element kinds.
    EmptyElementChoices { kind: SyntaxKind },
    /// A collection accepts another collection as an element.
    NestedCollection { kind: SyntaxKind, element: SyntaxKind },
}

impl fmt::Display for SchemaDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaDefect::OutOfOrder { index, kind } => {
                write!(f, "schema entry {index} describes {kind}")
            }
            SchemaDefect::BaseMismatch { kind } => {
                write!(f, "{kind}: base and layout disagree on whether it is a collection")
            }
            SchemaDefect::DuplicateSlotName { kind, name } => {
                write!(f, "{kind}: more than one slot answers to `{name}`")
            }
            SchemaDefect::TraitMismatch { kind, trait_, slot } => {
                write!(f, "{kind}: declares {trait_} but slot `{slot}` does not match")
            }
            SchemaDefect::NotACollection { kind, slot } => {
                write!(f, "{kind}: slot `{slot}` refers to a non-collection kind")
            }
            SchemaDefect::EmptyTokenChoices { kind, slot } => {
                write!(f, "{kind}: slot `{slot}` accepts no tokens")
            }
            SchemaDefect::EmptyElementChoices { kind } => {
                write!(f, "{kind}: collection accepts no elements")
            }
            SchemaDefect::NestedCollection { kind, element } => {
                write!(f, "{kind}: element kind {element} is itself a collection")
            }
        }
    }
}

impl std::error::Error for SchemaDefect {}

/// Check the whole schema table and return every defect found.
///
/// An empty result means slot lookup is injective for every kind, every
/// trait declaration is honored and every collection reference resolves.
pub fn verify_schema() -> Vec<SchemaDefect> {
    let mut defects = Vec::new();
    for (index, node) in all_nodes().iter().enumerate() {
        if node.kind as usize != index {
            defects.push(SchemaDefect::OutOfOrder {
                index,
                kind: node.kind,
            });
        }
        let is_collection = matches!(node.data, NodeData::Collection { .. });
        if is_collection != (node.base == BaseKind::SyntaxCollection) {
            defects.push(SchemaDefect::BaseMismatch { kind: node.kind });
        }
        match node.data {
            NodeData::Layout { .. } => check_layout(node.kind, &mut defects),
            NodeData::Collection { element_choices } => {
                if element_choices.is_empty() {
                    defects.push(SchemaDefect::EmptyElementChoices { kind: node.kind });
                }
                for element in element_choices {
                    if element.is_collection() {
                        defects.push(SchemaDefect::NestedCollection {
                            kind: node.kind,
                            element: *element,
                        });
                    }
                }
            }
        }
    }
    tracing::debug!(
        kinds = SyntaxKind::COUNT,
        defects = defects.len(),
        "verified schema"
    );
    defects
}

fn check_layout(kind: SyntaxKind, defects: &mut Vec<SchemaDefect>) {
    let children = kind.children();

    let mut seen = FxHashSet::default();
    for child in children {
        for name in std::iter::once(child.name).chain(child.deprecated_name) {
            if !seen.insert(name) {
                defects.push(SchemaDefect::DuplicateSlotName { kind, name });
            }
        }
        match child.kind {
            ChildKind::Collection { kind: target, .. } if !target.is_collection() => {
                defects.push(SchemaDefect::NotACollection {
                    kind,
                    slot: child.name,
                });
            }
            ChildKind::Token([]) => defects.push(SchemaDefect::EmptyTokenChoices {
                kind,
                slot: child.name,
            }),
            _ => {}
        }
    }

    for t in kind.traits().traits() {
        for expected in t.expected_children() {
            let conforms = children.iter().any(|child| {
                child.name == expected.name
                    && child.kind == expected.kind
                    && child.is_optional == expected.is_optional
            });
            if !conforms {
                defects.push(SchemaDefect::TraitMismatch {
                    kind,
                    trait_: t,
                    slot: expected.name,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_schema_has_no_defects() {
        let defects = verify_schema();
        assert!(
            defects.is_empty(),
            "{}",
            defects
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn defect_messages() {
        let defect = SchemaDefect::TraitMismatch {
            kind: SyntaxKind::TupleType,
            trait_: Trait::Parenthesized,
            slot: "leftParen",
        };
        assert_eq!(
            defect.to_string(),
            "TupleType: declares Parenthesized but slot `leftParen` does not match"
        );
        assert_eq!(
            SchemaDefect::EmptyElementChoices {
                kind: SyntaxKind::AttributeList
            }
            .to_string(),
            "AttributeList: collection accepts no elements"
        );
    }
}
