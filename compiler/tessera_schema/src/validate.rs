//! Checking supplied children against the schema.
//!
//! Validation sees only the shape of each child: a token's kind or a
//! node's kind. Slots are checked in schema order and the first mismatch
//! is reported.

use std::fmt;

use tessera_token::TokenKind;

use crate::{Child, ChildKind, NodeData, SyntaxKind};

/// The shape of one supplied child.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Supplied {
    Absent,
    Token(TokenKind),
    Node(SyntaxKind),
}

/// Where in a node a violation occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationLocation {
    /// A layout slot.
    Slot { index: usize, name: &'static str },
    /// An element of a collection.
    Element { index: usize },
    /// The number of children, before any slot is checked.
    Arity,
    /// A slot name that is neither a current nor a deprecated name.
    UnknownSlot(String),
}

/// What the schema required.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// The constraint of a slot. `optional` slots also accept absence.
    Slot { kind: ChildKind, optional: bool },
    /// One of these element kinds.
    Element(&'static [SyntaxKind]),
    /// Exactly this many children.
    ChildCount(usize),
    /// The name of a slot of the node.
    SlotName,
}

/// What was actually supplied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Found {
    Supplied(Supplied),
    ChildCount(usize),
    /// A slot position past the end of the layout.
    SlotIndex(usize),
}

/// Children that do not fit a node's schema.
///
/// Reports the first offending slot in schema order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaViolation {
    pub node: SyntaxKind,
    pub location: ViolationLocation,
    pub expected: Expected,
    pub found: Found,
}

impl SchemaViolation {
    pub fn unknown_slot(node: SyntaxKind, name: &str, found: Supplied) -> Self {
        SchemaViolation {
            node,
            location: ViolationLocation::UnknownSlot(name.to_owned()),
            expected: Expected::SlotName,
            found: Found::Supplied(found),
        }
    }

    /// The slot name involved, if the violation concerns a named slot.
    pub fn slot_name(&self) -> Option<&str> {
        match &self.location {
            ViolationLocation::Slot { name, .. } => Some(*name),
            ViolationLocation::UnknownSlot(name) => Some(name.as_str()),
            ViolationLocation::Element { .. } | ViolationLocation::Arity => None,
        }
    }
}

impl fmt::Display for Supplied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Supplied::Absent => f.write_str("nothing"),
            Supplied::Token(kind) => match kind.canonical_text() {
                Some(_) => write!(f, "token `{}`", kind.name_for_diagnostics()),
                None => write!(f, "{} `{}`", kind.name_for_diagnostics(), kind.text()),
            },
            Supplied::Node(kind) => write!(f, "a {kind} node"),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)?;
        match &self.location {
            ViolationLocation::Slot { index, name } => write!(f, " slot {index} `{name}`")?,
            ViolationLocation::Element { index } => write!(f, " element {index}")?,
            ViolationLocation::Arity => {}
            ViolationLocation::UnknownSlot(name) => write!(f, " has no slot `{name}`")?,
        }
        match self.expected {
            Expected::Slot { kind, optional } => {
                write!(f, ": expected {kind}")?;
                if optional {
                    f.write_str(" or nothing")?;
                }
            }
            Expected::Element(choices) => {
                f.write_str(": expected ")?;
                for (i, choice) in choices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "a {choice} node")?;
                }
            }
            Expected::ChildCount(count) => write!(f, ": expected {count} children")?,
            Expected::SlotName => return Ok(()),
        }
        match self.found {
            Found::Supplied(supplied) => write!(f, ", found {supplied}"),
            Found::ChildCount(count) => write!(f, ", found {count}"),
            Found::SlotIndex(index) => write!(f, ", found slot index {index}"),
        }
    }
}

impl std::error::Error for SchemaViolation {}

/// Whether `supplied` fits `child`.
fn fits(child: &Child, supplied: Supplied) -> bool {
    match supplied {
        Supplied::Absent => child.is_optional,
        Supplied::Token(kind) => child.kind.admits_token(kind),
        Supplied::Node(kind) => child.kind.admits_node(kind),
    }
}

/// Check one layout slot.
///
/// An `index` past the last slot, which includes every index of a
/// collection kind, is an arity violation.
pub fn validate_slot(
    kind: SyntaxKind,
    index: usize,
    supplied: Supplied,
) -> Result<(), SchemaViolation> {
    let Some(child) = kind.children().get(index) else {
        let violation = SchemaViolation {
            node: kind,
            location: ViolationLocation::Arity,
            expected: Expected::ChildCount(kind.children().len()),
            found: Found::SlotIndex(index),
        };
        tracing::trace!(%violation, "slot index rejected");
        return Err(violation);
    };
    if fits(child, supplied) {
        return Ok(());
    }
    let violation = SchemaViolation {
        node: kind,
        location: ViolationLocation::Slot {
            index,
            name: child.name,
        },
        expected: Expected::Slot {
            kind: child.kind,
            optional: child.is_optional,
        },
        found: Found::Supplied(supplied),
    };
    tracing::trace!(%violation, "slot rejected");
    Err(violation)
}

/// Check one collection element.
pub fn validate_element(
    kind: SyntaxKind,
    index: usize,
    supplied: Supplied,
) -> Result<(), SchemaViolation> {
    let choices = kind.element_choices();
    if matches!(supplied, Supplied::Node(element) if choices.contains(&element)) {
        return Ok(());
    }
    let violation = SchemaViolation {
        node: kind,
        location: ViolationLocation::Element { index },
        expected: Expected::Element(choices),
        found: Found::Supplied(supplied),
    };
    tracing::trace!(%violation, "element rejected");
    Err(violation)
}

/// Check a full set of children for `kind`.
///
/// Layout kinds take one entry per slot, in schema order. Collection kinds
/// take one entry per element.
pub fn validate(kind: SyntaxKind, supplied: &[Supplied]) -> Result<(), SchemaViolation> {
    match kind.schema().data {
        NodeData::Layout { children } => {
            if supplied.len() != children.len() {
                return Err(SchemaViolation {
                    node: kind,
                    location: ViolationLocation::Arity,
                    expected: Expected::ChildCount(children.len()),
                    found: Found::ChildCount(supplied.len()),
                });
            }
            for (index, value) in supplied.iter().enumerate() {
                validate_slot(kind, index, *value)?;
            }
            Ok(())
        }
        NodeData::Collection { .. } => {
            for (index, value) in supplied.iter().enumerate() {
                validate_element(kind, index, *value)?;
            }
            Ok(())
        }
    }
}
