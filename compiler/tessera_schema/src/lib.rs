//! Tessera node kind schema.
//!
//! A declarative table describing every syntax construct: its base
//! category, its slots in source order, the traits it declares, and for
//! collections the element kinds they accept. The tree crate enforces this
//! table when building nodes, and code generators read it as data.
//!
//! # Lookup
//!
//! - [`SyntaxKind::schema`]: O(1) index into the static table
//! - [`SyntaxKind::slot_index`]: current slot name first, then the
//!   deprecated name
//!
//! # Validation
//!
//! [`validate`] checks the shape of supplied children and reports the first
//! mismatch as a [`SchemaViolation`]. [`verify_schema`] checks the table
//! itself.

mod catalog;
mod child;
mod kind;
mod node;
mod slots;
mod traits;
mod validate;
mod verify;

pub use child::{Cardinality, Child, ChildKind, NodeChoice, TokenChoice};
pub use kind::{all_nodes, BaseKind, SyntaxKind};
pub use node::{Node, NodeData};
pub use traits::{Trait, TraitSet};
pub use validate::{
    validate, validate_element, validate_slot, Expected, Found, SchemaViolation, Supplied,
    ViolationLocation,
};
pub use verify::{verify_schema, SchemaDefect};
