//! Tessera syntax trees.
//!
//! Immutable nodes and tokens, shared by reference count. Every node is
//! validated against the schema when it is built, and an edit produces a
//! new node that shares all untouched children with the old one.
//!
//! # Building
//!
//! - [`SyntaxNode::new`]: one entry per slot, in schema order
//! - [`SyntaxNode::collection`]: one entry per element
//! - [`NodeBuilder`]: slots by current or deprecated name
//!
//! # Reading
//!
//! [`SyntaxNode::child`] resolves a slot name to its index through the
//! schema. The typed wrappers in [`views`] do the same with one method per
//! slot.
//!
//! Concatenating every token with its trivia in [`SyntaxNode::preorder`]
//! order reproduces the source text.

mod builder;
mod element;
mod node;
mod preorder;
mod token;
pub mod views;

#[cfg(test)]
mod test_support;

use std::sync::Once;

pub use builder::NodeBuilder;
pub use element::{ElementRef, SyntaxElement};
pub use node::SyntaxNode;
pub use preorder::Preorder;
pub use token::SyntaxToken;

pub use tessera_schema::{SchemaViolation, SyntaxKind, Trait};
pub use tessera_token::{RawTokenKind, Token, TokenKind, Trivia};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, for
/// example `RUST_LOG=tessera_schema=debug` or `RUST_LOG=tessera_syntax=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
