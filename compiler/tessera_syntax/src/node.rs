//! Immutable, reference-counted syntax nodes.
//!
//! A node owns one entry per schema slot (layouts) or one entry per element
//! (collections). Children are shared handles, so an edit clones the
//! parent's child vector and nothing below it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tessera_schema::{
    validate, validate_element, validate_slot, Expected, Found, Node, SchemaViolation, Supplied,
    SyntaxKind, Trait, ViolationLocation,
};

use crate::element::supplied;
use crate::{ElementRef, Preorder, SyntaxElement, SyntaxToken};

#[derive(Debug)]
struct NodeData {
    kind: SyntaxKind,
    children: Box<[Option<SyntaxElement>]>,
    /// Source length of the whole subtree, trivia included.
    text_len: usize,
}

/// Moves the node children out of `data`, leaving it childless.
fn take_child_nodes(data: &mut NodeData) -> Vec<SyntaxNode> {
    std::mem::take(&mut data.children)
        .into_vec()
        .into_iter()
        .flatten()
        .filter_map(SyntaxElement::into_node)
        .collect()
}

// Teardown runs off a work list, so nesting depth never reaches the
// call stack.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = take_child_nodes(self);
        while let Some(node) = pending.pop() {
            // Still shared elsewhere: the other owner tears it down later.
            if let Some(mut data) = Arc::into_inner(node.0) {
                pending.extend(take_child_nodes(&mut data));
            }
        }
    }
}

/// A syntax node that satisfies its kind's schema.
///
/// Cloning shares the node. Equality is structural, with a pointer check
/// first.
#[derive(Clone, Debug)]
pub struct SyntaxNode(Arc<NodeData>);

impl SyntaxNode {
    /// Build a node from one entry per slot (layouts) or per element
    /// (collections).
    pub fn new(
        kind: SyntaxKind,
        children: Vec<Option<SyntaxElement>>,
    ) -> Result<Self, SchemaViolation> {
        let shape: Vec<Supplied> = children.iter().map(|c| supplied(c.as_ref())).collect();
        validate(kind, &shape).inspect_err(|violation| {
            tracing::trace!(%violation, "node rejected");
        })?;
        Ok(Self::from_validated(kind, children))
    }

    /// Build a collection node from its elements.
    pub fn collection(
        kind: SyntaxKind,
        elements: Vec<SyntaxElement>,
    ) -> Result<Self, SchemaViolation> {
        Self::new(kind, elements.into_iter().map(Some).collect())
    }

    /// An empty collection of `kind`. Only called for collection kinds.
    pub(crate) fn empty_collection(kind: SyntaxKind) -> Self {
        Self::from_validated(kind, Vec::new())
    }

    fn from_validated(kind: SyntaxKind, children: Vec<Option<SyntaxElement>>) -> Self {
        let text_len = children
            .iter()
            .flatten()
            .map(SyntaxElement::text_len)
            .sum();
        SyntaxNode(Arc::new(NodeData {
            kind,
            children: children.into_boxed_slice(),
            text_len,
        }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    pub fn schema(&self) -> &'static Node {
        self.0.kind.schema()
    }

    pub fn is_collection(&self) -> bool {
        self.0.kind.is_collection()
    }

    /// Source length of the subtree, trivia included.
    #[inline]
    pub fn text_len(&self) -> usize {
        self.0.text_len
    }

    /// All entries in schema order. Absent optional slots are `None`.
    pub fn children(&self) -> &[Option<SyntaxElement>] {
        &self.0.children
    }

    /// The present children, in order.
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &SyntaxElement> + '_ {
        self.0.children.iter().flatten()
    }

    /// Number of slots (layouts) or elements (collections).
    pub fn len(&self) -> usize {
        self.0.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.children.is_empty()
    }

    pub fn child_at(&self, index: usize) -> Option<&SyntaxElement> {
        self.0.children.get(index)?.as_ref()
    }

    fn resolve(&self, name: &str, value: Supplied) -> Result<usize, SchemaViolation> {
        self.kind().slot_index(name).ok_or_else(|| {
            let violation = SchemaViolation::unknown_slot(self.kind(), name, value);
            tracing::trace!(%violation, "slot name rejected");
            violation
        })
    }

    /// The child in slot `name`, current or deprecated.
    pub fn try_child(&self, name: &str) -> Result<Option<&SyntaxElement>, SchemaViolation> {
        let index = self.resolve(name, Supplied::Absent)?;
        Ok(self.child_at(index))
    }

    /// The child in slot `name`, current or deprecated.
    ///
    /// # Panics
    ///
    /// Panics if the kind has no slot `name`.
    pub fn child(&self, name: &str) -> Option<&SyntaxElement> {
        match self.try_child(name) {
            Ok(child) => child,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// The node in slot `name`, if the slot holds one.
    pub fn child_node(&self, name: &str) -> Option<&SyntaxNode> {
        self.child(name).and_then(SyntaxElement::as_node)
    }

    /// The token in slot `name`, if the slot holds one.
    pub fn child_token(&self, name: &str) -> Option<&SyntaxToken> {
        self.child(name).and_then(SyntaxElement::as_token)
    }

    pub fn has_trait(&self, t: Trait) -> bool {
        self.0.kind.has_trait(t)
    }

    /// The child in slot `name` of trait `t`, or `None` if this kind does
    /// not declare `t`, `t` has no such slot, or the slot is empty.
    pub fn trait_child(&self, t: Trait, name: &str) -> Option<&SyntaxElement> {
        t.slot_index(self.kind(), name)
            .and_then(|index| self.child_at(index))
    }

    /// Replace the child in slot `name`, sharing every other child.
    pub fn with_child(
        &self,
        name: &str,
        value: Option<SyntaxElement>,
    ) -> Result<Self, SchemaViolation> {
        let index = self.resolve(name, supplied(value.as_ref()))?;
        self.with_child_at(index, value)
    }

    /// Replace the child at `index`, sharing every other child.
    ///
    /// An index past the last slot is an arity violation.
    pub fn with_child_at(
        &self,
        index: usize,
        value: Option<SyntaxElement>,
    ) -> Result<Self, SchemaViolation> {
        validate_slot(self.kind(), index, supplied(value.as_ref())).inspect_err(|violation| {
            tracing::trace!(%violation, "replacement rejected");
        })?;
        let mut children = self.0.children.to_vec();
        children[index] = value;
        Ok(Self::from_validated(self.kind(), children))
    }

    /// A copy of this collection with `element` added at the end.
    pub fn with_element_appended(&self, element: SyntaxElement) -> Result<Self, SchemaViolation> {
        validate_element(self.kind(), self.len(), element.supplied())?;
        let mut children = self.0.children.to_vec();
        children.push(Some(element));
        Ok(Self::from_validated(self.kind(), children))
    }

    /// A copy of this collection without element `index`.
    ///
    /// Layout nodes have a fixed arity and reject removal.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn with_element_removed(&self, index: usize) -> Result<Self, SchemaViolation> {
        assert!(
            index < self.len(),
            "element {index} out of bounds for {} of length {}",
            self.kind(),
            self.len()
        );
        if !self.is_collection() {
            return Err(SchemaViolation {
                node: self.kind(),
                location: ViolationLocation::Arity,
                expected: Expected::ChildCount(self.len()),
                found: Found::ChildCount(self.len() - 1),
            });
        }
        let mut children = self.0.children.to_vec();
        children.remove(index);
        Ok(Self::from_validated(self.kind(), children))
    }

    /// A collection of the same kind holding `elements`.
    pub fn with_elements(&self, elements: Vec<SyntaxElement>) -> Result<Self, SchemaViolation> {
        Self::collection(self.kind(), elements)
    }

    /// Whether both handles share one allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &SyntaxNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Depth-first, pre-order walk over this node and everything below it.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(ElementRef::Node(self))
    }

    /// Every token below this node, in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &SyntaxToken> + '_ {
        self.preorder().filter_map(ElementRef::as_token)
    }

    /// Write the exact source text of the subtree.
    pub fn write_source<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for token in self.tokens() {
            token.write_source(out)?;
        }
        Ok(())
    }

    /// The exact source text of the subtree.
    pub fn source_text(&self) -> String {
        self.to_string()
    }
}

// Equality and hashing walk the trees with explicit stacks; deep trees
// must not recurse.
impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            if a.kind() != b.kind() || a.text_len() != b.text_len() || a.len() != b.len() {
                return false;
            }
            for pair in a.children().iter().zip(b.children()) {
                match pair {
                    (None, None) => {}
                    (Some(SyntaxElement::Node(x)), Some(SyntaxElement::Node(y))) => {
                        pending.push((x, y));
                    }
                    (Some(SyntaxElement::Token(x)), Some(SyntaxElement::Token(y))) if x == y => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for SyntaxNode {}

impl Hash for SyntaxNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self.preorder() {
            match element {
                ElementRef::Node(node) => {
                    node.kind().hash(state);
                    for child in node.children() {
                        child.is_some().hash(state);
                    }
                }
                ElementRef::Token(token) => token.hash(state),
            }
        }
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_source(f)
    }
}
