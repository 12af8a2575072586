//! Lazy depth-first traversal.

use smallvec::SmallVec;

use crate::{ElementRef, SyntaxElement};

/// Pre-order iterator over a subtree: each node before its children,
/// children in slot order, absent slots skipped.
///
/// Holds only borrowed handles, so any number of walks over one tree may
/// run at once.
#[derive(Clone, Debug)]
pub struct Preorder<'a> {
    stack: SmallVec<[ElementRef<'a>; 16]>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: ElementRef<'a>) -> Self {
        let mut stack = SmallVec::new();
        stack.push(root);
        Preorder { stack }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<ElementRef<'a>> {
        let current = self.stack.pop()?;
        if let ElementRef::Node(node) = current {
            self.stack
                .extend(node.elements().rev().map(SyntaxElement::as_element_ref));
        }
        Some(current)
    }
}
