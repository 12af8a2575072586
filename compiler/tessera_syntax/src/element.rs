//! Children of a node: either a node or a token.

use std::fmt;

use tessera_schema::{Supplied, SyntaxKind};
use tessera_token::TokenKind;

use crate::{SyntaxNode, SyntaxToken};

/// An owned child.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

/// A borrowed child, as yielded by traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementRef<'a> {
    Node(&'a SyntaxNode),
    Token(&'a SyntaxToken),
}

impl SyntaxElement {
    pub fn as_element_ref(&self) -> ElementRef<'_> {
        match self {
            SyntaxElement::Node(node) => ElementRef::Node(node),
            SyntaxElement::Token(token) => ElementRef::Token(token),
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            SyntaxElement::Node(_) => None,
            SyntaxElement::Token(token) => Some(token),
        }
    }

    pub fn into_node(self) -> Option<SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    /// What the schema sees when this element fills a slot.
    pub fn supplied(&self) -> Supplied {
        self.as_element_ref().supplied()
    }

    pub fn text_len(&self) -> usize {
        self.as_element_ref().text_len()
    }

    /// Whether both elements share one allocation.
    pub fn ptr_eq(&self, other: &SyntaxElement) -> bool {
        match (self, other) {
            (SyntaxElement::Node(a), SyntaxElement::Node(b)) => a.ptr_eq(b),
            (SyntaxElement::Token(a), SyntaxElement::Token(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// The schema view of an optional slot value.
pub(crate) fn supplied(element: Option<&SyntaxElement>) -> Supplied {
    element.map_or(Supplied::Absent, SyntaxElement::supplied)
}

impl<'a> ElementRef<'a> {
    pub fn as_node(self) -> Option<&'a SyntaxNode> {
        match self {
            ElementRef::Node(node) => Some(node),
            ElementRef::Token(_) => None,
        }
    }

    pub fn as_token(self) -> Option<&'a SyntaxToken> {
        match self {
            ElementRef::Node(_) => None,
            ElementRef::Token(token) => Some(token),
        }
    }

    pub fn supplied(self) -> Supplied {
        match self {
            ElementRef::Node(node) => Supplied::Node(node.kind()),
            ElementRef::Token(token) => Supplied::Token(token.kind()),
        }
    }

    pub fn text_len(self) -> usize {
        match self {
            ElementRef::Node(node) => node.text_len(),
            ElementRef::Token(token) => token.text_len(),
        }
    }

    /// The node kind, or `None` for a token.
    pub fn node_kind(self) -> Option<SyntaxKind> {
        self.as_node().map(SyntaxNode::kind)
    }

    /// The token kind, or `None` for a node.
    pub fn token_kind(self) -> Option<TokenKind> {
        self.as_token().map(SyntaxToken::kind)
    }

    /// Clone the handle out of the tree.
    pub fn to_element(self) -> SyntaxElement {
        match self {
            ElementRef::Node(node) => SyntaxElement::Node(node.clone()),
            ElementRef::Token(token) => SyntaxElement::Token(token.clone()),
        }
    }

    pub fn write_source<W: fmt::Write>(self, out: &mut W) -> fmt::Result {
        match self {
            ElementRef::Node(node) => node.write_source(out),
            ElementRef::Token(token) => token.write_source(out),
        }
    }
}

impl From<SyntaxNode> for SyntaxElement {
    fn from(node: SyntaxNode) -> Self {
        SyntaxElement::Node(node)
    }
}

impl From<SyntaxToken> for SyntaxElement {
    fn from(token: SyntaxToken) -> Self {
        SyntaxElement::Token(token)
    }
}

impl fmt::Display for SyntaxElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_element_ref().write_source(f)
    }
}

impl fmt::Display for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_source(f)
    }
}
