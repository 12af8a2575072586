//! Child slots: names, constraints and cardinality.

use std::fmt;

use tessera_token::{Keyword, RawTokenKind, TokenKind};

use crate::{BaseKind, SyntaxKind};

/// One token a slot accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenChoice {
    /// Any token with this tag.
    Token(RawTokenKind),
    /// Exactly this keyword.
    Keyword(Keyword),
}

impl TokenChoice {
    #[inline]
    pub fn matches(self, kind: TokenKind) -> bool {
        match self {
            TokenChoice::Token(raw) => kind.raw_kind() == raw,
            TokenChoice::Keyword(keyword) => kind.keyword() == Some(keyword),
        }
    }

    /// Diagnostic label: the glyph, keyword spelling or token category.
    pub const fn name_for_diagnostics(self) -> &'static str {
        match self {
            TokenChoice::Token(raw) => raw.name_for_diagnostics(),
            TokenChoice::Keyword(keyword) => keyword.text(),
        }
    }
}

/// The nodes a node-valued slot accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeChoice {
    /// Any kind of this base.
    Base(BaseKind),
    /// Exactly this kind.
    Kind(SyntaxKind),
}

impl NodeChoice {
    #[inline]
    pub fn matches(self, kind: SyntaxKind) -> bool {
        match self {
            NodeChoice::Base(base) => base.admits(kind),
            NodeChoice::Kind(expected) => kind == expected,
        }
    }
}

/// What a slot may hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChildKind {
    /// A node admitted by the choice.
    Node(NodeChoice),
    /// Any token.
    AnyToken,
    /// A token matching one of the choices.
    Token(&'static [TokenChoice]),
    /// A node of one specific collection kind.
    Collection {
        kind: SyntaxKind,
        /// Singular name of one element, used for typed accessors.
        element_name: &'static str,
        /// Element name before a rename, if any.
        deprecated_element_name: Option<&'static str>,
        /// A builder that leaves this slot unset fills it with an empty
        /// collection instead of reporting it missing.
        defaults_to_empty: bool,
    },
}

impl ChildKind {
    /// Any node of base `Type`.
    pub const TYPE: ChildKind = ChildKind::Node(NodeChoice::Base(BaseKind::Type));

    /// A node of exactly `kind`.
    pub const fn node(kind: SyntaxKind) -> Self {
        ChildKind::Node(NodeChoice::Kind(kind))
    }

    /// A collection slot holding `kind`, whose elements are called `element_name`.
    pub const fn collection(kind: SyntaxKind, element_name: &'static str) -> Self {
        ChildKind::Collection {
            kind,
            element_name,
            deprecated_element_name: None,
            defaults_to_empty: false,
        }
    }

    /// Whether the slot holds a token.
    pub const fn is_token(self) -> bool {
        matches!(self, ChildKind::AnyToken | ChildKind::Token(_))
    }

    /// Whether `kind` is accepted by a token slot.
    pub fn admits_token(self, kind: TokenKind) -> bool {
        match self {
            ChildKind::AnyToken => true,
            ChildKind::Token(choices) => choices.iter().any(|choice| choice.matches(kind)),
            ChildKind::Node(_) | ChildKind::Collection { .. } => false,
        }
    }

    /// Whether a node of `kind` is accepted by a node or collection slot.
    pub fn admits_node(self, kind: SyntaxKind) -> bool {
        match self {
            ChildKind::Node(choice) => choice.matches(kind),
            ChildKind::Collection { kind: expected, .. } => kind == expected,
            ChildKind::AnyToken | ChildKind::Token(_) => false,
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKind::Node(NodeChoice::Base(BaseKind::Syntax)) => f.write_str("any node"),
            ChildKind::Node(NodeChoice::Base(base)) => {
                write!(f, "a {} node", base.name_for_diagnostics())
            }
            ChildKind::Node(NodeChoice::Kind(kind)) => write!(f, "a {kind} node"),
            ChildKind::AnyToken => f.write_str("any token"),
            ChildKind::Token([only]) => write!(f, "`{}`", only.name_for_diagnostics()),
            ChildKind::Token(choices) => {
                f.write_str("one of ")?;
                for (i, choice) in choices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "`{}`", choice.name_for_diagnostics())?;
                }
                Ok(())
            }
            ChildKind::Collection { kind, .. } => write!(f, "a {kind} collection"),
        }
    }
}

/// How many values a slot holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one node or token.
    One,
    /// Zero or one node or token.
    Optional,
    /// One collection node holding zero or more elements.
    Sequence { defaults_to_empty: bool },
}

/// A named position in a layout node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Child {
    pub name: &'static str,
    /// The name this slot had before a rename. Lookups by either name
    /// resolve to the same slot.
    pub deprecated_name: Option<&'static str>,
    pub kind: ChildKind,
    pub is_optional: bool,
    pub name_for_diagnostics: Option<&'static str>,
    pub documentation: Option<&'static str>,
}

impl Child {
    /// A mandatory slot.
    pub const fn new(name: &'static str, kind: ChildKind) -> Self {
        Child {
            name,
            deprecated_name: None,
            kind,
            is_optional: false,
            name_for_diagnostics: None,
            documentation: None,
        }
    }

    /// A mandatory token slot accepting `choices`.
    pub const fn token(name: &'static str, choices: &'static [TokenChoice]) -> Self {
        Self::new(name, ChildKind::Token(choices))
    }

    #[must_use]
    pub const fn deprecated(mut self, name: &'static str) -> Self {
        self.deprecated_name = Some(name);
        self
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    #[must_use]
    pub const fn diagnostic_name(mut self, name: &'static str) -> Self {
        self.name_for_diagnostics = Some(name);
        self
    }

    #[must_use]
    pub const fn documented(mut self, documentation: &'static str) -> Self {
        self.documentation = Some(documentation);
        self
    }

    /// Mark a collection slot as defaulting to an empty collection.
    #[must_use]
    pub const fn defaults_to_empty(mut self) -> Self {
        if let ChildKind::Collection {
            kind,
            element_name,
            deprecated_element_name,
            ..
        } = self.kind
        {
            self.kind = ChildKind::Collection {
                kind,
                element_name,
                deprecated_element_name,
                defaults_to_empty: true,
            };
        }
        self
    }

    /// Rename the elements of a collection slot, keeping the old name.
    #[must_use]
    pub const fn deprecated_element(mut self, name: &'static str) -> Self {
        if let ChildKind::Collection {
            kind,
            element_name,
            defaults_to_empty,
            ..
        } = self.kind
        {
            self.kind = ChildKind::Collection {
                kind,
                element_name,
                deprecated_element_name: Some(name),
                defaults_to_empty,
            };
        }
        self
    }

    pub const fn cardinality(&self) -> Cardinality {
        match self.kind {
            ChildKind::Collection {
                defaults_to_empty, ..
            } => Cardinality::Sequence { defaults_to_empty },
            _ if self.is_optional => Cardinality::Optional,
            _ => Cardinality::One,
        }
    }

    /// Whether `name` is this slot's current or deprecated name.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.deprecated_name == Some(name)
    }
}
