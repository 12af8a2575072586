//! Reserved words and their process-wide lookup table.
//!
//! Two tiers of keyword:
//! 1. **Lexer-classified**: always reserved, never a plain identifier
//!    (`class`, `func`, `import`, ...).
//! 2. **Contextual**: reserved only in specific grammatical positions and
//!    an ordinary identifier everywhere else (`some`, `async`, `didSet`, ...).
//!
//! # Lookup
//!
//! [`Keyword::from_text`] resolves a spelling through a `FxHashMap` built
//! once on first use and read-only afterwards. A length pre-filter rejects
//! most identifiers before hashing.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// A reserved word.
///
/// Numbered densely in declaration order: `ALL[i] as usize == i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Keyword {
    // === Lexer-classified (always reserved) ===
    AnyUpper,
    As,
    Associatedtype,
    Break,
    Case,
    Catch,
    Class,
    Continue,
    Default,
    Defer,
    Deinit,
    Do,
    Else,
    Enum,
    Extension,
    Fallthrough,
    False,
    Fileprivate,
    For,
    Func,
    Guard,
    If,
    Import,
    In,
    Init,
    Inout,
    Internal,
    Is,
    Let,
    Nil,
    Operator,
    Precedencegroup,
    Private,
    ProtocolLower,
    Public,
    Repeat,
    Rethrows,
    Return,
    SelfLower,
    SelfUpper,
    Static,
    Struct,
    Subscript,
    Super,
    Switch,
    Throw,
    Throws,
    True,
    Try,
    Typealias,
    Var,
    Where,
    While,

    // === Contextual (reserved only in specific positions) ===
    DunderOwned,
    DunderShared,
    UnderscoreConst,
    UnderscoreResultDependsOn,
    AnyLower,
    Async,
    Await,
    Borrowing,
    Consuming,
    Convenience,
    DidSet,
    Dynamic,
    Each,
    Final,
    Get,
    Indirect,
    Isolated,
    Lazy,
    Mutating,
    Nonisolated,
    Open,
    Optional,
    Override,
    Package,
    ProtocolUpper,
    Required,
    Set,
    Some,
    Transferring,
    Type,
    Unowned,
    Weak,
    WillSet,
}

impl Keyword {
    /// Every keyword, indexed by its discriminant.
    pub const ALL: &'static [Keyword] = &[
        Self::AnyUpper,
        Self::As,
        Self::Associatedtype,
        Self::Break,
        Self::Case,
        Self::Catch,
        Self::Class,
        Self::Continue,
        Self::Default,
        Self::Defer,
        Self::Deinit,
        Self::Do,
        Self::Else,
        Self::Enum,
        Self::Extension,
        Self::Fallthrough,
        Self::False,
        Self::Fileprivate,
        Self::For,
        Self::Func,
        Self::Guard,
        Self::If,
        Self::Import,
        Self::In,
        Self::Init,
        Self::Inout,
        Self::Internal,
        Self::Is,
        Self::Let,
        Self::Nil,
        Self::Operator,
        Self::Precedencegroup,
        Self::Private,
        Self::ProtocolLower,
        Self::Public,
        Self::Repeat,
        Self::Rethrows,
        Self::Return,
        Self::SelfLower,
        Self::SelfUpper,
        Self::Static,
        Self::Struct,
        Self::Subscript,
        Self::Super,
        Self::Switch,
        Self::Throw,
        Self::Throws,
        Self::True,
        Self::Try,
        Self::Typealias,
        Self::Var,
        Self::Where,
        Self::While,
        Self::DunderOwned,
        Self::DunderShared,
        Self::UnderscoreConst,
        Self::UnderscoreResultDependsOn,
        Self::AnyLower,
        Self::Async,
        Self::Await,
        Self::Borrowing,
        Self::Consuming,
        Self::Convenience,
        Self::DidSet,
        Self::Dynamic,
        Self::Each,
        Self::Final,
        Self::Get,
        Self::Indirect,
        Self::Isolated,
        Self::Lazy,
        Self::Mutating,
        Self::Nonisolated,
        Self::Open,
        Self::Optional,
        Self::Override,
        Self::Package,
        Self::ProtocolUpper,
        Self::Required,
        Self::Set,
        Self::Some,
        Self::Transferring,
        Self::Type,
        Self::Unowned,
        Self::Weak,
        Self::WillSet,
    ];

    /// Number of keywords.
    pub const COUNT: usize = Self::ALL.len();

    /// Canonical spelling.
    pub const fn text(self) -> &'static str {
        match self {
            Self::AnyUpper => "Any",
            Self::As => "as",
            Self::Associatedtype => "associatedtype",
            Self::Break => "break",
            Self::Case => "case",
            Self::Catch => "catch",
            Self::Class => "class",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Defer => "defer",
            Self::Deinit => "deinit",
            Self::Do => "do",
            Self::Else => "else",
            Self::Enum => "enum",
            Self::Extension => "extension",
            Self::Fallthrough => "fallthrough",
            Self::False => "false",
            Self::Fileprivate => "fileprivate",
            Self::For => "for",
            Self::Func => "func",
            Self::Guard => "guard",
            Self::If => "if",
            Self::Import => "import",
            Self::In => "in",
            Self::Init => "init",
            Self::Inout => "inout",
            Self::Internal => "internal",
            Self::Is => "is",
            Self::Let => "let",
            Self::Nil => "nil",
            Self::Operator => "operator",
            Self::Precedencegroup => "precedencegroup",
            Self::Private => "private",
            Self::ProtocolLower => "protocol",
            Self::Public => "public",
            Self::Repeat => "repeat",
            Self::Rethrows => "rethrows",
            Self::Return => "return",
            Self::SelfLower => "self",
            Self::SelfUpper => "Self",
            Self::Static => "static",
            Self::Struct => "struct",
            Self::Subscript => "subscript",
            Self::Super => "super",
            Self::Switch => "switch",
            Self::Throw => "throw",
            Self::Throws => "throws",
            Self::True => "true",
            Self::Try => "try",
            Self::Typealias => "typealias",
            Self::Var => "var",
            Self::Where => "where",
            Self::While => "while",
            Self::DunderOwned => "__owned",
            Self::DunderShared => "__shared",
            Self::UnderscoreConst => "_const",
            Self::UnderscoreResultDependsOn => "_resultDependsOn",
            Self::AnyLower => "any",
            Self::Async => "async",
            Self::Await => "await",
            Self::Borrowing => "borrowing",
            Self::Consuming => "consuming",
            Self::Convenience => "convenience",
            Self::DidSet => "didSet",
            Self::Dynamic => "dynamic",
            Self::Each => "each",
            Self::Final => "final",
            Self::Get => "get",
            Self::Indirect => "indirect",
            Self::Isolated => "isolated",
            Self::Lazy => "lazy",
            Self::Mutating => "mutating",
            Self::Nonisolated => "nonisolated",
            Self::Open => "open",
            Self::Optional => "optional",
            Self::Override => "override",
            Self::Package => "package",
            Self::ProtocolUpper => "Protocol",
            Self::Required => "required",
            Self::Set => "set",
            Self::Some => "some",
            Self::Transferring => "transferring",
            Self::Type => "Type",
            Self::Unowned => "unowned",
            Self::Weak => "weak",
            Self::WillSet => "willSet",
        }
    }

    /// Whether the lexer always reserves this keyword.
    ///
    /// Lexer-classified keywords may not appear as identifiers in any
    /// position without being escaped. Contextual keywords return `false`.
    pub const fn is_lexer_classified(self) -> bool {
        matches!(
            self,
            Self::AnyUpper
                | Self::As
                | Self::Associatedtype
                | Self::Break
                | Self::Case
                | Self::Catch
                | Self::Class
                | Self::Continue
                | Self::Default
                | Self::Defer
                | Self::Deinit
                | Self::Do
                | Self::Else
                | Self::Enum
                | Self::Extension
                | Self::Fallthrough
                | Self::False
                | Self::Fileprivate
                | Self::For
                | Self::Func
                | Self::Guard
                | Self::If
                | Self::Import
                | Self::In
                | Self::Init
                | Self::Inout
                | Self::Internal
                | Self::Is
                | Self::Let
                | Self::Nil
                | Self::Operator
                | Self::Precedencegroup
                | Self::Private
                | Self::ProtocolLower
                | Self::Public
                | Self::Repeat
                | Self::Rethrows
                | Self::Return
                | Self::SelfLower
                | Self::SelfUpper
                | Self::Static
                | Self::Struct
                | Self::Subscript
                | Self::Super
                | Self::Switch
                | Self::Throw
                | Self::Throws
                | Self::True
                | Self::Try
                | Self::Typealias
                | Self::Var
                | Self::Where
                | Self::While
        )
    }

    /// Look up a keyword by its exact spelling. Case-sensitive.
    #[inline]
    pub fn from_text(text: &str) -> Option<Keyword> {
        let table = table();
        if !(table.min_len..=table.max_len).contains(&text.len()) {
            return None;
        }
        table.by_text.get(text).copied()
    }

    /// Number of distinct spellings in the lookup table.
    ///
    /// Equals [`Keyword::COUNT`] iff the table is collision-free.
    pub fn lookup_table_len() -> usize {
        table().by_text.len()
    }
}

/// Spelling → keyword map with length bounds for fast rejection.
struct KeywordTable {
    by_text: FxHashMap<&'static str, Keyword>,
    min_len: usize,
    max_len: usize,
}

impl KeywordTable {
    fn build() -> Self {
        let mut by_text = FxHashMap::default();
        by_text.reserve(Keyword::COUNT);
        let mut min_len = usize::MAX;
        let mut max_len = 0;

        for &keyword in Keyword::ALL {
            let text = keyword.text();
            let previous = by_text.insert(text, keyword);
            debug_assert!(
                previous.is_none(),
                "keyword spelling `{text}` registered twice"
            );
            min_len = min_len.min(text.len());
            max_len = max_len.max(text.len());
        }

        tracing::debug!(
            keywords = by_text.len(),
            min_len,
            max_len,
            "built keyword table"
        );

        KeywordTable {
            by_text,
            min_len,
            max_len,
        }
    }
}

static KEYWORD_TABLE: OnceLock<KeywordTable> = OnceLock::new();

fn table() -> &'static KeywordTable {
    KEYWORD_TABLE.get_or_init(KeywordTable::build)
}

#[cfg(test)]
mod tests;
