//! Define the reserved keyword vocabulary of the source language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories, and whether the translator accepts the construct the keyword introduces.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Unsupported keywords are still reserved: the lexer must not turn `go` or `map` into
//!   identifiers, so the parser can reject them with a clear message.
//!
//! ## Examples
//! ```rust
//! use goc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! assert!(!keywords::is_supported(KeywordId::Go));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Package,
    Import,
    Func,
    Var,
    Const,
    Type,
    Struct,

    // Control flow
    If,
    Else,
    For,
    Return,
    Break,
    Continue,
    Goto,
    Fallthrough,
    Switch,
    Case,
    Default,
    Select,
    Range,
    Defer,
    Go,

    // Composite types
    Map,
    Chan,
    Interface,
}

/// Broad grouping for keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    ControlFlow,
    Type,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Whether the translator accepts the construct this keyword introduces.
    pub supported: bool,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Package, "package", KeywordCategory::Declaration, true),
    info(KeywordId::Import, "import", KeywordCategory::Declaration, true),
    info(KeywordId::Func, "func", KeywordCategory::Declaration, true),
    info(KeywordId::Var, "var", KeywordCategory::Declaration, true),
    info(KeywordId::Const, "const", KeywordCategory::Declaration, false),
    info(KeywordId::Type, "type", KeywordCategory::Declaration, true),
    info(KeywordId::Struct, "struct", KeywordCategory::Type, true),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, true),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, true),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, true),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, true),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, false),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, false),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow, false),
    info(KeywordId::Fallthrough, "fallthrough", KeywordCategory::ControlFlow, false),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow, false),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow, false),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow, false),
    info(KeywordId::Select, "select", KeywordCategory::ControlFlow, false),
    info(KeywordId::Range, "range", KeywordCategory::ControlFlow, false),
    info(KeywordId::Defer, "defer", KeywordCategory::ControlFlow, false),
    info(KeywordId::Go, "go", KeywordCategory::ControlFlow, false),
    info(KeywordId::Map, "map", KeywordCategory::Type, false),
    info(KeywordId::Chan, "chan", KeywordCategory::Type, false),
    info(KeywordId::Interface, "interface", KeywordCategory::Type, false),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Whether the construct introduced by `id` can be translated.
pub fn is_supported(id: KeywordId) -> bool {
    info_for(id).supported
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, supported: bool) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        supported,
    }
}
