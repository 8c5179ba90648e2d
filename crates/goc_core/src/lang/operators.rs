//! Operator vocabulary.
//!
//! This module defines the canonical operator set of the source language along with the metadata
//! the parser needs (binary precedence, prefix use) and the category the emitter and diagnostics
//! report.
//!
//! ## Notes
//! - Binary precedence follows the source language's five levels: `*` `/` `%` `<<` `>>` `&` `&^`
//!   bind tightest (5), then `+` `-` `|` `^` (4), comparisons (3), `&&` (2), `||` (1).
//!   `0` means “not a binary operator”.
//! - Several spellings are both binary and prefix (`+`, `-`, `*`, `&`, `^`); the parser decides
//!   by position.
//!
//! ## Examples
//! ```rust
//! use goc_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("&^"), Some(OperatorId::AmpCaret));
//! assert_eq!(operators::binary_precedence(OperatorId::Star), Some(5));
//! assert_eq!(operators::binary_precedence(OperatorId::Define), None);
//! ```

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Bitwise,
    Logical,
    Comparison,
    Assignment,
    IncDec,
    Channel,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    AmpCaret,

    // Logical
    AndAnd,
    OrOr,
    Not,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Assign,
    Define,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    AmpCaretEq,

    // Increment / decrement
    Inc,
    Dec,

    // Channels
    Arrow,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Binary precedence, higher binds tighter; `0` when the operator is never binary.
    pub precedence: u8,
    /// Whether the operator may appear in prefix (unary) position.
    pub prefix: bool,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", 4, true, OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", 4, true, OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", 5, true, OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", 5, false, OperatorCategory::Arithmetic),
    op(OperatorId::Percent, "%", 5, false, OperatorCategory::Arithmetic),
    // Bitwise
    op(OperatorId::Amp, "&", 5, true, OperatorCategory::Bitwise),
    op(OperatorId::Pipe, "|", 4, false, OperatorCategory::Bitwise),
    op(OperatorId::Caret, "^", 4, true, OperatorCategory::Bitwise),
    op(OperatorId::Shl, "<<", 5, false, OperatorCategory::Bitwise),
    op(OperatorId::Shr, ">>", 5, false, OperatorCategory::Bitwise),
    op(OperatorId::AmpCaret, "&^", 5, false, OperatorCategory::Bitwise),
    // Logical
    op(OperatorId::AndAnd, "&&", 2, false, OperatorCategory::Logical),
    op(OperatorId::OrOr, "||", 1, false, OperatorCategory::Logical),
    op(OperatorId::Not, "!", 0, true, OperatorCategory::Logical),
    // Comparison
    op(OperatorId::EqEq, "==", 3, false, OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", 3, false, OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", 3, false, OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", 3, false, OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", 3, false, OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", 3, false, OperatorCategory::Comparison),
    // Assignment
    op(OperatorId::Assign, "=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::Define, ":=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::PlusEq, "+=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::MinusEq, "-=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::StarEq, "*=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::SlashEq, "/=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::PercentEq, "%=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::AmpEq, "&=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::PipeEq, "|=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::CaretEq, "^=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::ShlEq, "<<=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::ShrEq, ">>=", 0, false, OperatorCategory::Assignment),
    op(OperatorId::AmpCaretEq, "&^=", 0, false, OperatorCategory::Assignment),
    // Increment / decrement
    op(OperatorId::Inc, "++", 0, false, OperatorCategory::IncDec),
    op(OperatorId::Dec, "--", 0, false, OperatorCategory::IncDec),
    // Channels
    op(OperatorId::Arrow, "<-", 0, true, OperatorCategory::Channel),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling of an operator token.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Binary precedence of `id`, or `None` when the operator is never used infix.
pub fn binary_precedence(id: OperatorId) -> Option<u8> {
    match info_for(id).precedence {
        0 => None,
        p => Some(p),
    }
}

/// Whether `id` may appear in prefix (unary) position.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Category of the operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    prefix: bool,
    category: OperatorCategory,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        prefix,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_levels() {
        assert!(binary_precedence(OperatorId::Star) > binary_precedence(OperatorId::Plus));
        assert!(binary_precedence(OperatorId::Plus) > binary_precedence(OperatorId::Lt));
        assert!(binary_precedence(OperatorId::Lt) > binary_precedence(OperatorId::AndAnd));
        assert!(binary_precedence(OperatorId::AndAnd) > binary_precedence(OperatorId::OrOr));
    }

    #[test]
    fn test_assignment_ops_are_not_binary() {
        for info in OPERATORS.iter().filter(|o| o.category == OperatorCategory::Assignment) {
            assert_eq!(binary_precedence(info.id), None, "{} must not be binary", info.spelling);
        }
    }

    #[test]
    fn test_prefix_ops() {
        assert!(is_prefix(OperatorId::Minus));
        assert!(is_prefix(OperatorId::Not));
        assert!(is_prefix(OperatorId::Amp));
        assert!(!is_prefix(OperatorId::Slash));
    }

    #[test]
    fn test_as_str_round_trips_spelling() {
        assert_eq!(as_str(OperatorId::Define), ":=");
        assert_eq!(from_str("<<="), Some(OperatorId::ShlEq));
        assert_eq!(from_str("**"), None);
    }
}
