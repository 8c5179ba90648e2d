//! Token types for the goc lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens, including inserted semicolons
//!
//! ## Notes
//! - Literal tokens carry their raw source spelling. The emitter reproduces literals verbatim, so
//!   nothing is decoded here.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use goc_core::lang::keywords::{self, KeywordId};
use goc_core::lang::operators::OperatorId;
use goc_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals (raw spelling) ==========
    Ident(String),
    Int(String),
    Float(String),
    Imaginary(String),
    Char(String),
    String(String),

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
