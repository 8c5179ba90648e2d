//! Parser for the accepted Go subset
//!
//! Converts a token stream into a [`SourceFile`] AST. Constructs outside the subset are rejected
//! with a syntax error naming the construct, so later stages never see them.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use goc_syntax::{lexer, parser};
//!
//! let source = "package main\n\nfunc add(a int, b int) int {\n    return a + b\n}\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.declarations.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use goc_core::lang::keywords::{self, KeywordId};
use goc_core::lang::operators::{self, OperatorId};
use goc_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
