//! Syntax frontend for the goc translator: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the emitter, the CLI and the fuzz
//! target.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not do name resolution or type checking.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `goc_core::lang` registries.
//! - Constructs outside the accepted subset (`go`, `switch`, `map`, closures, ...) are rejected here
//!   with a syntax error, so the emitter only ever sees shapes it knows.
//!
//! ## Examples
//! ```rust,no_run
//! use goc_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("package main\n\nfunc main() {\n}\n").unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.declarations.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
