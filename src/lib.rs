#![forbid(unsafe_code)]
//! goc: translate a small subset of Go into readable C source.
//!
//! The syntax frontend (lexer, parser, AST, diagnostics) lives in `goc_syntax`; this crate holds the
//! C emitter and the command-line tool.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `emit` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use goc::emit::{EmitConfig, transpile};
//!
//! let c = transpile("package main\n\nimport \"fmt\"\n", EmitConfig::default()).unwrap();
//! assert_eq!(c, "#include <fmt.h>\n");
//! ```

pub mod cli;
pub mod emit;

pub use goc_syntax::{ast, diagnostics, lexer, parser};

pub use emit::{CEmitter, EmitConfig, EmitError, emit_source_file, transpile};
