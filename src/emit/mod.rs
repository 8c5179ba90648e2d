//! Emit C source code from the Go-subset AST.
//!
//! This module defines [`CEmitter`] and wires together the focused submodules that implement
//! AST → C emission. `mod.rs` stays thin: the walk itself lives in the submodules.
//!
//! ## Notes
//! - Emission is text-only: it does not read or write files.
//! - Each pass owns its own [`CodeWriter`]; there is no shared or global state, so separate files
//!   can be emitted in parallel.
//! - Shapes C cannot express (several results, several assignment targets, untyped `var`, ...) are
//!   reported as a typed [`EmitError`] and abort the pass; no partial output is returned.
//!
//! ## See also
//! - [`program`]: program-level entry points
//! - [`decls`]: declaration emission
//! - [`statements`]: statement and block emission
//! - [`expressions`]: expression fragments
//! - [`types`]: type names and declarators

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod decls;
mod errors;
mod expressions;
mod program;
mod statements;
mod types;
mod writer;

pub use config::EmitConfig;
pub use errors::EmitError;
pub use expressions::render_expr;
pub use program::emit_source_file;
pub use writer::CodeWriter;

use goc_syntax::diagnostics::CompileError;
use goc_syntax::{lexer, parser};

/// Walks one [`goc_syntax::ast::SourceFile`] and accumulates its C rendering.
///
/// The public API is [`CEmitter::emit`] (implemented in `program.rs`); the per-node helpers are
/// spread across the submodules.
pub struct CEmitter {
    writer: CodeWriter,
    /// Set while emitting the body of a function that declares a result.
    returns_value: bool,
}

impl CEmitter {
    /// Create an emitter with the given layout settings.
    pub fn new(config: EmitConfig) -> Self {
        Self {
            writer: CodeWriter::new(config),
            returns_value: false,
        }
    }
}

impl Default for CEmitter {
    fn default() -> Self {
        Self::new(EmitConfig::default())
    }
}

/// Lex, parse and emit Go-subset source text in one step.
///
/// ## Errors
/// Returns every lexer or parser error, or the single emission error that aborted the pass.
pub fn transpile(source: &str, config: EmitConfig) -> Result<String, Vec<CompileError>> {
    let tokens = lexer::lex(source)?;
    let file = parser::parse(&tokens)?;
    emit_source_file(&file, config).map_err(|err| vec![err.into()])
}
