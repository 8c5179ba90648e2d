//! Emit a whole source file to C text.
//!
//! Declarations are emitted in source order into the emitter's single buffer, which is returned
//! once after the last one. The package clause has no C counterpart and is skipped.

use goc_syntax::ast::SourceFile;

use super::{CEmitter, EmitConfig, EmitError};

impl CEmitter {
    /// Emit every declaration of `file` and return the accumulated C text.
    ///
    /// ## Errors
    /// Returns the first [`EmitError`]; nothing of the partial output is kept.
    pub fn emit(mut self, file: &SourceFile) -> Result<String, EmitError> {
        for decl in &file.declarations {
            tracing::debug!(kind = decl.node.kind_name(), start = decl.span.start, "emitting declaration");
            self.emit_declaration(&decl.node, decl.span)?;
        }
        debug_assert_eq!(self.writer.current_indent(), 0, "unbalanced indentation after emission");
        Ok(self.writer.finish())
    }
}

/// Emit a parsed source file as C.
///
/// This is the main public entrypoint of the emitter.
#[tracing::instrument(skip_all, fields(package = %file.package.node, decl_count = file.declarations.len()))]
pub fn emit_source_file(file: &SourceFile, config: EmitConfig) -> Result<String, EmitError> {
    CEmitter::new(config).emit(file)
}
