//! Define error types for AST → C emission.
//!
//! These errors represent *emission* failures (as opposed to lexing or parsing): shapes the parser
//! accepts but C cannot express one-to-one. The first one aborts the whole pass.
//!
//! ## Notes
//!
//! - Every variant carries the span of the offending node so the CLI can point at it.

use goc_core::strings::UnquoteError;
use goc_syntax::ast::Span;
use goc_syntax::diagnostics::CompileError;
use thiserror::Error;

/// Error during C emission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmitError {
    /// A function declares more than one result value.
    #[error("function `{name}` declares {count} results; C functions return at most one value")]
    MultipleResults { name: String, count: usize, span: Span },

    /// An assignment, return, declaration or field has more than one element.
    #[error("{context} with {count} elements cannot be translated; use one per statement")]
    MultiValue {
        context: &'static str,
        count: usize,
        span: Span,
    },

    /// A construct the parser accepts in general but C output cannot express here.
    #[error("{what} are not supported by the C emitter")]
    Unsupported { what: String, span: Span },

    /// An import path literal that does not decode to a header stem.
    #[error("invalid import path {path}")]
    InvalidImportPath {
        path: String,
        #[source]
        source: UnquoteError,
        span: Span,
    },
}

impl EmitError {
    pub(crate) fn unsupported(what: impl Into<String>, span: Span) -> Self {
        EmitError::Unsupported { what: what.into(), span }
    }

    /// Source span of the offending node.
    pub fn span(&self) -> Span {
        match self {
            EmitError::MultipleResults { span, .. }
            | EmitError::MultiValue { span, .. }
            | EmitError::Unsupported { span, .. }
            | EmitError::InvalidImportPath { span, .. } => *span,
        }
    }
}

impl From<EmitError> for CompileError {
    fn from(err: EmitError) -> Self {
        let span = err.span();
        let compile = CompileError::emit(err.to_string(), span);
        match &err {
            EmitError::MultipleResults { .. } => {
                compile.with_hint("return a struct, or pass result pointers as parameters")
            }
            EmitError::InvalidImportPath { source, .. } => compile.with_note(source.to_string()),
            _ => compile,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessor() {
        let err = EmitError::unsupported("array result types", Span::new(3, 9));
        assert_eq!(err.span(), Span::new(3, 9));
    }

    #[test]
    fn test_multiple_results_message() {
        let err = EmitError::MultipleResults {
            name: "divmod".to_string(),
            count: 2,
            span: Span::default(),
        };
        assert_eq!(
            err.to_string(),
            "function `divmod` declares 2 results; C functions return at most one value"
        );
    }

    #[test]
    fn test_into_compile_error_keeps_span_and_hint() {
        let err = EmitError::MultipleResults {
            name: "f".to_string(),
            count: 3,
            span: Span::new(10, 20),
        };
        let compile: CompileError = err.into();
        assert_eq!(compile.span, Span::new(10, 20));
        assert_eq!(compile.hints.len(), 1);
    }

    #[test]
    fn test_invalid_import_path_carries_source_note() {
        let err = EmitError::InvalidImportPath {
            path: "\"a\\qb\"".to_string(),
            source: UnquoteError::UnknownEscape('q'),
            span: Span::new(0, 6),
        };
        let compile: CompileError = err.into();
        assert_eq!(compile.notes, vec!["unknown escape sequence `\\q`".to_string()]);
    }
}
