//! Diagnostics and error reporting for the goc frontend.
//!
//! [`CompileError`] is the single error shape shared by the lexer, the parser and (after
//! conversion) the emitter. Rendering goes through `miette` so every stage reports errors with the
//! same source-highlighted layout.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::ast::Span;

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn syntax(message: String, span: Span) -> Self {
        Self::with_kind(ErrorKind::Syntax, message, span)
    }

    /// An error raised while emitting C for an otherwise well-formed tree.
    pub fn emit(message: String, span: Span) -> Self {
        Self::with_kind(ErrorKind::Emit, message, span)
    }

    fn with_kind(kind: ErrorKind, message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Emit,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Emit => write!(f, "unsupported construct"),
        }
    }
}

/// A [`CompileError`] paired with the source it points into, so `miette` can draw the snippet.
#[derive(Debug)]
struct SourceDiagnostic<'a> {
    error: &'a CompileError,
    source: NamedSource<String>,
    span: Span,
}

impl fmt::Display for SourceDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.kind, self.error.message)
    }
}

impl std::error::Error for SourceDiagnostic<'_> {}

impl Diagnostic for SourceDiagnostic<'_> {
    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        if self.error.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.error.hints.join("\n")))
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(None, self.span.start..self.span.end);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Messages are never wrapped below this many columns.
const REPORT_WIDTH: usize = 160;

/// Render an error with source context as plain (uncoloured) text.
///
/// Notes are appended after the snippet, one `= note:` line each.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let start = error.span.start.min(source.len());
    let end = error.span.end.clamp(start, source.len());
    let diagnostic = SourceDiagnostic {
        error,
        source: NamedSource::new(file_name, source.to_string()),
        span: Span::new(start, end),
    };

    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(REPORT_WIDTH);
    let mut out = String::new();
    if handler.render_report(&mut out, &diagnostic).is_err() {
        // Fall back to a location-only rendering if miette cannot draw the snippet.
        let (line, col) = line_col(source, start);
        out = format!("{}: {}\n  --> {}:{}:{}\n", error.kind, error.message, file_name, line, col);
    }
    for note in &error.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    out
}

/// 1-based line and column for a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, offset - line_start + 1)
}
