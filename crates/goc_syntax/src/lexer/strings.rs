//! String and rune literal scanning.
//!
//! Literals are validated for termination only; escapes are copied through untouched so the C
//! output carries the same spelling as the source.

use super::tokens::TokenKind;
use super::Lexer;
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl Lexer<'_> {
    /// Scan an interpreted string (`"..."`) or rune (`'.'`) literal; the opening quote is consumed.
    pub(super) fn scan_quoted(&mut self, start: usize, quote: char) {
        loop {
            match self.peek() {
                None | Some('\n') => {
                    let what = if quote == '"' { "string" } else { "rune" };
                    self.errors.push(
                        CompileError::syntax(
                            format!("unterminated {} literal", what),
                            Span::new(start, self.current_pos),
                        )
                        .with_hint("use a raw string (`...`) for multi-line text"),
                    );
                    return;
                }
                Some('\\') => {
                    self.advance();
                    if matches!(self.peek(), None | Some('\n')) {
                        continue;
                    }
                    self.advance();
                }
                Some(c) => {
                    self.advance();
                    if c == quote {
                        break;
                    }
                }
            }
        }

        let raw = self.source[start..self.current_pos].to_string();
        if quote == '\'' {
            if raw == "''" {
                self.errors.push(CompileError::syntax(
                    "empty rune literal".to_string(),
                    Span::new(start, self.current_pos),
                ));
            }
            self.add_token(TokenKind::Char(raw), start);
        } else {
            self.add_token(TokenKind::String(raw), start);
        }
    }

    /// Scan a raw string literal; the opening backtick is consumed. Raw strings may span lines.
    pub(super) fn scan_raw_string(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('`') => break,
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::syntax(
                        "unterminated raw string literal".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
        let raw = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::String(raw), start);
    }
}
