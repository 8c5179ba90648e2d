//! Numeric literal scanning.
//!
//! Accepts decimal, `0x`, `0o`, `0b` and legacy-octal integers, decimal and hexadecimal floats,
//! digit separators (`1_000`), and the imaginary suffix `i`. The raw spelling is kept as-is.

use super::tokens::TokenKind;
use super::Lexer;
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl Lexer<'_> {
    /// Scan a number whose first character (`first`) has already been consumed.
    ///
    /// `first` may be `.` for literals like `.5`.
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        let mut is_float = first == '.';

        if first == '0' && matches!(self.peek(), Some('x' | 'X')) {
            self.advance();
            let digits = self.consume_digits(|c| c.is_ascii_hexdigit());
            if self.peek() == Some('.') {
                self.advance();
                self.consume_digits(|c| c.is_ascii_hexdigit());
                is_float = true;
            }
            if matches!(self.peek(), Some('p' | 'P')) {
                self.advance();
                self.scan_exponent_digits(start);
                is_float = true;
            } else if is_float {
                self.errors.push(CompileError::syntax(
                    "hexadecimal mantissa requires a 'p' exponent".to_string(),
                    Span::new(start, self.current_pos),
                ));
            }
            if digits == 0 && !is_float {
                self.errors.push(CompileError::syntax(
                    "hexadecimal literal has no digits".to_string(),
                    Span::new(start, self.current_pos),
                ));
            }
        } else if first == '0' && matches!(self.peek(), Some('b' | 'B' | 'o' | 'O')) {
            let radix = match self.advance() {
                Some('b' | 'B') => 2,
                _ => 8,
            };
            if self.consume_digits(|c| c.is_digit(radix)) == 0 {
                self.errors.push(CompileError::syntax(
                    format!("base-{} literal has no digits", radix),
                    Span::new(start, self.current_pos),
                ));
            }
        } else {
            self.consume_digits(|c| c.is_ascii_digit());
            if !is_float && self.peek() == Some('.') && self.peek_next() != Some('.') {
                self.advance();
                self.consume_digits(|c| c.is_ascii_digit());
                is_float = true;
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                self.advance();
                self.scan_exponent_digits(start);
                is_float = true;
            }
        }

        let raw_end = self.current_pos;
        if self.peek() == Some('i') {
            self.advance();
            let raw = self.source[start..self.current_pos].to_string();
            self.add_token(TokenKind::Imaginary(raw), start);
        } else {
            let raw = self.source[start..raw_end].to_string();
            let kind = if is_float { TokenKind::Float(raw) } else { TokenKind::Int(raw) };
            self.add_token(kind, start);
        }

        if let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                let bad_start = self.current_pos;
                self.advance();
                self.errors.push(CompileError::syntax(
                    format!("invalid character '{}' in numeric literal", c),
                    Span::new(bad_start, self.current_pos),
                ));
            }
        }
    }

    /// Consume digits accepted by `is_digit` plus `_` separators; return the digit count.
    fn consume_digits(&mut self, is_digit: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if is_digit(c) {
                count += 1;
            } else if c != '_' {
                break;
            }
            self.advance();
        }
        count
    }

    /// Consume an optional sign and the decimal digits of an exponent.
    fn scan_exponent_digits(&mut self, start: usize) {
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        if self.consume_digits(|c| c.is_ascii_digit()) == 0 {
            self.errors.push(CompileError::syntax(
                "exponent has no digits".to_string(),
                Span::new(start, self.current_pos),
            ));
        }
    }
}
