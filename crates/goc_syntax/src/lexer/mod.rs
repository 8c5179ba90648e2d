//! Lexer for the accepted Go subset
//!
//! Handles tokenization including:
//! - Keywords (every Go keyword is recognised; the parser decides which ones are supported)
//! - Identifiers and literals (integers, floats, imaginaries, runes, interpreted and raw strings)
//! - Operators and punctuation, matched longest-first against the `goc_core` registries
//! - Line and block comments
//! - Automatic semicolon insertion at line ends
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String/rune scanning
//! - `numbers` - Numeric literal scanning
//! - `semicolons` - Semicolon insertion rule

mod numbers;
mod semicolons;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use goc_core::lang::{operators, punctuation};

/// Lexer for Go source code.
///
/// Converts source text into a stream of tokens. Newlines never appear in the stream: a line end
/// either becomes an inserted `;` or is dropped.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.insert_semicolon(self.current_pos);
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(self.current_pos, self.current_pos)));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' => {}

            '\n' => self.insert_semicolon(start),

            '/' if self.peek() == Some('/') => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }

            '/' if self.peek() == Some('*') => self.scan_block_comment(start),

            '"' | '\'' => self.scan_quoted(start, c),
            '`' => self.scan_raw_string(start),

            '0'..='9' => self.scan_number(start, c),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start, c),

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => self.scan_symbol(start, c),
        }
    }

    /// Skip a `/* ... */` comment; a comment spanning lines acts like a line break.
    fn scan_block_comment(&mut self, start: usize) {
        self.advance();
        let mut saw_newline = false;
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    break;
                }
                Some('\n') => saw_newline = true,
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::syntax(
                        "comment not terminated".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
        if saw_newline {
            self.insert_semicolon(start);
        }
    }

    /// Match the longest operator or punctuation spelling starting at `start`.
    fn scan_symbol(&mut self, start: usize, first: char) {
        let rest = &self.source[start..];
        for len in (1..=3).rev() {
            let Some(candidate) = rest.get(..len) else {
                continue;
            };
            let kind = if let Some(id) = operators::from_str(candidate) {
                TokenKind::Operator(id)
            } else if let Some(id) = punctuation::from_str(candidate) {
                TokenKind::Punctuation(id)
            } else {
                continue;
            };
            for _ in 1..len {
                self.advance();
            }
            self.add_token(kind, start);
            return;
        }

        self.errors.push(CompileError::syntax(
            format!("Unexpected character '{}'", first),
            Span::new(start, self.current_pos),
        ));
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use goc_core::lang::keywords::{self, KeywordId};
    use goc_core::lang::operators::OperatorId;
    use goc_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", source, errs))
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn semi() -> TokenKind {
        TokenKind::Punctuation(PunctuationId::Semicolon)
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", k.canonical, errs));
            assert!(tokens[0].kind.is_keyword(k.id), "{:?} lexed as {:?}", k.canonical, tokens[0]);
            assert!(matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let tokens = lex(o.spelling).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", o.spelling, errs));
            assert!(
                tokens[0].kind.is_operator(o.id),
                "expected {:?} for {:?}, got {:?}",
                o.id,
                o.spelling,
                tokens[0]
            );
            assert_eq!(tokens[0].span, Span::new(0, o.spelling.len()));
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = lex(p.canonical).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", p.canonical, errs));
            assert!(
                tokens[0].kind.is_punctuation(p.id),
                "expected {:?} for {:?}, got {:?}",
                p.id,
                p.canonical,
                tokens[0]
            );
        }
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(
            kinds("a &^= b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Operator(OperatorId::AmpCaretEq),
                TokenKind::Ident("b".into()),
                semi(),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("i := <-c"),
            vec![
                TokenKind::Ident("i".into()),
                TokenKind::Operator(OperatorId::Define),
                TokenKind::Operator(OperatorId::Arrow),
                TokenKind::Ident("c".into()),
                semi(),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers_keep_raw_spelling() {
        let k = kinds("42 0x1F 0b1010 0o17 1_000 3.14 1e10 .5 1. 0x1p-2 2i");
        assert_eq!(k[0], TokenKind::Int("42".into()));
        assert_eq!(k[1], TokenKind::Int("0x1F".into()));
        assert_eq!(k[2], TokenKind::Int("0b1010".into()));
        assert_eq!(k[3], TokenKind::Int("0o17".into()));
        assert_eq!(k[4], TokenKind::Int("1_000".into()));
        assert_eq!(k[5], TokenKind::Float("3.14".into()));
        assert_eq!(k[6], TokenKind::Float("1e10".into()));
        assert_eq!(k[7], TokenKind::Float(".5".into()));
        assert_eq!(k[8], TokenKind::Float("1.".into()));
        assert_eq!(k[9], TokenKind::Float("0x1p-2".into()));
        assert_eq!(k[10], TokenKind::Imaginary("2i".into()));
    }

    #[test]
    fn test_strings_and_runes() {
        let k = kinds(r#""hi\n" 'a' '\'' `raw\n`"#);
        assert_eq!(k[0], TokenKind::String(r#""hi\n""#.into()));
        assert_eq!(k[1], TokenKind::Char("'a'".into()));
        assert_eq!(k[2], TokenKind::Char(r"'\''".into()));
        assert_eq!(k[3], TokenKind::String("`raw\\n`".into()));
    }

    #[test]
    fn test_raw_string_spans_lines() {
        let k = kinds("x = `a\nb`\n");
        assert_eq!(k[2], TokenKind::String("`a\nb`".into()));
        assert_eq!(k[3], semi());
    }

    #[test]
    fn test_semicolon_insertion() {
        let k = kinds("x++\nreturn\n}\nfoo(\na,\n)\n");
        assert_eq!(
            k,
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Operator(OperatorId::Inc),
                semi(),
                TokenKind::Keyword(KeywordId::Return),
                semi(),
                TokenKind::Punctuation(PunctuationId::RBrace),
                semi(),
                TokenKind::Ident("foo".into()),
                TokenKind::Punctuation(PunctuationId::LParen),
                TokenKind::Ident("a".into()),
                TokenKind::Punctuation(PunctuationId::Comma),
                TokenKind::Punctuation(PunctuationId::RParen),
                semi(),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_no_semicolon_after_operator_or_open_brace() {
        let k = kinds("a +\nb {\n");
        assert_eq!(
            k,
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Operator(OperatorId::Plus),
                TokenKind::Ident("b".into()),
                TokenKind::Punctuation(PunctuationId::LBrace),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_inserted_semicolon_at_eof() {
        let k = kinds("package main");
        assert_eq!(k.last(), Some(&TokenKind::Eof));
        assert_eq!(k[k.len() - 2], semi());
    }

    #[test]
    fn test_comments() {
        let k = kinds("a // trailing\nb /* inline */ c /* multi\nline */ d");
        assert_eq!(
            k,
            vec![
                TokenKind::Ident("a".into()),
                semi(),
                TokenKind::Ident("b".into()),
                TokenKind::Ident("c".into()),
                semi(),
                TokenKind::Ident("d".into()),
                semi(),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let errors = lex("a @ b").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unexpected character '@'"));
        assert_eq!(errors[0].span, Span::new(2, 3));
    }

    #[test]
    fn test_unicode_identifier_rejected() {
        let result = lex("π := 1");
        assert!(result.is_err(), "Unicode identifier should produce an error");
    }

    #[test]
    fn test_unterminated_literals() {
        let errors = lex("\"abc\nx").unwrap_err();
        assert!(errors[0].message.contains("unterminated string literal"));

        let errors = lex("`abc").unwrap_err();
        assert!(errors[0].message.contains("unterminated raw string literal"));

        let errors = lex("/* open").unwrap_err();
        assert!(errors[0].message.contains("comment not terminated"));
    }

    #[test]
    fn test_bad_numbers() {
        assert!(lex("0x").is_err());
        assert!(lex("1e").is_err());
        assert!(lex("12abc").is_err());
    }
}
