//! Automatic semicolon insertion.
//!
//! A line break (or end of input) terminates a statement when the last token on the line is an
//! identifier, a literal, one of `return break continue fallthrough`, `++`/`--`, or a closing
//! `)`, `]`, `}`. The lexer inserts a zero-width `;` token there so the parser only ever deals with
//! explicit terminators.

use super::tokens::{Token, TokenKind};
use super::Lexer;
use crate::ast::Span;
use goc_core::lang::keywords::KeywordId;
use goc_core::lang::operators::OperatorId;
use goc_core::lang::punctuation::PunctuationId;

/// Whether a line ending after `kind` terminates the statement.
pub(super) fn ends_statement(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Ident(_)
        | TokenKind::Int(_)
        | TokenKind::Float(_)
        | TokenKind::Imaginary(_)
        | TokenKind::Char(_)
        | TokenKind::String(_) => true,
        TokenKind::Keyword(id) => matches!(
            id,
            KeywordId::Return | KeywordId::Break | KeywordId::Continue | KeywordId::Fallthrough
        ),
        TokenKind::Operator(id) => matches!(id, OperatorId::Inc | OperatorId::Dec),
        TokenKind::Punctuation(id) => matches!(
            id,
            PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace
        ),
        TokenKind::Eof => false,
    }
}

impl Lexer<'_> {
    /// Insert a `;` at `pos` if the previous token ends a statement.
    pub(super) fn insert_semicolon(&mut self, pos: usize) {
        let needed = self.tokens.last().is_some_and(|t| ends_statement(&t.kind));
        if needed {
            self.tokens.push(Token::new(
                TokenKind::Punctuation(PunctuationId::Semicolon),
                Span::new(pos, pos),
            ));
        }
    }
}
