/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Statement terminators (`skip_semicolons`, `expect_terminator`)
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &'a Token {
        if self.pos + 1 < self.tokens.len() {
            &self.tokens[self.pos + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &'a Token {
        let current = self.pos.min(self.tokens.len() - 1);
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&'a Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&'a Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    /// Build an "expected X, found Y" error at the current token.
    fn unexpected(&self, msg: &str) -> CompileError {
        CompileError::syntax(
            format!("{}, found {}", msg, self.peek().kind.describe()),
            self.current_span(),
        )
    }

    /// Consume any run of `;` tokens (explicit or inserted at line ends).
    fn skip_semicolons(&mut self) {
        while self.match_punct(PunctuationId::Semicolon) {}
    }

    /// Require a statement terminator unless the enclosing list is about to close.
    fn expect_terminator(&mut self, closing: Option<PunctuationId>, what: &str) -> Result<(), CompileError> {
        let closes = closing.is_some_and(|id| self.check_punct(id));
        if self.match_punct(PunctuationId::Semicolon) || closes || self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected(&format!("Expected newline or `;` after {}", what)))
        }
    }

    /// Skip tokens until the start of the next top-level declaration.
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            let at_line_start = self.pos > 0 && self.tokens[self.pos - 1].kind.is_punctuation(PunctuationId::Semicolon);
            if at_line_start
                && (self.check_keyword(KeywordId::Func)
                    || self.check_keyword(KeywordId::Var)
                    || self.check_keyword(KeywordId::Const)
                    || self.check_keyword(KeywordId::Type)
                    || self.check_keyword(KeywordId::Import))
            {
                return;
            }
            self.advance();
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// End offset of the most recently consumed token.
    fn previous_end(&self) -> usize {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span.end,
            None => self.current_span().start,
        }
    }

    /// Check if the current token can start an expression
    fn is_at_expr_start(&self) -> bool {
        let kind = &self.peek().kind;
        kind.is_literal()
            || matches!(kind, TokenKind::Ident(_))
            || self.check_punct(PunctuationId::LParen)
            || kind.operator_id().is_some_and(operators::is_prefix)
    }

    /// Check if the current token can start a type
    fn is_at_type_start(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Ident(_))
            || self.check_op(OperatorId::Star)
            || self.check_punct(PunctuationId::LBracket)
            || self.check_punct(PunctuationId::LParen)
            || self.check_keyword(KeywordId::Struct)
            || self.check_keyword(KeywordId::Map)
            || self.check_keyword(KeywordId::Chan)
            || self.check_keyword(KeywordId::Interface)
            || self.check_keyword(KeywordId::Func)
    }
}
