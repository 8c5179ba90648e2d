/// Expression parsing methods.
///
/// Binary expressions use precedence climbing driven by `operators::binary_precedence`
/// (five levels, all left-associative), followed by unary → postfix → operand.
///
/// ## Notes
/// - Parentheses only group: `(a + b)` parses to the inner expression with a widened span.
/// - Operator identities are carried by [`TokenKind::Operator`] / [`OperatorId`].
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.binary_expr(1)
    }

    fn expression_list(&mut self) -> Result<Vec<Spanned<Expr>>, CompileError> {
        let mut exprs = vec![self.expression()?];
        while self.match_punct(PunctuationId::Comma) {
            exprs.push(self.expression()?);
        }
        Ok(exprs)
    }

    fn binary_expr(&mut self, min_prec: u8) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.unary_expr()?;

        loop {
            let Some(id) = self.peek().operator_id() else {
                break;
            };
            let Some(prec) = operators::binary_precedence(id) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            let Some(op) = BinaryOp::from_operator(id) else {
                break;
            };
            self.advance();

            let right = self.binary_expr(prec + 1)?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }

        Ok(left)
    }

    fn unary_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span();

        if let Some(id) = self.peek().operator_id() {
            if id == OperatorId::Star {
                self.advance();
                let operand = self.unary_expr()?;
                let span = start.merge(operand.span);
                return Ok(Spanned::new(Expr::Deref(Box::new(operand)), span));
            }
            if id == OperatorId::Arrow {
                return Err(self.unsupported("channel receives", start));
            }
            if let Some(op) = UnaryOp::from_operator(id) {
                self.advance();
                let operand = self.unary_expr()?;
                let span = start.merge(operand.span);
                return Ok(Spanned::new(Expr::Unary(op, Box::new(operand)), span));
            }
        }

        self.postfix_expr()
    }

    fn postfix_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut expr = self.operand()?;

        loop {
            if self.match_punct(PunctuationId::Dot) {
                if self.check_punct(PunctuationId::LParen) {
                    return Err(self.unsupported("type assertions", self.current_span()));
                }
                let member = self.identifier_spanned()?;
                let span = Span::new(expr.span.start, member.span.end);
                expr = Spanned::new(Expr::Selector(Box::new(expr), member.node), span);
            } else if self.match_punct(PunctuationId::LBracket) {
                if self.check_punct(PunctuationId::Colon) {
                    return Err(self.unsupported("slice expressions", self.current_span()));
                }
                let index = self.expression()?;
                if self.check_punct(PunctuationId::Colon) {
                    return Err(self.unsupported("slice expressions", self.current_span()));
                }
                let close = self.expect_punct(PunctuationId::RBracket, "Expected `]` after index")?;
                let span = Span::new(expr.span.start, close.span.end);
                expr = Spanned::new(Expr::Index(Box::new(expr), Box::new(index)), span);
            } else if self.match_punct(PunctuationId::LParen) {
                let mut args = Vec::new();
                while !self.check_punct(PunctuationId::RParen) {
                    args.push(self.expression()?);
                    if self.check_punct(PunctuationId::Ellipsis) {
                        return Err(self.unsupported("variadic call arguments", self.current_span()));
                    }
                    if !self.match_punct(PunctuationId::Comma) {
                        break;
                    }
                }
                let close = self.expect_punct(PunctuationId::RParen, "Expected `)` to close call arguments")?;
                let span = Span::new(expr.span.start, close.span.end);
                expr = Spanned::new(Expr::Call(Box::new(expr), args), span);
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn operand(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let token = self.peek();
        let span = token.span;

        let literal = |kind: LiteralKind, raw: &String| {
            Expr::Literal(Literal {
                kind,
                raw: raw.clone(),
            })
        };

        let expr = match &token.kind {
            TokenKind::Int(raw) => literal(LiteralKind::Int, raw),
            TokenKind::Float(raw) => literal(LiteralKind::Float, raw),
            TokenKind::Imaginary(raw) => literal(LiteralKind::Imaginary, raw),
            TokenKind::Char(raw) => literal(LiteralKind::Char, raw),
            TokenKind::String(raw) => literal(LiteralKind::String, raw),
            TokenKind::Ident(name) => Expr::Ident(name.clone()),
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                let close = self.expect_punct(PunctuationId::RParen, "Expected `)` after expression")?;
                return Ok(Spanned::new(inner.node, Span::new(span.start, close.span.end)));
            }
            TokenKind::Punctuation(PunctuationId::LBracket) | TokenKind::Keyword(KeywordId::Struct) => {
                return Err(self.unsupported("composite literals", span));
            }
            TokenKind::Keyword(id) if !keywords::is_supported(*id) || *id == KeywordId::Func => {
                return Err(self.unsupported_keyword(*id));
            }
            _ => return Err(self.unexpected("Expected expression")),
        };

        self.advance();
        Ok(Spanned::new(expr, span))
    }
}
