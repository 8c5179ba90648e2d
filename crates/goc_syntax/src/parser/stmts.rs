/// Statement parsing methods.
///
/// This chunk parses brace-delimited blocks and the statement forms of the subset:
/// `return`, `if`/`else`, three-clause and condition-only `for`, nested blocks, local `var`/`type`
/// declarations and simple statements (expressions, assignments, `++`/`--`).
///
/// ## Notes
/// - Statements are terminated by `;`, which the lexer inserts at most line ends.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) -> Result<Block, CompileError> {
        self.expect_punct(PunctuationId::LBrace, "Expected `{`")?;
        let mut statements = Vec::new();
        self.skip_semicolons();

        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if self.check_keyword(KeywordId::Var) || self.check_keyword(KeywordId::Type) {
                let decls = if self.check_keyword(KeywordId::Var) {
                    self.var_decl()?
                } else {
                    self.type_decl()?
                };
                statements.extend(
                    decls
                        .into_iter()
                        .map(|d| Spanned::new(Statement::Decl(d.node), d.span)),
                );
            } else {
                statements.push(self.statement()?);
            }
            self.expect_terminator(Some(PunctuationId::RBrace), "statement")?;
            self.skip_semicolons();
        }

        self.expect_punct(PunctuationId::RBrace, "Expected `}` to close block")?;
        Ok(Block { statements })
    }

    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.current_span().start;

        let stmt = match &self.peek().kind {
            TokenKind::Keyword(KeywordId::Return) => self.return_stmt()?,
            TokenKind::Keyword(KeywordId::If) => Statement::If(self.if_stmt()?),
            TokenKind::Keyword(KeywordId::For) => Statement::For(self.for_stmt()?),
            TokenKind::Punctuation(PunctuationId::LBrace) => Statement::Block(self.block()?),
            TokenKind::Keyword(KeywordId::Import) => {
                return Err(CompileError::syntax(
                    "Imports must appear at the top level".to_string(),
                    self.current_span(),
                ));
            }
            TokenKind::Keyword(id) if !keywords::is_supported(*id) || *id == KeywordId::Func => {
                return Err(self.unsupported_keyword(*id));
            }
            _ => self.simple_stmt()?,
        };

        Ok(Spanned::new(stmt, Span::new(start, self.previous_end())))
    }

    fn return_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::Return, "Expected `return`")?;
        let results = if self.is_at_expr_start() {
            self.expression_list()?
        } else {
            Vec::new()
        };
        Ok(Statement::Return(results))
    }

    /// Expression statement, assignment or `++`/`--`.
    fn simple_stmt(&mut self) -> Result<Statement, CompileError> {
        let start = self.current_span().start;
        let mut lhs = self.expression_list()?;

        if let Some(op) = self.peek().operator_id().and_then(AssignOp::from_operator) {
            self.advance();
            let values = self.expression_list()?;
            return Ok(Statement::Assign(AssignStmt {
                targets: lhs,
                op,
                values,
            }));
        }

        let op = if self.check_op(OperatorId::Inc) {
            Some(IncDecOp::Inc)
        } else if self.check_op(OperatorId::Dec) {
            Some(IncDecOp::Dec)
        } else {
            None
        };

        if self.check_op(OperatorId::Arrow) {
            return Err(self.unsupported("channel sends", self.current_span()));
        }
        if self.check_punct(PunctuationId::Colon) {
            return Err(self.unsupported("labeled statements", Span::new(start, self.current_span().end)));
        }

        match lhs.pop() {
            Some(operand) if lhs.is_empty() => match op {
                Some(op) => {
                    self.advance();
                    Ok(Statement::IncDec(IncDecStmt { operand, op }))
                }
                None => Ok(Statement::Expr(operand)),
            },
            _ => Err(self.unexpected("Expected `=` or `:=` after expression list")),
        }
    }

    /// A simple statement used as a `for` clause, with its span.
    fn simple_stmt_spanned(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.current_span().start;
        let stmt = self.simple_stmt()?;
        Ok(Spanned::new(stmt, Span::new(start, self.previous_end())))
    }

    fn if_stmt(&mut self) -> Result<IfStmt, CompileError> {
        self.expect_keyword(KeywordId::If, "Expected `if`")?;

        let head = self.simple_stmt_spanned()?;
        if self.check_punct(PunctuationId::Semicolon) {
            return Err(self.unsupported("`if` statements with an init statement", head.span));
        }
        let condition = match head.node {
            Statement::Expr(expr) => expr,
            other => {
                return Err(CompileError::syntax(
                    format!("Expected condition after `if`, found {}", other.kind_name()),
                    head.span,
                ));
            }
        };

        let then_block = self.block()?;

        let else_branch = if self.match_keyword(KeywordId::Else) {
            if self.check_keyword(KeywordId::If) {
                let start = self.current_span().start;
                let nested = self.if_stmt()?;
                let span = Span::new(start, self.previous_end());
                Some(ElseBranch::If(Box::new(Spanned::new(nested, span))))
            } else if self.check_punct(PunctuationId::LBrace) {
                Some(ElseBranch::Block(self.block()?))
            } else {
                return Err(self.unexpected("Expected `if` or `{` after `else`"));
            }
        } else {
            None
        };

        Ok(IfStmt {
            condition,
            then_block,
            else_branch,
        })
    }

    /// `for { }`, `for cond { }` or `for init; cond; post { }`.
    fn for_stmt(&mut self) -> Result<ForStmt, CompileError> {
        self.expect_keyword(KeywordId::For, "Expected `for`")?;

        if self.check_punct(PunctuationId::LBrace) {
            let body = self.block()?;
            return Ok(ForStmt {
                init: None,
                condition: None,
                post: None,
                body,
            });
        }

        let init = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            let first = self.simple_stmt_spanned()?;
            if self.check_punct(PunctuationId::LBrace) {
                let condition = match first.node {
                    Statement::Expr(expr) => expr,
                    other => {
                        return Err(CompileError::syntax(
                            format!("Expected loop condition, found {}", other.kind_name()),
                            first.span,
                        ));
                    }
                };
                let body = self.block()?;
                return Ok(ForStmt {
                    init: None,
                    condition: Some(condition),
                    post: None,
                    body,
                });
            }
            Some(Box::new(first))
        };

        self.expect_punct(PunctuationId::Semicolon, "Expected `;` after for-loop init statement")?;
        let condition = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect_punct(PunctuationId::Semicolon, "Expected `;` after for-loop condition")?;
        let post = if self.check_punct(PunctuationId::LBrace) {
            None
        } else {
            Some(Box::new(self.simple_stmt_spanned()?))
        };
        let body = self.block()?;

        Ok(ForStmt {
            init,
            condition,
            post,
            body,
        })
    }
}
