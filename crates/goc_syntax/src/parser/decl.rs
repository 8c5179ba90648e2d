/// Declaration parsing methods.
///
/// This chunk parses the package clause and the top-level declaration forms:
/// imports, functions, variables and type declarations, including the parenthesised group form
/// (`import ( ... )`, `var ( ... )`, `type ( ... )`), which is expanded into one declaration per spec.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn package_clause(&mut self) -> Result<Spanned<Ident>, CompileError> {
        self.expect_keyword(KeywordId::Package, "Expected `package` clause")?;
        let name = self.identifier_spanned()?;
        self.expect_terminator(None, "package clause")?;
        Ok(name)
    }

    fn top_level_declaration(&mut self) -> Result<Vec<Spanned<Declaration>>, CompileError> {
        let decls = match &self.peek().kind {
            TokenKind::Keyword(KeywordId::Import) => self.import_decl()?,
            TokenKind::Keyword(KeywordId::Func) => vec![self.function_decl()?],
            TokenKind::Keyword(KeywordId::Var) => self.var_decl()?,
            TokenKind::Keyword(KeywordId::Type) => self.type_decl()?,
            TokenKind::Keyword(id) if !keywords::is_supported(*id) => {
                return Err(self.unsupported_keyword(*id));
            }
            _ => return Err(self.unexpected("Expected declaration")),
        };
        self.expect_terminator(None, "declaration")?;
        Ok(decls)
    }

    /// Parse either a single spec or a parenthesised group of specs after a declaration keyword.
    fn spec_group<T>(
        &mut self,
        spec: fn(&mut Self) -> Result<Spanned<T>, CompileError>,
    ) -> Result<Vec<Spanned<T>>, CompileError> {
        if !self.match_punct(PunctuationId::LParen) {
            return Ok(vec![spec(self)?]);
        }

        let mut items = Vec::new();
        self.skip_semicolons();
        while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
            items.push(spec(self)?);
            self.expect_terminator(Some(PunctuationId::RParen), "declaration")?;
            self.skip_semicolons();
        }
        self.expect_punct(PunctuationId::RParen, "Expected `)` to close declaration group")?;
        Ok(items)
    }

    fn import_decl(&mut self) -> Result<Vec<Spanned<Declaration>>, CompileError> {
        self.expect_keyword(KeywordId::Import, "Expected `import`")?;
        self.spec_group(Self::import_spec)
    }

    fn import_spec(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let token = self.peek();
        match &token.kind {
            TokenKind::String(raw) => {
                self.advance();
                Ok(Spanned::new(
                    Declaration::Import(ImportDecl { path: raw.clone() }),
                    token.span,
                ))
            }
            TokenKind::Ident(_) | TokenKind::Punctuation(PunctuationId::Dot) => {
                Err(self.unsupported("import aliases", token.span))
            }
            _ => Err(self.unexpected("Expected import path string")),
        }
    }

    fn function_decl(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let start = self.expect_keyword(KeywordId::Func, "Expected `func`")?.span.start;

        if self.check_punct(PunctuationId::LParen) {
            return Err(self.unsupported("methods", self.current_span()));
        }
        let name = self.identifier_spanned()?;
        if self.check_punct(PunctuationId::LBracket) {
            return Err(self.unsupported("generic functions", self.current_span()));
        }

        let params = self.parameter_list()?;
        let results = self.result_list()?;
        if !self.check_punct(PunctuationId::LBrace) {
            return Err(self.unexpected(&format!("Expected body for function `{}`", name.node)));
        }
        let body = self.block()?;

        Ok(Spanned::new(
            Declaration::Function(FunctionDecl {
                name: name.node,
                params,
                results,
                body,
            }),
            Span::new(start, self.previous_end()),
        ))
    }

    fn parameter_list(&mut self) -> Result<Vec<Spanned<Field>>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected `(`")?;
        let mut entries = Vec::new();
        while !self.check_punct(PunctuationId::RParen) {
            entries.push(self.param_entry()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected `)` to close parameter list")?;
        group_params(entries)
    }

    fn param_entry(&mut self) -> Result<ParamEntry, CompileError> {
        if self.check_punct(PunctuationId::Ellipsis) {
            return Err(self.unsupported("variadic parameters", self.current_span()));
        }

        if matches!(self.peek().kind, TokenKind::Ident(_)) {
            let next = &self.peek_next().kind;
            let next_starts_type = matches!(next, TokenKind::Ident(_))
                || next.is_operator(OperatorId::Star)
                || next.is_punctuation(PunctuationId::LBracket)
                || next.is_punctuation(PunctuationId::LParen)
                || next.is_punctuation(PunctuationId::Ellipsis)
                || matches!(
                    next,
                    TokenKind::Keyword(
                        KeywordId::Struct | KeywordId::Map | KeywordId::Chan | KeywordId::Interface | KeywordId::Func
                    )
                );
            if next_starts_type {
                let name = self.identifier_spanned()?;
                if self.check_punct(PunctuationId::Ellipsis) {
                    return Err(self.unsupported("variadic parameters", self.current_span()));
                }
                let ty = self.type_expr()?;
                return Ok(ParamEntry::Named(name, ty));
            }
        }

        Ok(ParamEntry::Bare(self.type_expr()?))
    }

    /// Results are either absent, a single bare type, or a parenthesised parameter-style list.
    fn result_list(&mut self) -> Result<Vec<Spanned<Field>>, CompileError> {
        if self.check_punct(PunctuationId::LParen) {
            return self.parameter_list();
        }
        if self.check_punct(PunctuationId::LBrace) || !self.is_at_type_start() {
            return Ok(Vec::new());
        }
        let ty = self.type_expr()?;
        let span = ty.span;
        Ok(vec![Spanned::new(Field { names: Vec::new(), ty }, span)])
    }

    fn var_decl(&mut self) -> Result<Vec<Spanned<Declaration>>, CompileError> {
        self.expect_keyword(KeywordId::Var, "Expected `var`")?;
        self.spec_group(Self::var_spec)
    }

    fn var_spec(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let start = self.current_span().start;
        let names = self.identifier_list_spanned()?;

        let ty = if !self.check_op(OperatorId::Assign) && self.is_at_type_start() {
            Some(self.type_expr()?)
        } else {
            None
        };
        let values = if self.match_op(OperatorId::Assign) {
            self.expression_list()?
        } else {
            Vec::new()
        };
        if ty.is_none() && values.is_empty() {
            return Err(self.unexpected("Expected type or `=` in variable declaration"));
        }

        Ok(Spanned::new(
            Declaration::Value(ValueDecl { names, ty, values }),
            Span::new(start, self.previous_end()),
        ))
    }

    fn type_decl(&mut self) -> Result<Vec<Spanned<Declaration>>, CompileError> {
        self.expect_keyword(KeywordId::Type, "Expected `type`")?;
        self.spec_group(Self::type_spec)
    }

    /// `Name Type` or the alias form `Name = Type`; both declare a C typedef.
    fn type_spec(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let name = self.identifier_spanned()?;
        self.match_op(OperatorId::Assign);
        let ty = self.type_expr()?;
        let span = Span::new(name.span.start, self.previous_end());
        Ok(Spanned::new(Declaration::Type(TypeDecl { name: name.node, ty }), span))
    }
}

/// One entry of a parameter or result list before names and types are grouped.
enum ParamEntry {
    /// `name Type`
    Named(Spanned<Ident>, Spanned<TypeExpr>),
    /// A lone type, or a lone name waiting for the type of a later entry.
    Bare(Spanned<TypeExpr>),
}

/// Group raw entries into fields.
///
/// When any entry is named, bare entries are names sharing the type of the next named entry
/// (`a, b int, s string`); otherwise every entry is an unnamed type (`int, error`).
fn group_params(entries: Vec<ParamEntry>) -> Result<Vec<Spanned<Field>>, CompileError> {
    let any_named = entries.iter().any(|e| matches!(e, ParamEntry::Named(..)));
    let mut fields = Vec::new();
    let mut pending: Vec<Spanned<Ident>> = Vec::new();

    for entry in entries {
        match entry {
            ParamEntry::Named(name, ty) => {
                let start = pending.first().map_or(name.span.start, |n| n.span.start);
                let span = Span::new(start, ty.span.end);
                pending.push(name);
                fields.push(Spanned::new(
                    Field {
                        names: std::mem::take(&mut pending),
                        ty,
                    },
                    span,
                ));
            }
            ParamEntry::Bare(ty) if any_named => match ty.node {
                TypeExpr::Named(name) => pending.push(Spanned::new(name, ty.span)),
                _ => {
                    return Err(CompileError::syntax(
                        "Mixed named and unnamed parameters".to_string(),
                        ty.span,
                    ));
                }
            },
            ParamEntry::Bare(ty) => {
                let span = ty.span;
                fields.push(Spanned::new(Field { names: Vec::new(), ty }, span));
            }
        }
    }

    if let Some(name) = pending.first() {
        return Err(CompileError::syntax(
            "Mixed named and unnamed parameters".to_string(),
            name.span,
        ));
    }
    Ok(fields)
}
