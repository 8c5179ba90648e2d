/// Type expression parsing.
///
/// Supports named and package-qualified types, pointers, fixed-length arrays and struct types.
/// Slices, maps, channels, interfaces and function types are rejected.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<Spanned<TypeExpr>, CompileError> {
        let token = self.peek();
        let start = token.span.start;

        match &token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                if self.match_punct(PunctuationId::Dot) {
                    let member = self.identifier_spanned()?;
                    Ok(Spanned::new(
                        TypeExpr::Qualified {
                            package: name.clone(),
                            name: member.node,
                        },
                        Span::new(start, member.span.end),
                    ))
                } else {
                    Ok(Spanned::new(TypeExpr::Named(name.clone()), token.span))
                }
            }
            TokenKind::Operator(OperatorId::Star) => {
                self.advance();
                let inner = self.type_expr()?;
                let span = Span::new(start, inner.span.end);
                Ok(Spanned::new(TypeExpr::Pointer(Box::new(inner)), span))
            }
            TokenKind::Punctuation(PunctuationId::LBracket) => {
                self.advance();
                if self.check_punct(PunctuationId::RBracket) {
                    return Err(self.unsupported("slice types", Span::new(start, self.current_span().end)));
                }
                if self.check_punct(PunctuationId::Ellipsis) {
                    return Err(self.unsupported("implicit-length arrays", Span::new(start, self.current_span().end)));
                }
                let len = self.expression()?;
                self.expect_punct(PunctuationId::RBracket, "Expected `]` after array length")?;
                let elem = self.type_expr()?;
                let span = Span::new(start, elem.span.end);
                Ok(Spanned::new(
                    TypeExpr::Array {
                        len: Box::new(len),
                        elem: Box::new(elem),
                    },
                    span,
                ))
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.type_expr()?;
                let close = self.expect_punct(PunctuationId::RParen, "Expected `)` after type")?;
                Ok(Spanned::new(inner.node, Span::new(start, close.span.end)))
            }
            TokenKind::Keyword(KeywordId::Struct) => self.struct_type(),
            TokenKind::Keyword(id) if !keywords::is_supported(*id) => Err(self.unsupported_keyword(*id)),
            _ => Err(self.unexpected("Expected type")),
        }
    }

    fn struct_type(&mut self) -> Result<Spanned<TypeExpr>, CompileError> {
        let start = self.expect_keyword(KeywordId::Struct, "Expected `struct`")?.span.start;
        self.expect_punct(PunctuationId::LBrace, "Expected `{` after `struct`")?;
        self.skip_semicolons();

        let mut fields = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let field_start = self.current_span().start;
            let next = &self.peek_next().kind;
            let has_names = matches!(self.peek().kind, TokenKind::Ident(_))
                && !next.is_punctuation(PunctuationId::Dot)
                && !next.is_punctuation(PunctuationId::Semicolon)
                && !next.is_punctuation(PunctuationId::RBrace);
            let names = if has_names {
                self.identifier_list_spanned()?
            } else {
                Vec::new()
            };

            let ty = self.type_expr()?;
            if let TokenKind::String(_) = self.peek().kind {
                return Err(self.unsupported("struct field tags", self.current_span()));
            }
            fields.push(Spanned::new(
                Field { names, ty },
                Span::new(field_start, self.previous_end()),
            ));

            self.expect_terminator(Some(PunctuationId::RBrace), "struct field")?;
            self.skip_semicolons();
        }

        let close = self.expect_punct(PunctuationId::RBrace, "Expected `}` to close struct type")?;
        Ok(Spanned::new(TypeExpr::Struct(fields), Span::new(start, close.span.end)))
    }
}
