/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “stmt”, “expr”, or “types” (identifiers and rejections of unsupported constructs).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                self.advance();
                Ok(Spanned::new(name.clone(), span))
            }
            _ => Err(self.unexpected("Expected identifier")),
        }
    }

    fn identifier_list_spanned(&mut self) -> Result<Vec<Spanned<Ident>>, CompileError> {
        let mut idents = vec![self.identifier_spanned()?];
        while self.match_punct(PunctuationId::Comma) {
            idents.push(self.identifier_spanned()?);
        }
        Ok(idents)
    }

    /// Reject a construct introduced by an unsupported keyword at the current token.
    fn unsupported_keyword(&self, id: KeywordId) -> CompileError {
        let what = match id {
            KeywordId::Const => "constant declarations",
            KeywordId::Break | KeywordId::Continue | KeywordId::Goto | KeywordId::Fallthrough => {
                "jump statements"
            }
            KeywordId::Switch | KeywordId::Case | KeywordId::Default => "switch statements",
            KeywordId::Select => "select statements",
            KeywordId::Range => "range clauses",
            KeywordId::Defer => "defer statements",
            KeywordId::Go => "goroutines",
            KeywordId::Map => "map types",
            KeywordId::Chan => "channel types",
            KeywordId::Interface => "interface types",
            KeywordId::Func => "function types and literals",
            _ => "this construct",
        };
        CompileError::syntax(
            format!("`{}` is not supported: {} cannot be translated to C", keywords::as_str(id), what),
            self.current_span(),
        )
    }

    /// Reject an unsupported construct at `span`.
    fn unsupported(&self, what: &str, span: Span) -> CompileError {
        CompileError::syntax(format!("{} are not supported", what), span)
    }
}
