/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - The parser is single-pass and recovers from errors by synchronizing at top-level
///   declaration boundaries.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `goc_syntax::lexer`; it must end with `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`SourceFile`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails. The parser attempts
    /// to recover and continue after an error to report multiple issues in one pass.
    pub fn parse(mut self) -> Result<SourceFile, Vec<CompileError>> {
        if self.tokens.is_empty() {
            return Err(vec![CompileError::syntax(
                "Empty token stream".to_string(),
                Span::default(),
            )]);
        }

        self.skip_semicolons();
        let package = match self.package_clause() {
            Ok(package) => package,
            Err(e) => return Err(vec![e]),
        };

        let mut declarations = Vec::new();
        self.skip_semicolons();

        while !self.is_at_end() {
            match self.top_level_declaration() {
                Ok(decls) => declarations.extend(decls),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.skip_semicolons();
        }

        if self.errors.is_empty() {
            Ok(SourceFile { package, declarations })
        } else {
            Err(self.errors)
        }
    }
}
