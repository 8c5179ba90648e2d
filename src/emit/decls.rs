//! Declaration emission for AST → C code generation
//!
//! Functions become a header line plus a braced body, imports become `#include` lines, typed
//! `var`s become C declarations and `type` specs become `typedef`s or `struct` blocks.
//!
//! ## Notes
//! - Function declarations never get a trailing `;`; every other declaration does, the struct
//!   block through its closing `};`.

use goc_core::strings::unquote;
use goc_syntax::ast::{Declaration, FunctionDecl, ImportDecl, Span, TypeDecl, TypeExpr, ValueDecl};

use super::expressions::render_expr;
use super::types::{declarator, field_declarator, type_name};
use super::{CEmitter, EmitError};

/// Render a typed variable declaration without terminator: `int x`, `int x = 1`, `Node* p`.
pub(super) fn value_fragment(value: &ValueDecl, span: Span) -> Result<String, EmitError> {
    let name = match value.names.as_slice() {
        [name] => name,
        names => {
            return Err(EmitError::MultiValue {
                context: "variable declaration",
                count: names.len(),
                span,
            });
        }
    };
    let Some(ty) = &value.ty else {
        return Err(EmitError::unsupported("variable declarations without an explicit type", span));
    };

    let decl = declarator(ty, &name.node)?;
    match value.values.as_slice() {
        [] => Ok(decl),
        [init] => Ok(format!("{decl} = {}", render_expr(init))),
        values => Err(EmitError::MultiValue {
            context: "variable initialiser",
            count: values.len(),
            span,
        }),
    }
}

impl CEmitter {
    /// Emit a top-level declaration.
    pub(super) fn emit_declaration(&mut self, decl: &Declaration, span: Span) -> Result<(), EmitError> {
        match decl {
            Declaration::Function(func) => self.emit_function(func, span),
            Declaration::Value(value) => self.emit_value(value, span),
            Declaration::Import(import) => self.emit_import(import, span),
            Declaration::Type(ty) => self.emit_type_decl(ty),
        }
    }

    /// Emit a declaration that appears as a statement inside a block.
    pub(super) fn emit_local_declaration(&mut self, decl: &Declaration, span: Span) -> Result<(), EmitError> {
        match decl {
            Declaration::Value(value) => self.emit_value(value, span),
            Declaration::Type(ty) => self.emit_type_decl(ty),
            Declaration::Function(_) => Err(EmitError::unsupported("nested function declarations", span)),
            Declaration::Import(_) => Err(EmitError::unsupported("block-level imports", span)),
        }
    }

    fn emit_function(&mut self, func: &FunctionDecl, span: Span) -> Result<(), EmitError> {
        let count = func.result_count();
        if count > 1 {
            return Err(EmitError::MultipleResults {
                name: func.name.clone(),
                count,
                span,
            });
        }

        let ret = match func.results.first() {
            Some(result) => type_name(&result.node.ty)?,
            None => "void".to_string(),
        };
        let params = func
            .params
            .iter()
            .map(|param| field_declarator(param, "parameter", true))
            .collect::<Result<Vec<_>, _>>()?;

        self.writer.write_line(&format!("{ret} {}({})", func.name, params.join(", ")));
        self.returns_value = count == 1;
        let result = self.emit_block(&func.body);
        self.returns_value = false;
        result
    }

    fn emit_value(&mut self, value: &ValueDecl, span: Span) -> Result<(), EmitError> {
        let text = value_fragment(value, span)?;
        self.writer.write_line(&format!("{text};"));
        Ok(())
    }

    fn emit_import(&mut self, import: &ImportDecl, span: Span) -> Result<(), EmitError> {
        let path = unquote(&import.path).map_err(|source| EmitError::InvalidImportPath {
            path: import.path.clone(),
            source,
            span,
        })?;
        self.writer.write_line(&format!("#include <{path}.h>"));
        Ok(())
    }

    fn emit_type_decl(&mut self, decl: &TypeDecl) -> Result<(), EmitError> {
        let TypeExpr::Struct(fields) = &decl.ty.node else {
            let text = declarator(&decl.ty, &decl.name)?;
            self.writer.write_line(&format!("typedef {text};"));
            return Ok(());
        };

        self.writer.write_line(&format!("struct {} {{", decl.name));
        self.writer.indent();
        let result = fields.iter().try_for_each(|field| {
            let text = field_declarator(field, "struct field", false)?;
            self.writer.write_line(&format!("{text};"));
            Ok(())
        });
        self.writer.dedent();
        result?;
        self.writer.write_line("};");
        Ok(())
    }
}
