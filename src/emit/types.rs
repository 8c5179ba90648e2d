//! Type and declarator rendering.
//!
//! C spells a typed name as a *declarator*: the array length follows the name (`int a[4]`) while
//! the pointer star follows the type (`Node* next`). These helpers turn a source `(name, type)`
//! pair into that form.

use goc_syntax::ast::{Field, Spanned, TypeExpr};

use super::EmitError;
use super::expressions::render_expr;

/// Render a type in type position (return types, pointees, unnamed parameters).
pub(super) fn type_name(ty: &Spanned<TypeExpr>) -> Result<String, EmitError> {
    match &ty.node {
        TypeExpr::Named(name) => Ok(name.clone()),
        TypeExpr::Qualified { package, name } => Ok(format!("{package}.{name}")),
        TypeExpr::Pointer(pointee) => Ok(format!("{}*", type_name(pointee)?)),
        TypeExpr::Array { .. } => Err(EmitError::unsupported("array types outside a declarator", ty.span)),
        TypeExpr::Struct(_) => Err(EmitError::unsupported("anonymous struct types", ty.span)),
    }
}

/// Render `name` declared with type `ty`.
///
/// Arrays compose outward-in: `[2][3]int` named `m` becomes `int m[2][3]`.
pub(super) fn declarator(ty: &Spanned<TypeExpr>, name: &str) -> Result<String, EmitError> {
    let mut dims = String::new();
    let mut elem = ty;
    while let TypeExpr::Array { len, elem: inner } = &elem.node {
        dims.push('[');
        dims.push_str(&render_expr(len));
        dims.push(']');
        elem = inner;
    }

    let base = type_name(elem)?;
    if name.is_empty() && dims.is_empty() {
        Ok(base)
    } else {
        Ok(format!("{base} {name}{dims}"))
    }
}

/// Render a parameter or struct field that must name exactly one element.
///
/// Unnamed entries render as the bare type when `allow_unnamed` is set (parameters), and are
/// rejected otherwise (embedded struct fields).
pub(super) fn field_declarator(
    field: &Spanned<Field>,
    context: &'static str,
    allow_unnamed: bool,
) -> Result<String, EmitError> {
    match field.node.names.as_slice() {
        [name] => declarator(&field.node.ty, &name.node),
        [] if allow_unnamed => declarator(&field.node.ty, ""),
        [] => Err(EmitError::unsupported("embedded struct fields", field.span)),
        names => Err(EmitError::MultiValue {
            context,
            count: names.len(),
            span: field.span,
        }),
    }
}
