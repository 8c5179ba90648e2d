//! Statement emission for AST → C code generation
//!
//! Statements render as fully indented, terminated lines; `if` and `for` render a header followed
//! by a braced block. Simple statements also have a *fragment mode* ([`simple_fragment`]) that
//! yields un-indented, un-terminated text, which the `for` header splices between its `;`s.

use goc_syntax::ast::{AssignStmt, Block, Declaration, ElseBranch, ForStmt, IfStmt, Span, Spanned, Statement};

use super::decls::value_fragment;
use super::expressions::render_expr;
use super::{CEmitter, EmitError};

/// Render a simple statement (expression, assignment, `++`/`--`, typed `var`) without
/// indentation or terminator.
pub(super) fn simple_fragment(stmt: &Spanned<Statement>) -> Result<String, EmitError> {
    match &stmt.node {
        Statement::Expr(expr) => Ok(render_expr(expr)),
        Statement::Assign(assign) => assign_fragment(assign, stmt.span),
        Statement::IncDec(incdec) => Ok(format!("{}{}", render_expr(&incdec.operand), incdec.op)),
        Statement::Decl(Declaration::Value(value)) => value_fragment(value, stmt.span),
        other => Err(EmitError::unsupported(
            format!("{}s in a `for` clause", other.kind_name()),
            stmt.span,
        )),
    }
}

fn assign_fragment(assign: &AssignStmt, span: Span) -> Result<String, EmitError> {
    match (assign.targets.as_slice(), assign.values.as_slice()) {
        ([target], [value]) => Ok(format!("{} {} {}", render_expr(target), assign.op, render_expr(value))),
        ([_], values) => Err(EmitError::MultiValue {
            context: "assignment",
            count: values.len(),
            span,
        }),
        (targets, _) => Err(EmitError::MultiValue {
            context: "assignment",
            count: targets.len(),
            span,
        }),
    }
}

impl CEmitter {
    /// Emit `{`, the statements one level deeper, then `}`.
    ///
    /// The brace is appended to an open header line, or written on its own line otherwise.
    pub(super) fn emit_block(&mut self, block: &Block) -> Result<(), EmitError> {
        if self.writer.at_line_start() {
            self.writer.write_indented("{");
        } else {
            self.writer.write("{");
        }
        self.writer.newline();

        self.writer.indent();
        let result = block.statements.iter().try_for_each(|stmt| self.emit_statement(stmt));
        self.writer.dedent();
        result?;

        self.writer.write_line("}");
        Ok(())
    }

    pub(super) fn emit_statement(&mut self, stmt: &Spanned<Statement>) -> Result<(), EmitError> {
        match &stmt.node {
            Statement::Expr(_) | Statement::Assign(_) | Statement::IncDec(_) => {
                let text = simple_fragment(stmt)?;
                self.writer.write_line(&format!("{text};"));
                Ok(())
            }
            Statement::Decl(decl) => self.emit_local_declaration(decl, stmt.span),
            Statement::Return(results) => match results.as_slice() {
                [] if self.returns_value => Err(EmitError::unsupported(
                    "bare `return`s in functions with a result",
                    stmt.span,
                )),
                [] => {
                    self.writer.write_line("return;");
                    Ok(())
                }
                [value] => {
                    self.writer.write_line(&format!("return {};", render_expr(value)));
                    Ok(())
                }
                values => Err(EmitError::MultiValue {
                    context: "return statement",
                    count: values.len(),
                    span: stmt.span,
                }),
            },
            Statement::If(if_stmt) => self.emit_if(if_stmt, false),
            Statement::For(for_stmt) => self.emit_for(for_stmt),
            Statement::Block(block) => self.emit_block(block),
        }
    }

    /// `if (cond) { ... }`, with `else if(cond) { ... }` links and a trailing `else` block.
    fn emit_if(&mut self, if_stmt: &IfStmt, chained: bool) -> Result<(), EmitError> {
        let condition = render_expr(&if_stmt.condition);
        if chained {
            self.writer.write_indented(&format!("else if({condition}) "));
        } else {
            self.writer.write_indented(&format!("if ({condition}) "));
        }
        self.emit_block(&if_stmt.then_block)?;

        match &if_stmt.else_branch {
            None => Ok(()),
            Some(ElseBranch::If(nested)) => self.emit_if(&nested.node, true),
            Some(ElseBranch::Block(block)) => {
                self.writer.write_line("else");
                self.emit_block(block)
            }
        }
    }

    fn emit_for(&mut self, for_stmt: &ForStmt) -> Result<(), EmitError> {
        let init = for_stmt.init.as_deref().map(simple_fragment).transpose()?.unwrap_or_default();
        let condition = for_stmt.condition.as_ref().map(render_expr).unwrap_or_default();
        let post = for_stmt.post.as_deref().map(simple_fragment).transpose()?.unwrap_or_default();

        self.writer.write_indented(&format!("for ({init}; {condition}; {post}) "));
        self.emit_block(&for_stmt.body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::emit::test_support::emit_body;
    use goc_syntax::ast::{Expr, IncDecOp, IncDecStmt};

    fn wrap(lines: &str) -> String {
        format!("void f()\n{{\n{lines}}}\n")
    }

    #[test]
    fn test_expression_statement() {
        assert_eq!(emit_body("    fmt.Println(x)").unwrap(), wrap("    fmt.Println(x);\n"));
    }

    #[test]
    fn test_assignments_keep_operator_text() {
        let c = emit_body("    x := 1\n    x = x * 2\n    x += 3\n    p.next = nil").unwrap();
        assert_eq!(
            c,
            wrap("    x := 1;\n    x = (x*2);\n    x += 3;\n    p.next = nil;\n")
        );
    }

    #[test]
    fn test_multi_assignment_is_fatal() {
        let err = emit_body("    a, b = b, a").unwrap_err();
        assert!(matches!(
            err,
            EmitError::MultiValue {
                context: "assignment",
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_inc_dec() {
        assert_eq!(emit_body("    i++\n    n--").unwrap(), wrap("    i++;\n    n--;\n"));
    }

    #[test]
    fn test_return_forms() {
        assert_eq!(emit_body("    return").unwrap(), wrap("    return;\n"));
        let c = crate::emit::test_support::emit_go(
            "package main\n\nfunc f(a int) int {\n    return a + 1\n}\n",
        )
        .unwrap();
        assert_eq!(c, "int f(int a)\n{\n    return (a+1);\n}\n");
    }

    #[test]
    fn test_return_several_values_is_fatal() {
        let err = emit_body("    return 1, 2").unwrap_err();
        assert!(matches!(
            err,
            EmitError::MultiValue {
                context: "return statement",
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_if_else_chain() {
        let c = emit_body("    if a < b {\n        lo()\n    } else if a > b {\n        hi()\n    } else {\n        eq()\n    }")
            .unwrap();
        let expected = wrap(concat!(
            "    if ((a<b)) {\n",
            "        lo();\n",
            "    }\n",
            "    else if((a>b)) {\n",
            "        hi();\n",
            "    }\n",
            "    else\n",
            "    {\n",
            "        eq();\n",
            "    }\n",
        ));
        assert_eq!(c, expected);
    }

    #[test]
    fn test_for_header_composition() {
        let c = emit_body("    for i := 0; i < n; i++ {\n        sum += i\n    }").unwrap();
        assert_eq!(c, wrap("    for (i := 0; (i<n); i++) {\n        sum += i;\n    }\n"));
    }

    #[test]
    fn test_for_missing_clauses() {
        let c = emit_body("    for i < n {\n        i++\n    }").unwrap();
        assert_eq!(c, wrap("    for (; (i<n); ) {\n        i++;\n    }\n"));
        let c = emit_body("    for {\n    }").unwrap();
        assert_eq!(c, wrap("    for (; ; ) {\n    }\n"));
    }

    #[test]
    fn test_nested_block_and_empty_block() {
        let c = emit_body("    {\n        x = 1\n    }\n    {\n    }").unwrap();
        assert_eq!(c, wrap("    {\n        x = 1;\n    }\n    {\n    }\n"));
    }

    #[test]
    fn test_local_declarations() {
        let c = emit_body("    var buf [8]int\n    var p *Node = nil\n    type Id int").unwrap();
        assert_eq!(c, wrap("    int buf[8];\n    Node* p = nil;\n    typedef int Id;\n"));
    }

    #[test]
    fn test_simple_fragment_rejects_compound_statements() {
        let stmt = Spanned::new(Statement::Block(Block::default()), Span::new(4, 6));
        let err = simple_fragment(&stmt).unwrap_err();
        assert_eq!(err.span(), Span::new(4, 6));
        assert!(err.to_string().contains("blocks in a `for` clause"));
    }

    #[test]
    fn test_simple_fragment_inc() {
        let stmt = Spanned::new(
            Statement::IncDec(IncDecStmt {
                operand: Spanned::new(Expr::Ident("i".to_string()), Span::default()),
                op: IncDecOp::Inc,
            }),
            Span::default(),
        );
        assert_eq!(simple_fragment(&stmt).unwrap(), "i++");
    }

    #[test]
    fn test_block_restores_indent_on_error() {
        let mut emitter = CEmitter::default();
        emitter.writer.indent();
        let failing = Spanned::new(Statement::Return(vec![
            Spanned::new(Expr::Ident("a".to_string()), Span::default()),
            Spanned::new(Expr::Ident("b".to_string()), Span::default()),
        ]), Span::default());
        let block = Block {
            statements: vec![Spanned::new(Statement::Block(Block {
                statements: vec![failing],
            }), Span::default())],
        };
        assert!(emitter.emit_block(&block).is_err());
        assert_eq!(emitter.writer.current_indent(), 1);
    }
}
