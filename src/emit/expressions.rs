//! Expression emission for AST → C code generation
//!
//! Expressions render to single-line fragments with no indentation and no terminator. Every binary
//! node is wrapped in exactly one pair of parentheses, so no precedence table is needed and the
//! parser can drop the source's own grouping parentheses.
//!
//! ## Notes
//! - Literals and operator spellings pass through verbatim: `^x` stays `^x`, `a.b` never becomes
//!   `a->b` even when `a` is a pointer.
//! - Unary and deref operands are not re-parenthesised. Since source parentheses are gone, `-(-1)`
//!   renders `--1`, `a - -b` renders `(a--b)` and `(*p).next` renders `*p.next`, all of which C
//!   reads differently.

use goc_syntax::ast::{Expr, Spanned};

/// Render one expression as an inline C fragment.
pub fn render_expr(expr: &Spanned<Expr>) -> String {
    let mut out = String::new();
    write_expr(&mut out, &expr.node);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Literal(lit) => out.push_str(&lit.raw),
        Expr::Ident(name) => out.push_str(name),
        Expr::Selector(base, member) => {
            write_expr(out, &base.node);
            out.push('.');
            out.push_str(member);
        }
        Expr::Binary(left, op, right) => {
            out.push('(');
            write_expr(out, &left.node);
            out.push_str(op.as_str());
            write_expr(out, &right.node);
            out.push(')');
        }
        Expr::Unary(op, operand) => {
            out.push_str(op.as_str());
            write_expr(out, &operand.node);
        }
        Expr::Deref(operand) => {
            out.push('*');
            write_expr(out, &operand.node);
        }
        Expr::Index(base, index) => {
            write_expr(out, &base.node);
            out.push('[');
            write_expr(out, &index.node);
            out.push(']');
        }
        Expr::Call(callee, args) => {
            write_expr(out, &callee.node);
            // Each argument is rendered on its own and then spliced in.
            let args: Vec<String> = args.iter().map(render_expr).collect();
            out.push('(');
            out.push_str(&args.join(", "));
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goc_syntax::ast::{BinaryOp, Literal, LiteralKind, Span, UnaryOp};

    fn sp(expr: Expr) -> Spanned<Expr> {
        Spanned::new(expr, Span::default())
    }

    fn ident(name: &str) -> Spanned<Expr> {
        sp(Expr::Ident(name.to_string()))
    }

    fn int(raw: &str) -> Spanned<Expr> {
        sp(Expr::Literal(Literal {
            kind: LiteralKind::Int,
            raw: raw.to_string(),
        }))
    }

    fn bin(left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Spanned<Expr> {
        sp(Expr::Binary(Box::new(left), op, Box::new(right)))
    }

    #[test]
    fn test_literal_verbatim() {
        let lit = sp(Expr::Literal(Literal {
            kind: LiteralKind::String,
            raw: "\"a\\n\"".to_string(),
        }));
        assert_eq!(render_expr(&lit), "\"a\\n\"");
        assert_eq!(render_expr(&int("0x1F")), "0x1F");
    }

    #[test]
    fn test_binary_parenthesised_without_spaces() {
        let e = bin(ident("a"), BinaryOp::Add, ident("b"));
        assert_eq!(render_expr(&e), "(a+b)");
    }

    #[test]
    fn test_nested_binary_keeps_every_pair() {
        let e = bin(ident("a"), BinaryOp::Add, bin(ident("b"), BinaryOp::Mul, ident("c")));
        assert_eq!(render_expr(&e), "(a+(b*c))");
        let e = bin(bin(ident("i"), BinaryOp::Lt, ident("n")), BinaryOp::And, ident("ok"));
        assert_eq!(render_expr(&e), "((i<n)&&ok)");
    }

    #[test]
    fn test_unary_and_deref() {
        let neg = sp(Expr::Unary(UnaryOp::Neg, Box::new(ident("x"))));
        assert_eq!(render_expr(&neg), "-x");
        let addr = sp(Expr::Unary(UnaryOp::AddrOf, Box::new(ident("node"))));
        assert_eq!(render_expr(&addr), "&node");
        let deref = sp(Expr::Deref(Box::new(ident("p"))));
        assert_eq!(render_expr(&deref), "*p");
        let not_group = sp(Expr::Unary(
            UnaryOp::Not,
            Box::new(bin(ident("a"), BinaryOp::Eq, ident("b"))),
        ));
        assert_eq!(render_expr(&not_group), "!(a==b)");
    }

    #[test]
    fn test_selector_stays_dot_on_pointers() {
        let deref = sp(Expr::Deref(Box::new(ident("p"))));
        let e = sp(Expr::Selector(Box::new(deref), "next".to_string()));
        assert_eq!(render_expr(&e), "*p.next");
        let e = sp(Expr::Selector(Box::new(ident("p")), "x".to_string()));
        assert_eq!(render_expr(&e), "p.x");
    }

    #[test]
    fn test_index() {
        let e = sp(Expr::Index(
            Box::new(ident("grid")),
            Box::new(bin(ident("i"), BinaryOp::Add, int("1"))),
        ));
        assert_eq!(render_expr(&e), "grid[(i+1)]");
    }

    #[test]
    fn test_call_arguments_joined() {
        let callee = sp(Expr::Selector(Box::new(ident("fmt")), "Println".to_string()));
        let e = sp(Expr::Call(
            Box::new(callee),
            vec![ident("a"), bin(ident("b"), BinaryOp::Sub, int("2"))],
        ));
        assert_eq!(render_expr(&e), "fmt.Println(a, (b-2))");
    }

    #[test]
    fn test_call_without_arguments() {
        let e = sp(Expr::Call(Box::new(ident("tick")), Vec::new()));
        assert_eq!(render_expr(&e), "tick()");
    }
}
