//! Abstract Syntax Tree definitions for the accepted Go subset.
//!
//! The tree mirrors the source language's shapes, including the multi-value forms the C emitter
//! refuses (several assignment targets, several results, grouped names). Keeping them
//! representable lets the emitter report precise, typed errors instead of the parser guessing.

use std::fmt;

use goc_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A source file: its package clause followed by top-level declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub package: Spanned<Ident>,
    pub declarations: Vec<Spanned<Declaration>>,
}

/// Top-level (and block-local) declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Value(ValueDecl),
    Import(ImportDecl),
    Type(TypeDecl),
}

impl Declaration {
    /// Short human-readable name of the declaration kind, for diagnostics and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Function(_) => "function",
            Declaration::Value(_) => "variable",
            Declaration::Import(_) => "import",
            Declaration::Type(_) => "type",
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// `func name(params) results { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Ident,
    pub params: Vec<Spanned<Field>>,
    pub results: Vec<Spanned<Field>>,
    pub body: Block,
}

impl FunctionDecl {
    /// Number of result values, counting every name of a grouped `(a, b int)` result.
    pub fn result_count(&self) -> usize {
        self.results.iter().map(|f| f.node.names.len().max(1)).sum()
    }
}

/// A typed entry of a parameter list, result list or struct body.
///
/// `a, b int` is a single field with two names; an unnamed parameter or result has no names.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub names: Vec<Spanned<Ident>>,
    pub ty: Spanned<TypeExpr>,
}

/// `var names type = values`
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDecl {
    pub names: Vec<Spanned<Ident>>,
    pub ty: Option<Spanned<TypeExpr>>,
    pub values: Vec<Spanned<Expr>>,
}

/// `import "path"`; the path is kept exactly as written, quotes included.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub path: String,
}

/// `type Name Underlying`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: Ident,
    pub ty: Spanned<TypeExpr>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// `int`, `Node`
    Named(Ident),
    /// `os.File`
    Qualified { package: Ident, name: Ident },
    /// `*T`
    Pointer(Box<Spanned<TypeExpr>>),
    /// `[len]T`
    Array {
        len: Box<Spanned<Expr>>,
        elem: Box<Spanned<TypeExpr>>,
    },
    /// `struct { ... }`
    Struct(Vec<Spanned<Field>>),
}

// ============================================================================
// Statements
// ============================================================================

/// A brace-delimited statement list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expr(Spanned<Expr>),
    Assign(AssignStmt),
    Decl(Declaration),
    Return(Vec<Spanned<Expr>>),
    IncDec(IncDecStmt),
    If(IfStmt),
    For(ForStmt),
    Block(Block),
}

impl Statement {
    /// Short human-readable name of the statement kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Expr(_) => "expression statement",
            Statement::Assign(_) => "assignment",
            Statement::Decl(_) => "declaration",
            Statement::Return(_) => "return statement",
            Statement::IncDec(_) => "increment/decrement",
            Statement::If(_) => "if statement",
            Statement::For(_) => "for statement",
            Statement::Block(_) => "block",
        }
    }
}

/// `targets op values`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub targets: Vec<Spanned<Expr>>,
    pub op: AssignOp,
    pub values: Vec<Spanned<Expr>>,
}

/// `operand++` / `operand--`
#[derive(Debug, Clone, PartialEq)]
pub struct IncDecStmt {
    pub operand: Spanned<Expr>,
    pub op: IncDecOp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// `else if ...`
    If(Box<Spanned<IfStmt>>),
    /// `else { ... }`
    Block(Block),
}

/// `for init; condition; post { body }`; every clause may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Spanned<Statement>>>,
    pub condition: Option<Spanned<Expr>>,
    pub post: Option<Box<Spanned<Statement>>>,
    pub body: Block,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Ident(Ident),
    /// `base.member`
    Selector(Box<Spanned<Expr>>, Ident),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    /// `*operand`
    Deref(Box<Spanned<Expr>>),
    /// `base[index]`
    Index(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    /// `callee(args...)`
    Call(Box<Spanned<Expr>>, Vec<Spanned<Expr>>),
}

/// A literal kept exactly as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    Imaginary,
    Char,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    AndNot,
    And,
    Or,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Rem,
            OperatorId::Amp => BinaryOp::BitAnd,
            OperatorId::Pipe => BinaryOp::BitOr,
            OperatorId::Caret => BinaryOp::BitXor,
            OperatorId::Shl => BinaryOp::Shl,
            OperatorId::Shr => BinaryOp::Shr,
            OperatorId::AmpCaret => BinaryOp::AndNot,
            OperatorId::AndAnd => BinaryOp::And,
            OperatorId::OrOr => BinaryOp::Or,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            _ => return None,
        })
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Rem => OperatorId::Percent,
            BinaryOp::BitAnd => OperatorId::Amp,
            BinaryOp::BitOr => OperatorId::Pipe,
            BinaryOp::BitXor => OperatorId::Caret,
            BinaryOp::Shl => OperatorId::Shl,
            BinaryOp::Shr => OperatorId::Shr,
            BinaryOp::AndNot => OperatorId::AmpCaret,
            BinaryOp::And => OperatorId::AndAnd,
            BinaryOp::Or => OperatorId::OrOr,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
        }
    }

    /// Source token text, e.g. `"&&"`.
    pub fn as_str(self) -> &'static str {
        operators::as_str(self.operator_id())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    BitNot,
    AddrOf,
}

impl UnaryOp {
    /// Map a prefix operator token; `*` is not included since it parses to [`Expr::Deref`].
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => UnaryOp::Plus,
            OperatorId::Minus => UnaryOp::Neg,
            OperatorId::Not => UnaryOp::Not,
            OperatorId::Caret => UnaryOp::BitNot,
            OperatorId::Amp => UnaryOp::AddrOf,
            _ => return None,
        })
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            UnaryOp::Plus => OperatorId::Plus,
            UnaryOp::Neg => OperatorId::Minus,
            UnaryOp::Not => OperatorId::Not,
            UnaryOp::BitNot => OperatorId::Caret,
            UnaryOp::AddrOf => OperatorId::Amp,
        }
    }

    pub fn as_str(self) -> &'static str {
        operators::as_str(self.operator_id())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Define,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    AndNot,
}

impl AssignOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Assign => AssignOp::Assign,
            OperatorId::Define => AssignOp::Define,
            OperatorId::PlusEq => AssignOp::Add,
            OperatorId::MinusEq => AssignOp::Sub,
            OperatorId::StarEq => AssignOp::Mul,
            OperatorId::SlashEq => AssignOp::Div,
            OperatorId::PercentEq => AssignOp::Rem,
            OperatorId::AmpEq => AssignOp::BitAnd,
            OperatorId::PipeEq => AssignOp::BitOr,
            OperatorId::CaretEq => AssignOp::BitXor,
            OperatorId::ShlEq => AssignOp::Shl,
            OperatorId::ShrEq => AssignOp::Shr,
            OperatorId::AmpCaretEq => AssignOp::AndNot,
            _ => return None,
        })
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            AssignOp::Assign => OperatorId::Assign,
            AssignOp::Define => OperatorId::Define,
            AssignOp::Add => OperatorId::PlusEq,
            AssignOp::Sub => OperatorId::MinusEq,
            AssignOp::Mul => OperatorId::StarEq,
            AssignOp::Div => OperatorId::SlashEq,
            AssignOp::Rem => OperatorId::PercentEq,
            AssignOp::BitAnd => OperatorId::AmpEq,
            AssignOp::BitOr => OperatorId::PipeEq,
            AssignOp::BitXor => OperatorId::CaretEq,
            AssignOp::Shl => OperatorId::ShlEq,
            AssignOp::Shr => OperatorId::ShrEq,
            AssignOp::AndNot => OperatorId::AmpCaretEq,
        }
    }

    pub fn as_str(self) -> &'static str {
        operators::as_str(self.operator_id())
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Inc,
    Dec,
}

impl IncDecOp {
    pub fn operator_id(self) -> OperatorId {
        match self {
            IncDecOp::Inc => OperatorId::Inc,
            IncDecOp::Dec => OperatorId::Dec,
        }
    }

    pub fn as_str(self) -> &'static str {
        operators::as_str(self.operator_id())
    }
}

impl fmt::Display for IncDecOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
