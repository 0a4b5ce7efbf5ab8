//! AST definitions
//!
//! The typed abstract syntax tree consumed by the transpiler. Instances are
//! either built programmatically by library callers or deserialized from the
//! JSON dump of a host front-end that has already parsed and type-checked
//! the TypeScript source.

pub mod location;
pub mod utils;

pub use location::SourceLocation;

use serde::{Deserialize, Serialize};

/// Identity of an expression node, used to look up type facts recorded by
/// the front-end. Zero means "no type information".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// A whole translation unit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceFile {
    pub statements: Vec<Stmt>,
}

/// Declaration modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// `declare` - ambient declaration, dropped from output
    Declare,
    /// `static` - class-level member
    Static,
    /// `export` - no effect on emitted Lua
    Export,
}

/// One declarator of a variable statement or for-loop initializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    #[serde(default)]
    pub init: Option<Expr>,
}

/// A `case`/`default` arm of a switch statement. `test` is `None` for
/// the default clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchClause {
    #[serde(default)]
    pub test: Option<Expr>,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    #[serde(default)]
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// Class declaration. Properties, constructor and methods are kept apart
/// because they are emitted in that order no matter how the source
/// interleaved them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    #[serde(default)]
    pub constructor: Option<ConstructorDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(default)]
    pub init: Option<Expr>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// Import declaration shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportDecl {
    /// `import * as N from "m"`
    Namespace { name: String, module: String },
    /// `import { a, b as c } from "m"`
    Named {
        bindings: Vec<ImportBinding>,
        module: String,
    },
    /// `import d from "m"` - not translatable
    Default { name: String, module: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBinding {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

/// Statement node: kind plus the source position it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    pub kind: StmtKind,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Self {
            kind,
            loc: SourceLocation::unknown(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StmtKind {
    /// `{ ... }`
    Block(Vec<Stmt>),
    /// `let a = 1, b;`
    VarStmt {
        #[serde(default)]
        modifiers: Vec<Modifier>,
        decls: Vec<VarDecl>,
    },
    /// Expression in statement position
    ExprStmt(Expr),
    /// `return e;`
    Return(Option<Expr>),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        #[serde(default)]
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    /// Classical `for (init; cond; incr)` - must reduce to a numeric for
    For {
        init: Vec<VarDecl>,
        #[serde(default)]
        cond: Option<Expr>,
        #[serde(default)]
        incr: Option<Expr>,
        body: Box<Stmt>,
    },
    /// `for (const v of e)`
    ForOf {
        binding: String,
        iterable: Expr,
        body: Box<Stmt>,
    },
    /// `for (const k in e)`
    ForIn {
        binding: String,
        iterable: Expr,
        body: Box<Stmt>,
    },
    Switch {
        scrutinee: Expr,
        clauses: Vec<SwitchClause>,
    },
    Break,
    Continue,
    Import(ImportDecl),
    Enum {
        name: String,
        members: Vec<EnumMember>,
        #[serde(default)]
        modifiers: Vec<Modifier>,
    },
    Function(FunctionDecl),
    Class(ClassDecl),
    /// Type-level only, dropped from output
    Interface { name: String },
    /// Type-level only, dropped from output
    TypeAlias { name: String },
}

/// Binary operators. `token_text` is the source spelling; operators whose
/// Lua rendering differs are rewritten in the expression translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    EqEqEq,
    NotEq,
    NotEqEq,
    AmpAmp,
    PipePipe,
    Amp,
    Pipe,
    Assign,
    PlusAssign,
    MinusAssign,
}

impl BinaryOp {
    pub fn token_text(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Star => "*",
            BinaryOp::Slash => "/",
            BinaryOp::Percent => "%",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::EqEq => "==",
            BinaryOp::EqEqEq => "===",
            BinaryOp::NotEq => "!=",
            BinaryOp::NotEqEq => "!==",
            BinaryOp::AmpAmp => "&&",
            BinaryOp::PipePipe => "||",
            BinaryOp::Amp => "&",
            BinaryOp::Pipe => "|",
            BinaryOp::Assign => "=",
            BinaryOp::PlusAssign => "+=",
            BinaryOp::MinusAssign => "-=",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Not,
    PlusPlus,
    MinusMinus,
    Minus,
    Plus,
    Tilde,
}

impl UnaryOp {
    pub fn token_text(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::PlusPlus => "++",
            UnaryOp::MinusMinus => "--",
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Tilde => "~",
        }
    }
}

/// Object literal property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectProp {
    KeyValue { key: PropKey, value: Expr },
    /// `{ x }` shorthand
    Shorthand(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropKey {
    Ident(String),
    Computed(Box<Expr>),
}

/// Expression node. `id` ties the node to the front-end's type table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    #[serde(default)]
    pub id: NodeId,
    pub kind: ExprKind,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self {
            id: NodeId::default(),
            kind,
            loc: SourceLocation::unknown(),
        }
    }

    pub fn with_id(kind: ExprKind, id: NodeId) -> Self {
        Self {
            id,
            kind,
            loc: SourceLocation::unknown(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    /// Numeric literal, kept as its source text
    NumberLit(String),
    StringLit(String),
    BoolLit(bool),
    Ident(String),
    This,
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    PrefixUnary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    PostfixUnary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `c ? a : b`
    Conditional {
        cond: Box<Expr>,
        when_true: Box<Expr>,
        when_false: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `obj.name`
    PropertyAccess {
        object: Box<Expr>,
        name: String,
    },
    /// `obj[index]`
    ElementAccess {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    New {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    ArrayLit(Vec<Expr>),
    ObjectLit(Vec<ObjectProp>),
    FunctionExpr {
        params: Vec<String>,
        body: Vec<Stmt>,
    },
    /// `<T>e` / `e as T` - transparently unwrapped
    TypeAssertion(Box<Expr>),
}
