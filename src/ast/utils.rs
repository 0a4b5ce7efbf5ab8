//! AST query helpers - kind names, modifier tests, declaration accessors

use super::{Expr, ExprKind, Modifier, StmtKind, VarDecl};

/// Symbolic name of a statement kind, for diagnostics
pub fn stmt_kind_name(kind: &StmtKind) -> &'static str {
    match kind {
        StmtKind::Block(_) => "Block",
        StmtKind::VarStmt { .. } => "VariableStatement",
        StmtKind::ExprStmt(_) => "ExpressionStatement",
        StmtKind::Return(_) => "ReturnStatement",
        StmtKind::If { .. } => "IfStatement",
        StmtKind::While { .. } => "WhileStatement",
        StmtKind::For { .. } => "ForStatement",
        StmtKind::ForOf { .. } => "ForOfStatement",
        StmtKind::ForIn { .. } => "ForInStatement",
        StmtKind::Switch { .. } => "SwitchStatement",
        StmtKind::Break => "BreakStatement",
        StmtKind::Continue => "ContinueStatement",
        StmtKind::Import(_) => "ImportDeclaration",
        StmtKind::Enum { .. } => "EnumDeclaration",
        StmtKind::Function(_) => "FunctionDeclaration",
        StmtKind::Class(_) => "ClassDeclaration",
        StmtKind::Interface { .. } => "InterfaceDeclaration",
        StmtKind::TypeAlias { .. } => "TypeAliasDeclaration",
    }
}

/// Symbolic name of an expression kind, for diagnostics
pub fn expr_kind_name(kind: &ExprKind) -> &'static str {
    match kind {
        ExprKind::NumberLit(_) => "NumericLiteral",
        ExprKind::StringLit(_) => "StringLiteral",
        ExprKind::BoolLit(_) => "BooleanLiteral",
        ExprKind::Ident(_) => "Identifier",
        ExprKind::This => "ThisExpression",
        ExprKind::Binary { .. } => "BinaryExpression",
        ExprKind::PrefixUnary { .. } => "PrefixUnaryExpression",
        ExprKind::PostfixUnary { .. } => "PostfixUnaryExpression",
        ExprKind::Conditional { .. } => "ConditionalExpression",
        ExprKind::Call { .. } => "CallExpression",
        ExprKind::PropertyAccess { .. } => "PropertyAccessExpression",
        ExprKind::ElementAccess { .. } => "ElementAccessExpression",
        ExprKind::New { .. } => "NewExpression",
        ExprKind::ArrayLit(_) => "ArrayLiteralExpression",
        ExprKind::ObjectLit(_) => "ObjectLiteralExpression",
        ExprKind::FunctionExpr { .. } => "FunctionExpression",
        ExprKind::TypeAssertion(_) => "TypeAssertionExpression",
    }
}

pub fn has_modifier(modifiers: &[Modifier], modifier: Modifier) -> bool {
    modifiers.contains(&modifier)
}

/// The single declarator of a for-loop initializer, if there is exactly one
pub fn single_decl(decls: &[VarDecl]) -> Option<&VarDecl> {
    match decls {
        [decl] => Some(decl),
        _ => None,
    }
}

/// Strip any number of type assertion wrappers (`<T>e`, `e as T`)
pub fn unwrap_assertions(expr: &Expr) -> &Expr {
    let mut current = expr;
    while let ExprKind::TypeAssertion(inner) = &current.kind {
        current = inner;
    }
    current
}
