//! Type checker interface
//!
//! The transpiler does not infer types itself; it queries a borrowed
//! [`TypeChecker`] for the static type of expression nodes. The trait is
//! small on purpose: the engine only needs enough information to pick
//! primitive method rewrites and to flatten enum member access.

pub mod table;

pub use table::{CheckedProgram, TypeFacts, TypeTable};

use crate::ast::Expr;

bitflags::bitflags! {
    /// Flags describing the shape of a type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        const NUMBER = 1 << 0;
        const STRING = 1 << 1;
        const STRING_LITERAL = 1 << 2;
        const BOOLEAN = 1 << 3;
        const OBJECT = 1 << 4;
    }
}

bitflags::bitflags! {
    /// Extra flags carried by object types
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjectFlags: u32 {
        const ARRAY = 1 << 0;
    }
}

bitflags::bitflags! {
    /// Flags on the symbol a type is declared by
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SymbolFlags: u32 {
        const ENUM = 1 << 0;
        const CLASS = 1 << 1;
    }
}

/// Declaration symbol backing a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub escaped_name: String,
    pub flags: SymbolFlags,
}

/// Static type of an expression as reported by the front-end.
/// An empty flag set means the type is unknown; the engine then falls back
/// to untyped translation rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Type {
    pub flags: TypeFlags,
    pub object_flags: ObjectFlags,
    pub symbol: Option<Symbol>,
}

impl Type {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn number() -> Self {
        Self {
            flags: TypeFlags::NUMBER,
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self {
            flags: TypeFlags::STRING,
            ..Self::default()
        }
    }

    pub fn string_literal() -> Self {
        Self {
            flags: TypeFlags::STRING_LITERAL,
            ..Self::default()
        }
    }

    pub fn boolean() -> Self {
        Self {
            flags: TypeFlags::BOOLEAN,
            ..Self::default()
        }
    }

    pub fn object() -> Self {
        Self {
            flags: TypeFlags::OBJECT,
            ..Self::default()
        }
    }

    pub fn array() -> Self {
        Self {
            flags: TypeFlags::OBJECT,
            object_flags: ObjectFlags::ARRAY,
            ..Self::default()
        }
    }

    /// Type of an identifier bound to an enum declaration
    pub fn enum_symbol(name: &str) -> Self {
        Self {
            symbol: Some(Symbol {
                escaped_name: name.to_string(),
                flags: SymbolFlags::ENUM,
            }),
            ..Self::default()
        }
    }

    /// String or string literal
    pub fn is_stringlike(&self) -> bool {
        self.flags
            .intersects(TypeFlags::STRING | TypeFlags::STRING_LITERAL)
    }

    pub fn is_enum_symbol(&self) -> bool {
        self.symbol
            .as_ref()
            .is_some_and(|s| s.flags.contains(SymbolFlags::ENUM))
    }
}

/// Source of type information for expression nodes
pub trait TypeChecker {
    /// Static type of an expression; [`Type::unknown`] when nothing is known
    fn type_of(&self, expr: &Expr) -> Type;

    /// Whether a type is array-shaped
    fn is_array_type(&self, ty: &Type) -> bool {
        ty.flags.contains(TypeFlags::OBJECT) && ty.object_flags.contains(ObjectFlags::ARRAY)
    }
}

/// Checker that knows nothing; every expression is untyped
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChecker;

impl TypeChecker for NullChecker {
    fn type_of(&self, _expr: &Expr) -> Type {
        Type::unknown()
    }
}
