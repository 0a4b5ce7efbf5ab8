//! Recorded type facts
//!
//! The host front-end serializes what it knows about expression types as a
//! node-id keyed table. [`TypeTable`] replays those answers through the
//! [`TypeChecker`] interface so the engine sees the same types the original
//! checker computed.

use super::{Type, TypeChecker};
use crate::ast::{Expr, NodeId, SourceFile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One recorded answer of the host type checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeFacts {
    Number,
    String,
    StringLiteral,
    Boolean,
    Array,
    Object,
    Enum { name: String },
}

impl TypeFacts {
    pub fn to_type(&self) -> Type {
        match self {
            TypeFacts::Number => Type::number(),
            TypeFacts::String => Type::string(),
            TypeFacts::StringLiteral => Type::string_literal(),
            TypeFacts::Boolean => Type::boolean(),
            TypeFacts::Array => Type::array(),
            TypeFacts::Object => Type::object(),
            TypeFacts::Enum { name } => Type::enum_symbol(name),
        }
    }
}

/// Node-id keyed table of type facts; the JSON form uses the id as key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
    entries: HashMap<u32, TypeFacts>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, facts: TypeFacts) {
        self.entries.insert(id.0, facts);
    }

    pub fn get(&self, id: NodeId) -> Option<&TypeFacts> {
        self.entries.get(&id.0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeChecker for TypeTable {
    fn type_of(&self, expr: &Expr) -> Type {
        self.entries
            .get(&expr.id.0)
            .map(TypeFacts::to_type)
            .unwrap_or_default()
    }
}

/// The complete handoff from the front-end: the AST plus everything the
/// checker recorded about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckedProgram {
    pub source_file: SourceFile,
    #[serde(default)]
    pub types: TypeTable,
}
