//! tslua - TypeScript to Lua transpiler
//!
//! # Overview
//! Translates a type-checked TypeScript-subset AST into Lua source code.
//! Parsing and type inference belong to the host front-end; this crate
//! consumes the front-end's AST (built in Rust or deserialized from its
//! JSON dump) together with the type facts it recorded, and emits Lua whose
//! runtime behavior mirrors the source program.

pub mod ast;
pub mod checker;
pub mod diagnostics;
pub mod error;
pub mod transpiler;

use anyhow::Result;
use std::path::Path;

use crate::ast::SourceFile;
use crate::checker::{CheckedProgram, TypeChecker};
use crate::diagnostics::TslDiagnostics;

/// Lua support code the emitted programs rely on (`ITE`, `bit` fallback)
pub const LUA_PRELUDE: &str = include_str!("runtime/prelude.lua");

/// Translate a source file using any type checker implementation
pub fn transpile_source_file(
    source_file: &SourceFile,
    checker: &dyn TypeChecker,
) -> error::Result<String> {
    transpiler::transpile_source_file(source_file, checker)
}

/// Translate a front-end handoff (AST plus recorded type facts)
pub fn transpile_checked(program: &CheckedProgram) -> error::Result<String> {
    transpiler::transpile_source_file(&program.source_file, &program.types)
}

/// Translate the JSON dump of a checked program
pub fn transpile_json(json: &str) -> error::Result<String> {
    let program: CheckedProgram = serde_json::from_str(json)?;
    transpile_checked(&program)
}

/// Like [`transpile_json`], but failures arrive as renderable diagnostics
pub fn transpile_json_with_diagnostics(
    json: &str,
    file: Option<&Path>,
) -> std::result::Result<String, TslDiagnostics> {
    transpile_json(json).map_err(|err| diagnostics::from_error(&err, file))
}

/// Translate a checked-program JSON file into a Lua file
pub fn transpile_file(input: &Path, output: &Path) -> Result<()> {
    let json = std::fs::read_to_string(input)?;
    let lua_code = transpile_json(&json)?;
    std::fs::write(output, lua_code)?;
    Ok(())
}
