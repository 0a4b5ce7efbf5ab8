//! Transpiler module - Lua code generation
//!
//! A stateful tree walker over the checked AST. One [`LuaTranspiler`] is
//! created per source file, runs a single transpile and is then discarded.
//! All output is plain string concatenation; statements emit their own
//! indentation and trailing newline, expressions never do.

pub mod classes;
pub mod exprs;
pub mod for_header;
pub mod stmts;
pub mod switches;


use crate::ast::utils::has_modifier;
use crate::ast::{Modifier, SourceFile, Stmt, StmtKind};
use crate::checker::TypeChecker;
use crate::error::{Result, TsluaError};

/// Translate a checked source file into Lua text
pub fn transpile_source_file(
    source_file: &SourceFile,
    checker: &dyn TypeChecker,
) -> Result<String> {
    let mut transpiler = LuaTranspiler::new(checker);
    transpiler.transpile(source_file)
}

/// Lua code emitter
pub struct LuaTranspiler<'a> {
    /// Type information service borrowed from the host front-end
    checker: &'a dyn TypeChecker,
    /// Current nesting depth; rendered as four spaces per level
    indent: usize,
    /// Next free switch label number; advances by the clause count of every
    /// switch so labels never collide, nested or sequential
    switch_counter: usize,
    /// Label base of the switch clause currently being emitted, if any.
    /// `break` inside a clause jumps to this switch's done label instead of
    /// emitting a loop break.
    active_switch: Option<usize>,
}

impl<'a> LuaTranspiler<'a> {
    pub fn new(checker: &'a dyn TypeChecker) -> Self {
        Self {
            checker,
            indent: 0,
            switch_counter: 0,
            active_switch: None,
        }
    }

    pub(crate) fn checker(&self) -> &dyn TypeChecker {
        self.checker
    }

    pub(crate) fn ind(&self) -> String {
        "    ".repeat(self.indent)
    }

    pub fn transpile(&mut self, source_file: &SourceFile) -> Result<String> {
        self.transpile_block(&source_file.statements)
    }

    /// Emit every statement of a block in order
    pub fn transpile_block(&mut self, statements: &[Stmt]) -> Result<String> {
        let mut out = String::new();
        for stmt in statements {
            out.push_str(&self.transpile_node(stmt)?);
        }
        Ok(out)
    }

    /// Statement dispatch. Returns newline-terminated Lua text; ambient and
    /// type-level declarations translate to nothing.
    pub fn transpile_node(&mut self, stmt: &Stmt) -> Result<String> {
        match &stmt.kind {
            StmtKind::Block(statements) => self.transpile_block(statements),
            StmtKind::VarStmt { modifiers, decls } => {
                if has_modifier(modifiers, Modifier::Declare) {
                    return Ok(String::new());
                }
                self.transpile_var_decls(decls)
            }
            StmtKind::ExprStmt(expr) => {
                let text = self.transpile_expression(expr, false)?;
                Ok(format!("{}{}\n", self.ind(), text))
            }
            StmtKind::Return(value) => self.transpile_return(value.as_ref()),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.transpile_if(cond, then_branch, else_branch.as_deref()),
            StmtKind::While { cond, body } => self.transpile_while(cond, body),
            StmtKind::For {
                init,
                cond,
                incr,
                body,
            } => self.transpile_for(init, cond.as_ref(), incr.as_ref(), body, &stmt.loc),
            StmtKind::ForOf {
                binding,
                iterable,
                body,
            } => self.transpile_for_of(binding, iterable, body),
            StmtKind::ForIn {
                binding,
                iterable,
                body,
            } => self.transpile_for_in(binding, iterable, body),
            StmtKind::Switch { scrutinee, clauses } => self.transpile_switch(scrutinee, clauses),
            StmtKind::Break => Ok(self.transpile_break()),
            StmtKind::Continue => Err(TsluaError::unsupported("ContinueStatement", &stmt.loc)),
            StmtKind::Import(decl) => self.transpile_import(decl, &stmt.loc),
            StmtKind::Enum {
                name: _,
                members,
                modifiers,
            } => {
                if has_modifier(modifiers, Modifier::Declare) {
                    return Ok(String::new());
                }
                self.transpile_enum(members)
            }
            StmtKind::Function(func) => {
                if has_modifier(&func.modifiers, Modifier::Declare) {
                    return Ok(String::new());
                }
                self.transpile_function(&func.name, &func.params, &func.body)
            }
            StmtKind::Class(class) => {
                if has_modifier(&class.modifiers, Modifier::Declare) {
                    return Ok(String::new());
                }
                self.transpile_class(class)
            }
            StmtKind::Interface { .. } | StmtKind::TypeAlias { .. } => Ok(String::new()),
        }
    }

    /// Emit a named function with an indented body, shared by function
    /// declarations, methods and constructors
    pub(crate) fn transpile_function(
        &mut self,
        callee_path: &str,
        params: &[String],
        body: &[Stmt],
    ) -> Result<String> {
        self.indent += 1;
        let body_text = self.transpile_block(body)?;
        self.indent -= 1;

        Ok(format!(
            "{i}function {path}({params})\n{body}{i}end\n",
            i = self.ind(),
            path = callee_path,
            params = params.join(","),
            body = body_text,
        ))
    }
}
