//! Statement translation - declarations, control flow, imports, enums

use super::LuaTranspiler;
use crate::ast::utils::single_decl;
use crate::ast::{EnumMember, Expr, ExprKind, ImportDecl, SourceLocation, Stmt, VarDecl};
use crate::error::{Result, TsluaError};

impl LuaTranspiler<'_> {
    /// One `local` line per declarator
    pub(crate) fn transpile_var_decls(&mut self, decls: &[VarDecl]) -> Result<String> {
        let mut out = String::new();
        for decl in decls {
            match &decl.init {
                Some(init) => {
                    let init_text = self.transpile_expression(init, false)?;
                    out.push_str(&format!("{}local {} = {}\n", self.ind(), decl.name, init_text));
                }
                None => out.push_str(&format!("{}local {}\n", self.ind(), decl.name)),
            }
        }
        Ok(out)
    }

    pub(crate) fn transpile_return(&mut self, value: Option<&Expr>) -> Result<String> {
        match value {
            Some(expr) => {
                let text = self.transpile_expression(expr, false)?;
                Ok(format!("{}return {}\n", self.ind(), text))
            }
            None => Ok(format!("{}return\n", self.ind())),
        }
    }

    pub(crate) fn transpile_if(
        &mut self,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Result<String> {
        let cond_text = self.transpile_expression(cond, false)?;

        self.indent += 1;
        let then_text = self.transpile_node(then_branch)?;
        self.indent -= 1;

        match else_branch {
            Some(else_stmt) => {
                self.indent += 1;
                let else_text = self.transpile_node(else_stmt)?;
                self.indent -= 1;
                Ok(format!(
                    "{i}if {cond} then\n{then}{i}else\n{else_}{i}end\n",
                    i = self.ind(),
                    cond = cond_text,
                    then = then_text,
                    else_ = else_text,
                ))
            }
            None => Ok(format!(
                "{i}if {cond} then\n{then}{i}end\n",
                i = self.ind(),
                cond = cond_text,
                then = then_text,
            )),
        }
    }

    pub(crate) fn transpile_while(&mut self, cond: &Expr, body: &Stmt) -> Result<String> {
        let cond_text = self.transpile_expression(cond, false)?;

        self.indent += 1;
        let body_text = self.transpile_node(body)?;
        self.indent -= 1;

        Ok(format!(
            "{i}while {cond} do\n{body}{i}end\n",
            i = self.ind(),
            cond = cond_text,
            body = body_text,
        ))
    }

    /// Classical for loop; the header must reduce to a Lua numeric for
    pub(crate) fn transpile_for(
        &mut self,
        init: &[VarDecl],
        cond: Option<&Expr>,
        incr: Option<&Expr>,
        body: &Stmt,
        loc: &SourceLocation,
    ) -> Result<String> {
        let decl = single_decl(init).ok_or_else(|| {
            TsluaError::translation("for initializer must declare exactly one variable", loc)
        })?;
        let start_expr = decl.init.as_ref().ok_or_else(|| {
            TsluaError::translation("for loop variable needs an initial value", loc)
        })?;
        let cond =
            cond.ok_or_else(|| TsluaError::translation("for loop needs a condition", loc))?;
        let incr =
            incr.ok_or_else(|| TsluaError::translation("for loop needs an incrementor", loc))?;

        let start = self.transpile_expression(start_expr, false)?;
        let end = self.for_end(cond)?;
        let step = self.for_step(incr)?;

        self.indent += 1;
        let body_text = self.transpile_node(body)?;
        self.indent -= 1;

        Ok(format!(
            "{i}for {var}={start},{end},{step} do\n{body}{i}end\n",
            i = self.ind(),
            var = decl.name,
            body = body_text,
        ))
    }

    pub(crate) fn transpile_for_of(
        &mut self,
        binding: &str,
        iterable: &Expr,
        body: &Stmt,
    ) -> Result<String> {
        let iter_fn = self.iteration_fn(iterable);
        let iterable_text = self.transpile_expression(iterable, false)?;

        self.indent += 1;
        let body_text = self.transpile_node(body)?;
        self.indent -= 1;

        Ok(format!(
            "{i}for _, {binding} in {iter_fn}({iterable}) do\n{body}{i}end\n",
            i = self.ind(),
            iterable = iterable_text,
            body = body_text,
        ))
    }

    pub(crate) fn transpile_for_in(
        &mut self,
        binding: &str,
        iterable: &Expr,
        body: &Stmt,
    ) -> Result<String> {
        let iter_fn = self.iteration_fn(iterable);
        let iterable_text = self.transpile_expression(iterable, false)?;

        self.indent += 1;
        let body_text = self.transpile_node(body)?;
        self.indent -= 1;

        Ok(format!(
            "{i}for {binding}, _ in {iter_fn}({iterable}) do\n{body}{i}end\n",
            i = self.ind(),
            iterable = iterable_text,
            body = body_text,
        ))
    }

    fn iteration_fn(&self, iterable: &Expr) -> &'static str {
        let ty = self.checker().type_of(iterable);
        if self.checker().is_array_type(&ty) {
            "ipairs"
        } else {
            "pairs"
        }
    }

    /// `break` leaves the innermost loop, unless a switch clause is being
    /// emitted - then it must leave the whole switch
    pub(crate) fn transpile_break(&mut self) -> String {
        match self.active_switch {
            Some(base) => format!("{}goto switchDone{}\n", self.ind(), base),
            None => format!("{}break\n", self.ind()),
        }
    }

    pub(crate) fn transpile_import(
        &mut self,
        decl: &ImportDecl,
        loc: &SourceLocation,
    ) -> Result<String> {
        match decl {
            ImportDecl::Namespace { name, module } => Ok(format!(
                "{}{} = require(\"{}\")\n",
                self.ind(),
                name,
                module
            )),
            ImportDecl::Named { bindings, module } => {
                for binding in bindings {
                    if let Some(alias) = &binding.alias {
                        return Err(TsluaError::unsupported(
                            format!("renamed import '{} as {}'", binding.name, alias),
                            loc,
                        ));
                    }
                }
                Ok(format!("{}require(\"{}\")\n", self.ind(), module))
            }
            ImportDecl::Default { name, .. } => Err(TsluaError::unsupported(
                format!("default import '{name}'"),
                loc,
            )),
        }
    }

    /// Enum members become top-level assignments; values auto-increment from
    /// zero unless a numeric literal initializer resets the counter
    pub(crate) fn transpile_enum(&mut self, members: &[EnumMember]) -> Result<String> {
        let mut out = String::new();
        let mut value: i64 = 0;

        for member in members {
            if let Some(init) = &member.init {
                match &init.kind {
                    ExprKind::NumberLit(text) => {
                        value = text.parse().map_err(|_| {
                            TsluaError::translation(
                                format!("enum member '{}' initializer is not numeric", member.name),
                                &init.loc,
                            )
                        })?;
                    }
                    _ => {
                        return Err(TsluaError::translation(
                            format!("enum member '{}' initializer is not numeric", member.name),
                            &init.loc,
                        ));
                    }
                }
            }
            out.push_str(&format!("{}{}={}\n", self.ind(), member.name, value));
            value += 1;
        }
        Ok(out)
    }
}
