//! Expression translation
//!
//! Every function here returns a Lua expression string without trailing
//! newline. The `bracket` flag wraps the result in parentheses; callers set
//! it at binary operand and switch comparison sites so the emitted Lua
//! cannot change meaning through precedence.

use super::LuaTranspiler;
use crate::ast::utils::{expr_kind_name, unwrap_assertions};
use crate::ast::{BinaryOp, Expr, ExprKind, ObjectProp, PropKey, SourceLocation, UnaryOp};
use crate::checker::TypeFlags;
use crate::error::{Result, TsluaError};

/// Quote a string for Lua, escaping the characters that would break the
/// literal
pub fn quote_lua_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

impl LuaTranspiler<'_> {
    pub fn transpile_expression(&mut self, expr: &Expr, bracket: bool) -> Result<String> {
        let text = self.expression_text(expr)?;
        if bracket {
            Ok(format!("({text})"))
        } else {
            Ok(text)
        }
    }

    fn expression_text(&mut self, expr: &Expr) -> Result<String> {
        match &expr.kind {
            ExprKind::NumberLit(text) => Ok(text.clone()),
            ExprKind::StringLit(value) => Ok(quote_lua_string(value)),
            ExprKind::BoolLit(value) => Ok(if *value { "true" } else { "false" }.to_string()),
            ExprKind::Ident(name) => Ok(name.clone()),
            ExprKind::This => Ok("self".to_string()),
            ExprKind::Binary { left, op, right } => self.transpile_binary(left, *op, right),
            ExprKind::PrefixUnary { op, operand } => {
                self.transpile_unary(*op, operand, &expr.loc)
            }
            ExprKind::PostfixUnary { op, operand } => {
                self.transpile_postfix_unary(*op, operand, &expr.loc)
            }
            ExprKind::Conditional {
                cond,
                when_true,
                when_false,
            } => {
                let c = self.transpile_expression(cond, false)?;
                let t = self.transpile_expression(when_true, false)?;
                let f = self.transpile_expression(when_false, false)?;
                Ok(format!(
                    "ITE({c},function() return {t} end, function() return {f} end)"
                ))
            }
            ExprKind::Call { callee, args } => self.transpile_call(callee, args),
            ExprKind::PropertyAccess { object, name } => {
                self.transpile_property_access(object, name, &expr.loc)
            }
            ExprKind::ElementAccess { object, index } => {
                self.transpile_element_access(object, index)
            }
            ExprKind::New { callee, args } => {
                let callee_text = self.transpile_expression(callee, false)?;
                let args_text = self.transpile_arguments(args)?;
                Ok(format!("{callee_text}({args_text})"))
            }
            ExprKind::ArrayLit(elements) => {
                let items = elements
                    .iter()
                    .map(|e| self.transpile_expression(e, false))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{{}}}", items.join(",")))
            }
            ExprKind::ObjectLit(props) => self.transpile_object_literal(props),
            ExprKind::FunctionExpr { params, body } => {
                self.indent += 1;
                let body_text = self.transpile_block(body)?;
                self.indent -= 1;
                Ok(format!(
                    "function({params})\n{body}{i}end ",
                    params = params.join(","),
                    body = body_text,
                    i = self.ind(),
                ))
            }
            ExprKind::TypeAssertion(inner) => self.expression_text(inner),
        }
    }

    fn transpile_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> Result<String> {
        match op {
            // Assignment keeps both sides bare
            BinaryOp::Assign => {
                let l = self.transpile_expression(left, false)?;
                let r = self.transpile_expression(right, false)?;
                Ok(format!("{l}={r}"))
            }
            // Lua has no compound assignment
            BinaryOp::PlusAssign => {
                let l = self.transpile_expression(left, false)?;
                let r = self.transpile_expression(right, false)?;
                Ok(format!("{l} = {l} + {r}"))
            }
            BinaryOp::MinusAssign => {
                let l = self.transpile_expression(left, false)?;
                let r = self.transpile_expression(right, false)?;
                Ok(format!("{l} = {l} - {r}"))
            }
            BinaryOp::AmpAmp => {
                let l = self.transpile_expression(left, true)?;
                let r = self.transpile_expression(right, true)?;
                Ok(format!("{l} and {r}"))
            }
            BinaryOp::PipePipe => {
                let l = self.transpile_expression(left, true)?;
                let r = self.transpile_expression(right, true)?;
                Ok(format!("{l} or {r}"))
            }
            BinaryOp::Amp => {
                let l = self.transpile_expression(left, false)?;
                let r = self.transpile_expression(right, false)?;
                Ok(format!("bit.band({l}, {r})"))
            }
            BinaryOp::Pipe => {
                let l = self.transpile_expression(left, false)?;
                let r = self.transpile_expression(right, false)?;
                Ok(format!("bit.bor({l}, {r})"))
            }
            _ => {
                let lua_op = match op {
                    BinaryOp::EqEqEq => "==",
                    BinaryOp::NotEq | BinaryOp::NotEqEq => "~=",
                    other => other.token_text(),
                };
                let l = self.transpile_expression(left, true)?;
                let r = self.transpile_expression(right, true)?;
                Ok(format!("{l}{lua_op}{r}"))
            }
        }
    }

    fn transpile_unary(
        &mut self,
        op: UnaryOp,
        operand: &Expr,
        loc: &SourceLocation,
    ) -> Result<String> {
        match op {
            UnaryOp::Not => {
                let text = self.transpile_expression(operand, false)?;
                Ok(format!("not {text}"))
            }
            UnaryOp::PlusPlus | UnaryOp::MinusMinus => self.transpile_step_unary(op, operand),
            other => Err(TsluaError::unsupported(
                format!("unary operator '{}'", other.token_text()),
                loc,
            )),
        }
    }

    fn transpile_postfix_unary(
        &mut self,
        op: UnaryOp,
        operand: &Expr,
        loc: &SourceLocation,
    ) -> Result<String> {
        match op {
            UnaryOp::PlusPlus | UnaryOp::MinusMinus => self.transpile_step_unary(op, operand),
            other => Err(TsluaError::unsupported(
                format!("unary operator '{}'", other.token_text()),
                loc,
            )),
        }
    }

    /// `x++` / `x--` as an assignment; only meaningful in statement position
    fn transpile_step_unary(&mut self, op: UnaryOp, operand: &Expr) -> Result<String> {
        let target = self.transpile_expression(operand, false)?;
        let delta = if op == UnaryOp::PlusPlus { "+" } else { "-" };
        Ok(format!("{target} = {target} {delta} 1"))
    }

    fn transpile_call(&mut self, callee: &Expr, args: &[Expr]) -> Result<String> {
        // Primitive receivers get whitelisted method rewrites
        if let ExprKind::PropertyAccess { object, name } = &callee.kind {
            let receiver_type = self.checker().type_of(object);
            if receiver_type.is_stringlike() {
                return self.transpile_string_call(object, name, args, &callee.loc);
            }
            if receiver_type.flags.contains(TypeFlags::OBJECT)
                && self.checker().is_array_type(&receiver_type)
            {
                return self.transpile_array_call(object, name, args, &callee.loc);
            }
        }

        // Plain call; the last dot becomes a colon so the receiver is
        // forwarded as the implicit first argument
        let mut callee_text = self.transpile_expression(callee, false)?;
        if let Some(pos) = callee_text.rfind('.') {
            callee_text.replace_range(pos..pos + 1, ":");
        }
        let args_text = self.transpile_arguments(args)?;
        Ok(format!("{callee_text}({args_text})"))
    }

    fn transpile_string_call(
        &mut self,
        object: &Expr,
        method: &str,
        args: &[Expr],
        loc: &SourceLocation,
    ) -> Result<String> {
        match method {
            "replace" => {
                let receiver = self.transpile_expression(object, false)?;
                let args_text = self.transpile_arguments(args)?;
                Ok(format!("{receiver}:gsub({args_text})"))
            }
            other => Err(TsluaError::unsupported(
                format!("string method '{other}'"),
                loc,
            )),
        }
    }

    fn transpile_array_call(
        &mut self,
        object: &Expr,
        method: &str,
        args: &[Expr],
        loc: &SourceLocation,
    ) -> Result<String> {
        match method {
            "push" => {
                let receiver = self.transpile_expression(object, false)?;
                let args_text = self.transpile_arguments(args)?;
                Ok(format!("table.insert({receiver}, {args_text})"))
            }
            other => Err(TsluaError::unsupported(
                format!("array method '{other}'"),
                loc,
            )),
        }
    }

    pub(crate) fn transpile_arguments(&mut self, args: &[Expr]) -> Result<String> {
        let parts = args
            .iter()
            .map(|a| self.transpile_expression(a, false))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(", "))
    }

    fn transpile_property_access(
        &mut self,
        object: &Expr,
        name: &str,
        loc: &SourceLocation,
    ) -> Result<String> {
        let receiver_type = self.checker().type_of(object);

        // Strings and arrays expose `length` only, as Lua's length operator
        if receiver_type.is_stringlike() || self.checker().is_array_type(&receiver_type) {
            if name == "length" {
                let receiver = self.transpile_expression(object, false)?;
                return Ok(format!("#{receiver}"));
            }
            return Err(TsluaError::unsupported(
                format!("property '{name}' on a primitive receiver"),
                loc,
            ));
        }

        let receiver = unwrap_assertions(object);
        match &receiver.kind {
            ExprKind::This => Ok(format!("self.{name}")),
            ExprKind::Ident(ident) => {
                // Enum members are emitted as top-level names
                if receiver_type.is_enum_symbol() {
                    Ok(name.to_string())
                } else {
                    Ok(format!("{ident}.{name}"))
                }
            }
            ExprKind::NumberLit(_)
            | ExprKind::StringLit(_)
            | ExprKind::BoolLit(_)
            | ExprKind::ArrayLit(_)
            | ExprKind::Call { .. }
            | ExprKind::PropertyAccess { .. } => {
                let object_text = self.transpile_expression(receiver, false)?;
                Ok(format!("{object_text}.{name}"))
            }
            other => Err(TsluaError::unsupported(
                format!("property access on {}", expr_kind_name(other)),
                loc,
            )),
        }
    }

    fn transpile_element_access(&mut self, object: &Expr, index: &Expr) -> Result<String> {
        let object_type = self.checker().type_of(object);
        let object_text = self.transpile_expression(object, false)?;
        let index_text = self.transpile_expression(index, false)?;

        // Lua arrays are 1-indexed
        if self.checker().is_array_type(&object_type) {
            Ok(format!("{object_text}[{index_text}+1]"))
        } else {
            Ok(format!("{object_text}[{index_text}]"))
        }
    }

    fn transpile_object_literal(&mut self, props: &[ObjectProp]) -> Result<String> {
        let mut parts = Vec::with_capacity(props.len());
        for prop in props {
            match prop {
                ObjectProp::KeyValue { key, value } => {
                    let value_text = self.transpile_expression(value, false)?;
                    match key {
                        PropKey::Ident(name) => parts.push(format!("[\"{name}\"]={value_text}")),
                        PropKey::Computed(expr) => {
                            let key_text = self.transpile_expression(expr, false)?;
                            parts.push(format!("[{key_text}]={value_text}"));
                        }
                    }
                }
                ObjectProp::Shorthand(name) => parts.push(format!("[\"{name}\"]={name}")),
            }
        }
        Ok(format!("{{{}}}", parts.join(",")))
    }
}
