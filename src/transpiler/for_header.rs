//! Numeric-for header analysis
//!
//! Lua's numeric `for` runs from start to an inclusive end with a fixed
//! step. These helpers recognize the loop conditions and incrementors that
//! can be expressed that way and reject everything else.

use super::LuaTranspiler;
use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::error::{Result, TsluaError};

impl LuaTranspiler<'_> {
    /// Inclusive loop bound from a comparison condition. `i < n` stops one
    /// short of `n`; `i > n` one past it.
    pub(crate) fn for_end(&mut self, cond: &Expr) -> Result<String> {
        if let ExprKind::Binary { left, op, right } = &cond.kind {
            if matches!(left.kind, ExprKind::Ident(_)) {
                let bound = self.transpile_expression(right, false)?;
                match op {
                    BinaryOp::Lt => return Ok(format!("{bound}-1")),
                    BinaryOp::LtEq => return Ok(bound),
                    BinaryOp::Gt => return Ok(format!("{bound}+1")),
                    BinaryOp::GtEq => return Ok(bound),
                    _ => {}
                }
            }
        }
        Err(TsluaError::translation(
            "for condition must compare the loop variable against a bound",
            &cond.loc,
        ))
    }

    /// Step value from the loop incrementor
    pub(crate) fn for_step(&mut self, incr: &Expr) -> Result<String> {
        match &incr.kind {
            ExprKind::PrefixUnary { op, .. } | ExprKind::PostfixUnary { op, .. } => match op {
                UnaryOp::PlusPlus => Ok("1".to_string()),
                UnaryOp::MinusMinus => Ok("-1".to_string()),
                _ => Err(self.bad_step(incr)),
            },
            ExprKind::Binary { op, right, .. } => match op {
                BinaryOp::PlusAssign => self.transpile_expression(right, false),
                BinaryOp::MinusAssign => {
                    let step = self.transpile_expression(right, false)?;
                    Ok(format!("-{step}"))
                }
                _ => Err(self.bad_step(incr)),
            },
            _ => Err(self.bad_step(incr)),
        }
    }

    fn bad_step(&self, incr: &Expr) -> TsluaError {
        TsluaError::translation(
            "for incrementor must step the loop variable by a constant amount",
            &incr.loc,
        )
    }
}
