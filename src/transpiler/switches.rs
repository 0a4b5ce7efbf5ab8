//! Switch lowering
//!
//! Lua has no switch. A C-style switch with fall-through becomes a chain of
//! `if`/`elseif`/`else` over equality tests, with one label per clause and
//! explicit jumps: the end of every non-last clause jumps to the next
//! clause's label, and `break` inside a clause jumps to the terminal label
//! after the chain.

use super::LuaTranspiler;
use crate::ast::{Expr, SwitchClause};
use crate::error::Result;

impl LuaTranspiler<'_> {
    pub(crate) fn transpile_switch(
        &mut self,
        scrutinee: &Expr,
        clauses: &[SwitchClause],
    ) -> Result<String> {
        if clauses.is_empty() {
            return Ok(String::new());
        }

        let base = self.switch_counter;
        // Claim this switch's label range up front so any switch nested in a
        // clause body draws fresh numbers
        self.switch_counter += clauses.len();

        let scrutinee_text = self.transpile_expression(scrutinee, true)?;
        let mut out = String::new();

        for (index, clause) in clauses.iter().enumerate() {
            match &clause.test {
                Some(test) => {
                    let keyword = if index == 0 { "if" } else { "elseif" };
                    let test_text = self.transpile_expression(test, true)?;
                    out.push_str(&format!(
                        "{}{} {}=={} then\n",
                        self.ind(),
                        keyword,
                        scrutinee_text,
                        test_text
                    ));
                }
                None => out.push_str(&format!("{}else\n", self.ind())),
            }

            self.indent += 1;
            out.push_str(&format!("{}::switchCase{}::\n", self.ind(), base + index));

            let previous = self.active_switch.replace(base);
            let body: Result<String> = clause
                .statements
                .iter()
                .map(|stmt| self.transpile_node(stmt))
                .collect();
            self.active_switch = previous;
            out.push_str(&body?);

            if index < clauses.len() - 1 {
                // Fall through unless the clause jumped away
                out.push_str(&format!(
                    "{}goto switchCase{}\n",
                    self.ind(),
                    base + index + 1
                ));
            }
            self.indent -= 1;
        }

        out.push_str(&format!(
            "{i}end\n{i}::switchDone{base}::\n",
            i = self.ind(),
            base = base
        ));
        Ok(out)
    }
}
