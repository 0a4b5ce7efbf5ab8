//! Class translation
//!
//! A class becomes a table that doubles as its own constructor function.
//! Emission order is fixed: table init, static fields, constructor, then
//! methods, no matter how the source interleaved the members.

use super::LuaTranspiler;
use crate::ast::utils::has_modifier;
use crate::ast::{ClassDecl, ConstructorDecl, Expr, Modifier};
use crate::error::Result;

impl LuaTranspiler<'_> {
    pub(crate) fn transpile_class(&mut self, class: &ClassDecl) -> Result<String> {
        let mut out = format!("{i}{name} = {name} or {{}}\n", i = self.ind(), name = class.name);

        self.indent += 1;

        for prop in &class.properties {
            if has_modifier(&prop.modifiers, Modifier::Static) {
                if let Some(init) = &prop.init {
                    let init_text = self.transpile_expression(init, false)?;
                    out.push_str(&format!(
                        "{}{}.{} = {}\n",
                        self.ind(),
                        class.name,
                        prop.name,
                        init_text
                    ));
                }
            }
        }

        // Instance fields with initializers are assigned at the top of the
        // constructor
        let instance_fields: Vec<(&str, &Expr)> = class
            .properties
            .iter()
            .filter(|p| !has_modifier(&p.modifiers, Modifier::Static))
            .filter_map(|p| p.init.as_ref().map(|init| (p.name.as_str(), init)))
            .collect();

        match &class.constructor {
            Some(ctor) => {
                out.push_str(&self.transpile_constructor(&class.name, ctor, &instance_fields)?);
            }
            None if !instance_fields.is_empty() => {
                // No declared constructor, but the fields still need their
                // initial values
                let synthesized = ConstructorDecl {
                    params: vec![],
                    body: vec![],
                };
                out.push_str(&self.transpile_constructor(
                    &class.name,
                    &synthesized,
                    &instance_fields,
                )?);
            }
            None => {}
        }

        for method in &class.methods {
            let path = format!("{}:{}", class.name, method.name);
            out.push_str(&self.transpile_function(&path, &method.params, &method.body)?);
        }

        self.indent -= 1;

        Ok(out)
    }

    fn transpile_constructor(
        &mut self,
        class_name: &str,
        ctor: &ConstructorDecl,
        instance_fields: &[(&str, &Expr)],
    ) -> Result<String> {
        let mut out = format!(
            "{i}function {class}:constructor({params})\n",
            i = self.ind(),
            class = class_name,
            params = ctor.params.join(","),
        );

        self.indent += 1;
        for (name, init) in instance_fields {
            let init_text = self.transpile_expression(init, false)?;
            out.push_str(&format!("{}self.{} = {}\n", self.ind(), name, init_text));
        }
        out.push_str(&self.transpile_block(&ctor.body)?);
        self.indent -= 1;

        out.push_str(&format!("{}end\n", self.ind()));
        Ok(out)
    }
}
