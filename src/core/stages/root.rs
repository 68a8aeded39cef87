//! Roots: `\sqrt{x}` → `√x` / `√(x)`, `\sqrt[n]{x}` → `ⁿ√(x)`

use crate::core::context::{ConvertOptions, StageContext};
use crate::core::pipeline::Stage;
use crate::core::scan::{
    contains_command, is_simple, read_argument, read_optional, rewrite_commands, MAX_NESTING,
};
use crate::data::scripts::superscript_lossy;

pub struct RootStage;

impl Stage for RootStage {
    fn name(&self) -> &'static str {
        "root"
    }

    fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
        let out = rewrite_roots(input, ctx.options, 0);
        if contains_command(&out, &["sqrt"]) {
            ctx.warn(self.name(), "root left unresolved");
        }
        out
    }
}

fn rewrite_roots(src: &str, options: &ConvertOptions, depth: usize) -> String {
    if depth >= MAX_NESTING {
        return src.to_string();
    }
    rewrite_commands(src, |cmd, out| {
        if cmd.name != "sqrt" {
            return None;
        }
        let index = read_optional(src, cmd.end);
        let radicand = read_argument(src, index.map_or(cmd.end, |g| g.end))?;
        let body = rewrite_roots(radicand.inner.trim(), options, depth + 1);

        match index {
            Some(index) => {
                let index = index.inner.trim();
                if options.unicode_scripts {
                    out.push_str(&superscript_lossy(index));
                } else {
                    out.push_str(index);
                }
                out.push_str("√(");
                out.push_str(&body);
                out.push(')');
            }
            None if is_simple(&body, options.simple_operand_len) => {
                out.push('√');
                out.push_str(&body);
            }
            None => {
                out.push_str("√(");
                out.push_str(&body);
                out.push(')');
            }
        }
        Some(radicand.end)
    })
}
