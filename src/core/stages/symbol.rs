//! Symbol substitution and spacing directives

use crate::core::context::StageContext;
use crate::core::pipeline::Stage;
use crate::core::scan::rewrite_commands;
use crate::data::commands::SPACING;

pub struct SymbolStage;

impl Stage for SymbolStage {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
        let symbols = ctx.symbols;
        rewrite_commands(input, |cmd, out| {
            if let Some(space) = SPACING.get(cmd.name) {
                out.push_str(space);
                return Some(cmd.end);
            }
            if cmd.name == "\\" {
                out.push('\n');
                return Some(cmd.end);
            }
            let (command, glyph) = symbols.longest_match(&input[cmd.start..])?;
            out.push_str(glyph);
            Some(cmd.start + command.len())
        })
    }
}
