//! Fractions: `\frac{num}{den}` → `num/den` or `(num)/(den)`
//!
//! Each pass rewrites only innermost fractions (operands free of further
//! fraction commands); passes repeat until nothing changes or the configured
//! limit is reached. A nesting depth beyond the limit, or an unterminated
//! construct, is left as literal text.

use crate::core::context::{ConvertOptions, StageContext};
use crate::core::pipeline::Stage;
use crate::core::scan::{contains_command, is_simple, read_argument, rewrite_commands};
use crate::data::commands::FRACTION_COMMANDS;

pub struct FractionStage;

impl Stage for FractionStage {
    fn name(&self) -> &'static str {
        "fraction"
    }

    fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
        let mut text = input.to_string();

        for _ in 0..ctx.options.max_fraction_passes {
            if !contains_command(&text, FRACTION_COMMANDS) {
                return text;
            }
            let next = rewrite_innermost(&text, ctx.options);
            if next == text {
                break;
            }
            text = next;
        }

        if contains_command(&text, FRACTION_COMMANDS) {
            ctx.warn_with_suggestion(
                self.name(),
                "fraction left unresolved",
                "check for a missing brace or nesting deeper than max_fraction_passes",
            );
        }
        text
    }
}

fn rewrite_innermost(src: &str, options: &ConvertOptions) -> String {
    rewrite_commands(src, |cmd, out| {
        if !FRACTION_COMMANDS.contains(&cmd.name) {
            return None;
        }
        let num = read_argument(src, cmd.end)?;
        let den = read_argument(src, num.end)?;
        if contains_command(num.inner, FRACTION_COMMANDS)
            || contains_command(den.inner, FRACTION_COMMANDS)
        {
            return None;
        }
        out.push_str(&format_fraction(num.inner.trim(), den.inner.trim(), options));
        Some(den.end)
    })
}

fn format_fraction(num: &str, den: &str, options: &ConvertOptions) -> String {
    let limit = options.simple_operand_len;
    if is_simple(num, limit) && is_simple(den, limit) {
        format!("{}/{}", num, den)
    } else {
        format!("({})/({})", num, den)
    }
}
