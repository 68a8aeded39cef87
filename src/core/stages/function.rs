//! Named functions, operator names, big operators and style directives

use crate::core::context::StageContext;
use crate::core::pipeline::Stage;
use crate::core::scan::{read_group, rewrite_commands, skip_whitespace};
use crate::data::commands::{BIG_OPERATORS, FUNCTION_NAMES, STYLE_DIRECTIVES};

pub struct FunctionStage;

impl Stage for FunctionStage {
    fn name(&self) -> &'static str {
        "function"
    }

    fn apply(&self, input: &str, _ctx: &mut StageContext<'_>) -> String {
        rewrite_commands(input, |cmd, out| {
            let name = cmd.name;
            if FUNCTION_NAMES.contains(name) {
                out.push_str(name);
                return Some(cmd.end);
            }
            if let Some(glyph) = BIG_OPERATORS.get(name) {
                out.push_str(glyph);
                return Some(cmd.end);
            }
            if STYLE_DIRECTIVES.contains(name) {
                return Some(cmd.end);
            }
            match name {
                "operatorname" => {
                    let mut pos = skip_whitespace(input, cmd.end);
                    if input.as_bytes().get(pos) == Some(&b'*') {
                        pos += 1;
                    }
                    let group = read_group(input, skip_whitespace(input, pos))?;
                    out.push_str(group.inner.trim());
                    Some(group.end)
                }
                "mathrm" => {
                    let group = read_group(input, skip_whitespace(input, cmd.end))?;
                    let inner = group.inner.trim();
                    if !FUNCTION_NAMES.contains(inner) {
                        return None;
                    }
                    out.push_str(inner);
                    Some(group.end)
                }
                _ => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::run_stage;
    use super::*;

    #[test]
    fn test_named_functions() {
        assert_eq!(run_stage(&FunctionStage, r"\sin x + \cos y"), "sin x + cos y");
        assert_eq!(run_stage(&FunctionStage, r"\log(n)"), "log(n)");
        assert_eq!(run_stage(&FunctionStage, r"\limsup_{n}"), "limsup_{n}");
    }

    #[test]
    fn test_function_prefix_is_not_a_function() {
        assert_eq!(run_stage(&FunctionStage, r"\sinx"), r"\sinx");
        assert_eq!(run_stage(&FunctionStage, r"\infty"), r"\infty");
    }

    #[test]
    fn test_mathrm_function() {
        assert_eq!(run_stage(&FunctionStage, r"\mathrm{sin} x"), "sin x");
        assert_eq!(run_stage(&FunctionStage, r"\mathrm{d}x"), r"\mathrm{d}x");
    }

    #[test]
    fn test_operatorname() {
        assert_eq!(run_stage(&FunctionStage, r"\operatorname{rank} A"), "rank A");
        assert_eq!(run_stage(&FunctionStage, r"\operatorname*{argmax}_x"), "argmax_x");
        assert_eq!(run_stage(&FunctionStage, r"\operatorname{rank"), r"\operatorname{rank");
    }

    #[test]
    fn test_big_operators_keep_bounds() {
        assert_eq!(run_stage(&FunctionStage, r"\sum_{i=1}^{n} i"), "∑_{i=1}^{n} i");
        assert_eq!(run_stage(&FunctionStage, r"\int_0^1 f"), "∫_0^1 f");
        assert_eq!(run_stage(&FunctionStage, r"\oint"), "∮");
    }

    #[test]
    fn test_style_directives_removed() {
        assert_eq!(
            run_stage(&FunctionStage, r"\displaystyle\sum\limits_{k}"),
            "∑_{k}"
        );
    }
}
