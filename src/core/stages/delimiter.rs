//! Delimiter sizing and named delimiters

use crate::core::context::StageContext;
use crate::core::pipeline::Stage;
use crate::core::scan::rewrite_commands;
use crate::data::commands::{DELIMITER_SIZES, NAMED_DELIMITERS};

pub struct DelimiterStage;

impl Stage for DelimiterStage {
    fn name(&self) -> &'static str {
        "delimiter"
    }

    fn apply(&self, input: &str, _ctx: &mut StageContext<'_>) -> String {
        rewrite_commands(input, |cmd, out| {
            if DELIMITER_SIZES.contains(cmd.name) {
                // `\left.` is an invisible delimiter
                if input.as_bytes().get(cmd.end) == Some(&b'.') {
                    return Some(cmd.end + 1);
                }
                return Some(cmd.end);
            }
            let glyph = NAMED_DELIMITERS.get(cmd.name)?;
            out.push_str(glyph);
            Some(cmd.end)
        })
    }
}
