//! Terminal cleanup
//!
//! Runs last and removes every remaining piece of markup:
//!
//! 1. font and text wrappers are unwrapped to their content
//! 2. length spacing becomes a space, size switches vanish, escaped braces
//!    become ❴ ❵
//! 3. matched brace pairs are dropped, except script groups (`^{..}`, `_{..}`)
//! 4. remaining commands are reported and lose their marker
//! 5. whitespace is collapsed
//!
//! The output contains no marker and only protected brace pairs, so running
//! cleanup again is a no-op.

use fxhash::FxHashSet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::core::context::StageContext;
use crate::core::pipeline::Stage;
use crate::core::scan::{
    read_command, read_group, rewrite_commands, skip_whitespace, MARKER, MAX_NESTING,
};
use crate::data::commands::{
    is_font_wrapper, FONT_SIZES, LENGTH_SPACING, LEFT_BRACE_GLYPH, RIGHT_BRACE_GLYPH,
};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref INLINE_WHITESPACE: Regex = Regex::new(r"[^\S\t\n]+").unwrap();
}

pub struct CleanupStage;

impl Stage for CleanupStage {
    fn name(&self) -> &'static str {
        "cleanup"
    }

    fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
        let text = unwrap_wrappers(input, 0);
        let text = rewrite_directives(&text);
        let text = strip_braces(&text);
        let text = strip_markers(&text, ctx);
        collapse_whitespace(&text, ctx.options.preserve_layout)
    }
}

fn unwrap_wrappers(src: &str, depth: usize) -> String {
    if depth >= MAX_NESTING {
        return src.to_string();
    }
    rewrite_commands(src, |cmd, out| {
        if !is_font_wrapper(cmd.name) {
            return None;
        }
        match read_group(src, skip_whitespace(src, cmd.end)) {
            Some(group) => {
                out.push_str(&unwrap_wrappers(group.inner, depth + 1));
                Some(group.end)
            }
            // a bare switch such as `\mathbf x`
            None => Some(cmd.end),
        }
    })
}

fn rewrite_directives(src: &str) -> String {
    rewrite_commands(src, |cmd, out| match cmd.name {
        name if LENGTH_SPACING.contains(name) => {
            let mut pos = skip_whitespace(src, cmd.end);
            if src.as_bytes().get(pos) == Some(&b'*') {
                pos += 1;
            }
            let group = read_group(src, skip_whitespace(src, pos))?;
            out.push(' ');
            Some(group.end)
        }
        name if FONT_SIZES.contains(name) => Some(cmd.end),
        "{" => {
            out.push_str(LEFT_BRACE_GLYPH);
            Some(cmd.end)
        }
        "}" => {
            out.push_str(RIGHT_BRACE_GLYPH);
            Some(cmd.end)
        }
        _ => None,
    })
}

/// Positions of braces that have a partner
fn matched_braces(src: &str) -> FxHashSet<usize> {
    let bytes = src.as_bytes();
    let mut matched = FxHashSet::default();
    let mut open = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            MARKER => {
                i = read_command(src, i).map_or(i + 1, |cmd| cmd.end);
                continue;
            }
            b'{' => open.push(i),
            b'}' => {
                if let Some(start) = open.pop() {
                    matched.insert(start);
                    matched.insert(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    matched
}

fn strip_braces(src: &str) -> String {
    let bytes = src.as_bytes();
    let matched = matched_braces(src);
    let mut out = String::with_capacity(src.len());
    // (protected, argument of a word command) for each open group
    let mut groups: Vec<(bool, bool)> = Vec::new();
    // position where an argument group would need a separating space
    let mut argument_at = None;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            MARKER => {
                let end = read_command(src, i).map_or(i + 1, |cmd| cmd.end);
                if end > i + 1 && bytes[i + 1..end].iter().all(u8::is_ascii_alphabetic) {
                    argument_at = Some(end);
                }
                i = end;
                continue;
            }
            b'{' if matched.contains(&i) => {
                let protected = groups.last().map_or(false, |&(p, _)| p)
                    || (i > 0 && matches!(bytes[i - 1], b'^' | b'_'));
                let argument = !protected && argument_at == Some(i);
                groups.push((protected, argument));
                if !protected {
                    out.push_str(&src[copied..i]);
                    if argument {
                        out.push(' ');
                    }
                    copied = i + 1;
                }
            }
            b'}' if matched.contains(&i) => {
                let (protected, argument) = groups.pop().unwrap_or((false, false));
                if !protected {
                    out.push_str(&src[copied..i]);
                    copied = i + 1;
                }
                if argument {
                    // `\binom{n}{k}` keeps its arguments apart
                    argument_at = Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }

    out.push_str(&src[copied..]);
    out
}

fn strip_markers(src: &str, ctx: &mut StageContext<'_>) -> String {
    let mut reported = FxHashSet::default();
    let mut warnings = Vec::new();

    let out = rewrite_commands(src, |cmd, out| {
        if cmd.name == "\\" {
            out.push('\n');
        } else {
            out.push_str(cmd.name);
        }
        if cmd.name.starts_with(|c: char| c.is_ascii_alphabetic()) && reported.insert(cmd.name) {
            warnings.push(cmd.name.to_string());
        }
        Some(cmd.end)
    });

    for name in warnings {
        ctx.warn_with_suggestion(
            "cleanup",
            format!("unrecognized command \\{} kept as plain text", name),
            "check the spelling or remove the command",
        );
    }
    // a trailing lone marker is not a command token
    out.replace(MARKER as char, "")
}

fn collapse_whitespace(src: &str, preserve_layout: bool) -> String {
    if !preserve_layout {
        return WHITESPACE.replace_all(src, " ").trim().to_string();
    }
    let collapsed = INLINE_WHITESPACE.replace_all(src, " ");
    collapsed
        .split('\n')
        .map(|line| line.trim_matches(' '))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
