//! Superscripts and subscripts
//!
//! `x^{2}` → `x²`, `x_1` → `x₁`. A payload collapses into glyphs only if
//! every character has one; otherwise the ASCII notation is kept as written.

use crate::core::context::StageContext;
use crate::core::pipeline::Stage;
use crate::core::scan::{read_command, read_group, MARKER, MAX_NESTING};
use crate::data::scripts::{map_all, SUBSCRIPTS, SUPERSCRIPTS};

pub struct ScriptStage;

impl Stage for ScriptStage {
    fn name(&self) -> &'static str {
        "script"
    }

    fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
        if !ctx.options.unicode_scripts {
            return input.to_string();
        }
        rewrite_scripts(input, 0)
    }
}

/// A script payload following `^` or `_`
struct Payload<'a> {
    inner: &'a str,
    braced: bool,
    end: usize,
}

fn read_payload(src: &str, pos: usize) -> Option<Payload<'_>> {
    match src.as_bytes().get(pos)? {
        b'{' => read_group(src, pos).map(|g| Payload {
            inner: g.inner,
            braced: true,
            end: g.end,
        }),
        &MARKER | b'}' | b'^' | b'_' => None,
        b if b.is_ascii_whitespace() => None,
        _ => {
            let ch = src[pos..].chars().next()?;
            Some(Payload {
                inner: &src[pos..pos + ch.len_utf8()],
                braced: false,
                end: pos + ch.len_utf8(),
            })
        }
    }
}

fn rewrite_scripts(src: &str, depth: usize) -> String {
    if depth >= MAX_NESTING {
        return src.to_string();
    }
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut pos = 0;
    let mut copied = 0;

    while pos < bytes.len() {
        let (marker, table) = match bytes[pos] {
            MARKER => {
                pos = read_command(src, pos).map_or(pos + 1, |cmd| cmd.end);
                continue;
            }
            b'^' => ('^', &SUPERSCRIPTS),
            b'_' => ('_', &SUBSCRIPTS),
            _ => {
                pos += 1;
                continue;
            }
        };
        let Some(payload) = read_payload(src, pos + 1) else {
            pos += 1;
            continue;
        };

        out.push_str(&src[copied..pos]);
        match map_all(payload.inner.trim(), table) {
            Some(glyphs) => out.push_str(&glyphs),
            None if payload.braced => {
                out.push(marker);
                out.push('{');
                out.push_str(&rewrite_scripts(payload.inner, depth + 1));
                out.push('}');
            }
            None => {
                out.push(marker);
                out.push_str(payload.inner);
            }
        }
        pos = payload.end;
        copied = pos;
    }

    out.push_str(&src[copied..]);
    out
}
