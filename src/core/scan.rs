//! Scanning primitives for math source
//!
//! Everything structural in the input (marker, braces, brackets, `^`, `_`,
//! `&`) is ASCII, so the scanner walks bytes and only ever slices at ASCII
//! positions. Continuation bytes of multi-byte characters never compare equal
//! to an ASCII byte, which keeps byte scanning safe on arbitrary UTF-8.

/// The command marker
pub const MARKER: u8 = b'\\';

/// Recursion limit for stages that descend into nested groups
pub const MAX_NESTING: usize = 64;

/// A command token: the marker followed by an ASCII letter run, or by a
/// single non-letter character (`\,`, `\\`, `\{`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    /// Name without the marker
    pub name: &'a str,
    /// Byte offset of the marker
    pub start: usize,
    /// Byte offset just past the name
    pub end: usize,
}

/// A delimited group or a single-token argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    /// Content without the delimiters
    pub inner: &'a str,
    /// Byte offset of the opening delimiter (or of the token)
    pub start: usize,
    /// Byte offset just past the closing delimiter (or the token)
    pub end: usize,
    /// Whether the content was delimited by braces/brackets
    pub delimited: bool,
}

/// Read the command whose marker sits at `pos`.
///
/// Returns `None` if `pos` is not a marker or the marker ends the input.
pub fn read_command(src: &str, pos: usize) -> Option<Command<'_>> {
    let bytes = src.as_bytes();
    if bytes.get(pos) != Some(&MARKER) {
        return None;
    }
    let name_start = pos + 1;
    let mut end = name_start;
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        end += 1;
    }
    if end == name_start {
        let ch = src[name_start..].chars().next()?;
        end = name_start + ch.len_utf8();
    }
    Some(Command {
        name: &src[name_start..end],
        start: pos,
        end,
    })
}

/// Index of the delimiter closing the `open` byte at `pos`.
///
/// Nested pairs are balanced; anything directly after a marker is skipped,
/// so `\{` and `\}` never count.
pub fn find_closing(src: &str, pos: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = src.as_bytes();
    if bytes.get(pos) != Some(&open) {
        return None;
    }
    let mut depth = 0usize;
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if b == MARKER {
            i += 2;
            continue;
        }
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

/// Read the brace group starting exactly at `pos`.
pub fn read_group(src: &str, pos: usize) -> Option<Group<'_>> {
    let close = find_closing(src, pos, b'{', b'}')?;
    Some(Group {
        inner: &src[pos + 1..close],
        start: pos,
        end: close + 1,
        delimited: true,
    })
}

/// Read an optional `[...]` argument, skipping leading whitespace.
pub fn read_optional(src: &str, pos: usize) -> Option<Group<'_>> {
    let pos = skip_whitespace(src, pos);
    let close = find_closing(src, pos, b'[', b']')?;
    Some(Group {
        inner: &src[pos + 1..close],
        start: pos,
        end: close + 1,
        delimited: true,
    })
}

/// Read a mandatory argument after skipping whitespace: a brace group, a
/// command token, or a single character.
pub fn read_argument(src: &str, pos: usize) -> Option<Group<'_>> {
    let pos = skip_whitespace(src, pos);
    match src.as_bytes().get(pos)? {
        b'{' => read_group(src, pos),
        &MARKER => {
            let cmd = read_command(src, pos)?;
            Some(Group {
                inner: &src[cmd.start..cmd.end],
                start: cmd.start,
                end: cmd.end,
                delimited: false,
            })
        }
        b'}' | b'^' | b'_' | b'&' => None,
        _ => {
            let ch = src[pos..].chars().next()?;
            Some(Group {
                inner: &src[pos..pos + ch.len_utf8()],
                start: pos,
                end: pos + ch.len_utf8(),
                delimited: false,
            })
        }
    }
}

/// Advance past ASCII whitespace.
pub fn skip_whitespace(src: &str, pos: usize) -> usize {
    let bytes = src.as_bytes();
    let mut pos = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Iterate over every command token in `src`, left to right.
pub fn commands(src: &str) -> Commands<'_> {
    Commands { src, pos: 0 }
}

/// Iterator returned by [`commands`]
pub struct Commands<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Iterator for Commands<'a> {
    type Item = Command<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() {
            if bytes[self.pos] == MARKER {
                if let Some(cmd) = read_command(self.src, self.pos) {
                    self.pos = cmd.end;
                    return Some(cmd);
                }
            }
            self.pos += 1;
        }
        None
    }
}

/// Does `src` contain any command named in `names`?
pub fn contains_command(src: &str, names: &[&str]) -> bool {
    commands(src).any(|cmd| names.contains(&cmd.name))
}

/// Rebuild `src`, offering every command token to `rewrite`.
///
/// The callback writes its replacement into the output buffer and returns
/// the offset to resume scanning from; returning `None` copies the token
/// unchanged. Text between commands is copied verbatim.
pub fn rewrite_commands<'a, F>(src: &'a str, mut rewrite: F) -> String
where
    F: FnMut(Command<'a>, &mut String) -> Option<usize>,
{
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut pos = 0;
    let mut copied = 0;

    while pos < bytes.len() {
        if bytes[pos] == MARKER {
            if let Some(cmd) = read_command(src, pos) {
                out.push_str(&src[copied..pos]);
                pos = match rewrite(cmd, &mut out) {
                    Some(resume) => resume,
                    None => {
                        out.push_str(&src[cmd.start..cmd.end]);
                        cmd.end
                    }
                };
                copied = pos;
                continue;
            }
        }
        pos += 1;
    }

    out.push_str(&src[copied..]);
    out
}

/// Split `src` on a separator that only counts at brace depth 0 and outside
/// command tokens. `separator` is tested at every byte offset.
pub fn split_top_level<'a, F>(src: &'a str, is_separator: F) -> Vec<&'a str>
where
    F: Fn(&str, usize) -> Option<usize>,
{
    let bytes = src.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if depth == 0 {
            if let Some(len) = is_separator(src, i) {
                parts.push(&src[start..i]);
                i += len;
                start = i;
                continue;
            }
        }
        match bytes[i] {
            MARKER => {
                i = read_command(src, i).map_or(i + 1, |cmd| cmd.end);
                continue;
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }

    parts.push(&src[start..]);
    parts
}

/// Is the expression short and operator-free?
///
/// Simple operands print without parentheses (`a/b`, `√x`).
pub fn is_simple(expr: &str, max_len: usize) -> bool {
    let expr = expr.trim();
    expr.chars().count() <= max_len
        && !expr
            .chars()
            .any(|c| matches!(c, '+' | '-' | '*' | '/' | '^' | '_' | '=' | '<' | '>' | ' '))
}
