//! Matrix and array environments
//!
//! A supported environment becomes a tab/newline grid. Rows are split on the
//! row separator and cells on `&`, both only at brace depth 0, so nested
//! groups and escaped `\&` stay inside their cell.

use crate::core::context::StageContext;
use crate::core::pipeline::Stage;
use crate::core::scan::{
    commands, read_group, read_optional, rewrite_commands, skip_whitespace, split_top_level,
    MARKER,
};

/// Supported environment kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// `matrix`, `smallmatrix`
    Plain,
    /// `pmatrix`
    Paren,
    /// `bmatrix`
    Bracket,
    /// `vmatrix`
    Bar,
    /// `Vmatrix`
    DoubleBar,
    /// `array`
    Array,
}

impl MatrixKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "matrix" | "smallmatrix" => Some(MatrixKind::Plain),
            "pmatrix" => Some(MatrixKind::Paren),
            "bmatrix" => Some(MatrixKind::Bracket),
            "vmatrix" => Some(MatrixKind::Bar),
            "Vmatrix" => Some(MatrixKind::DoubleBar),
            "array" => Some(MatrixKind::Array),
            _ => None,
        }
    }

    /// Opening and closing fence
    pub fn fences(self) -> (&'static str, &'static str) {
        match self {
            MatrixKind::Plain | MatrixKind::Array => ("", ""),
            MatrixKind::Paren => ("(", ")"),
            MatrixKind::Bracket => ("[", "]"),
            MatrixKind::Bar => ("|", "|"),
            MatrixKind::DoubleBar => ("‖", "‖"),
        }
    }

    /// Format a finished grid
    pub fn wrap(self, grid: &str) -> String {
        if self == MatrixKind::Array {
            return grid.to_string();
        }
        let (open, close) = self.fences();
        format!("{}\n{}\n{}", open, grid, close)
    }
}

pub struct MatrixStage;

impl Stage for MatrixStage {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
        let mut text = input.to_string();
        loop {
            text = match rewrite_innermost(&text) {
                Ok(next) => next,
                Err(unterminated) => {
                    for name in unterminated {
                        ctx.warn_with_suggestion(
                            self.name(),
                            format!("environment '{}' left unterminated", name),
                            format!("add \\end{{{}}}", name),
                        );
                    }
                    return text;
                }
            };
        }
    }
}

/// An environment delimiter: `\begin{kind}` or `\end{kind}`
struct Boundary<'a> {
    name: &'a str,
    kind: MatrixKind,
    start: usize,
    end: usize,
}

fn read_boundary<'a>(src: &'a str, start: usize, name_end: usize) -> Option<Boundary<'a>> {
    let group = read_group(src, skip_whitespace(src, name_end))?;
    let name = group.inner.trim();
    Some(Boundary {
        name,
        kind: MatrixKind::from_name(name)?,
        start,
        end: group.end,
    })
}

/// Rewrite the first environment to close. `Err` carries the names of any
/// environments that were opened but never closed once nothing is left.
fn rewrite_innermost(src: &str) -> Result<String, Vec<String>> {
    let mut open: Vec<Boundary<'_>> = Vec::new();

    for cmd in commands(src) {
        if cmd.name != "begin" && cmd.name != "end" {
            continue;
        }
        let Some(boundary) = read_boundary(src, cmd.start, cmd.end) else {
            continue;
        };
        match cmd.name {
            "begin" => open.push(boundary),
            "end" => {
                let Some(idx) = open.iter().rposition(|b| b.name == boundary.name) else {
                    continue;
                };
                let begin = &open[idx];
                let grid = format_grid(environment_body(src, begin, boundary.start));
                let mut out = String::with_capacity(src.len());
                out.push_str(&src[..begin.start]);
                out.push_str(&begin.kind.wrap(&grid));
                out.push_str(&src[boundary.end..]);
                return Ok(out);
            }
            _ => {}
        }
    }

    Err(open.into_iter().map(|b| b.name.to_string()).collect())
}

fn environment_body<'a>(src: &'a str, begin: &Boundary<'_>, end: usize) -> &'a str {
    let mut start = begin.end;
    if begin.kind == MatrixKind::Array {
        if let Some(spec) = read_group(src, skip_whitespace(src, start)) {
            if spec.end <= end {
                start = spec.end;
            }
        }
    }
    &src[start..end]
}

fn is_row_separator(src: &str, i: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    (bytes[i] == MARKER && bytes.get(i + 1) == Some(&MARKER)).then_some(2)
}

fn is_cell_separator(src: &str, i: usize) -> Option<usize> {
    (src.as_bytes()[i] == b'&').then_some(1)
}

/// Split a body into a tab/newline grid
pub fn format_grid(body: &str) -> String {
    let body = rewrite_commands(body, |cmd, _| (cmd.name == "hline").then_some(cmd.end));
    let mut rows = Vec::new();

    for (idx, row) in split_top_level(&body, is_row_separator).into_iter().enumerate() {
        let row = match read_optional(row, 0) {
            Some(spacing) if idx > 0 => &row[spacing.end..],
            _ => row,
        };
        let cells: Vec<&str> = split_top_level(row, is_cell_separator)
            .into_iter()
            .map(str::trim)
            .collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        rows.push(cells.join("\t"));
    }

    rows.join("\n")
}
