//! Pre-conversion checks for math source
//!
//! Conversion itself never fails, so problems in the input show up only as
//! odd output. [`check_math`] reports them up front:
//!
//! - unbalanced braces
//! - unbalanced or mismatched environments
//! - environments that pass through unconverted (as notes)
//! - fractions and roots missing an argument
//! - dangling script markers
//! - commands no stage understands
//!
//! ## Example
//!
//! ```rust
//! use mathtext::diagnostics::{check_math, DiagnosticLevel};
//!
//! let result = check_math(r"\frac{1}{2");
//! assert!(result.has_errors());
//! assert_eq!(result.diagnostics[0].level, DiagnosticLevel::Error);
//! ```

use fxhash::FxHashSet;
use std::fmt;

use crate::core::scan::{
    commands, read_argument, read_group, read_optional, skip_whitespace, MARKER,
};
use crate::core::stages::matrix::MatrixKind;
use crate::data::commands::{is_known_command, FRACTION_COMMANDS};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Output will be degraded but still produced
    Warning,
    /// Part of the input will come out as literal markup
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed, in characters)
    pub column: Option<usize>,
    /// Offending source text
    pub source_text: Option<String>,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "\n  --> line {}:{}", line, col)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// All diagnostics for one input, with per-level counts
#[derive(Debug, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// One-line summary such as `1 error, 2 warnings`
    pub fn summary(&self) -> String {
        let counts = [
            (self.errors, "error"),
            (self.warnings, "warning"),
            (self.infos, "note"),
        ];
        let parts: Vec<String> = counts
            .iter()
            .filter(|(n, _)| *n > 0)
            .map(|(n, word)| format!("{} {}{}", n, word, if *n == 1 { "" } else { "s" }))
            .collect();
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check math source for problems that degrade conversion
pub fn check_math(input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    let lines = LineIndex::new(input);

    check_brace_balance(input, &lines, &mut result);
    check_environment_balance(input, &lines, &mut result);
    check_arguments(input, &lines, &mut result);
    check_scripts(input, &lines, &mut result);
    check_unknown_commands(input, &lines, &mut result);

    result
}

/// Byte offsets of line starts
struct LineIndex<'a> {
    src: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(src: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(src.match_indices('\n').map(|(i, _)| i + 1));
        Self { src, starts }
    }

    /// 1-indexed line and character column of a byte offset
    fn locate(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset) - 1;
        let column = self.src[self.starts[line]..offset].chars().count() + 1;
        (line + 1, column)
    }
}

fn check_brace_balance(input: &str, lines: &LineIndex<'_>, result: &mut CheckResult) {
    let bytes = input.as_bytes();
    let mut open = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            // escaped braces are literal
            MARKER => i += 1,
            b'{' => open.push(i),
            b'}' => {
                if open.pop().is_none() {
                    let (line, col) = lines.locate(i);
                    result.add(
                        Diagnostic::new(DiagnosticLevel::Error, "unmatched closing brace '}'")
                            .with_location(line, col)
                            .with_suggestion("remove it or add the missing '{'"),
                    );
                }
            }
            _ => {}
        }
        i += 1;
    }

    if let Some(&first) = open.first() {
        let (line, col) = lines.locate(first);
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                format!(
                    "{} unclosed brace{}",
                    open.len(),
                    if open.len() == 1 { "" } else { "s" }
                ),
            )
            .with_location(line, col)
            .with_suggestion("add the missing '}'"),
        );
    }
}

fn check_environment_balance(input: &str, lines: &LineIndex<'_>, result: &mut CheckResult) {
    let mut stack: Vec<(&str, usize)> = Vec::new();

    for cmd in commands(input) {
        if cmd.name != "begin" && cmd.name != "end" {
            continue;
        }
        let Some(group) = read_group(input, skip_whitespace(input, cmd.end)) else {
            continue;
        };
        let name = group.inner.trim();
        let (line, col) = lines.locate(cmd.start);

        if cmd.name == "begin" {
            if MatrixKind::from_name(name).is_none() {
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Info,
                        format!("environment '{}' is not converted", name),
                    )
                    .with_location(line, col)
                    .with_suggestion("its content will be kept as plain text"),
                );
            }
            stack.push((name, line));
            continue;
        }
        match stack.pop() {
            Some((open, _)) if open == name => {}
            Some((open, open_line)) => result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!(
                        "mismatched environment: '{}' opened at line {} but '{}' closed",
                        open, open_line, name
                    ),
                )
                .with_location(line, col)
                .with_source(&input[cmd.start..group.end])
                .with_suggestion(format!("use \\end{{{}}}", open)),
            ),
            None => result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!("unmatched \\end{{{}}}", name),
                )
                .with_location(line, col)
                .with_suggestion(format!("add \\begin{{{}}}", name)),
            ),
        }
    }

    for (name, line) in stack {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                format!("unclosed environment '{}' (opened at line {})", name, line),
            )
            .with_suggestion(format!("add \\end{{{}}}", name)),
        );
    }
}

/// Fractions need two arguments, roots one
fn check_arguments(input: &str, lines: &LineIndex<'_>, result: &mut CheckResult) {
    for cmd in commands(input) {
        let (expected, found) = if FRACTION_COMMANDS.contains(&cmd.name) {
            let found = match read_argument(input, cmd.end) {
                Some(num) if read_argument(input, num.end).is_some() => 2,
                Some(_) => 1,
                None => 0,
            };
            (2, found)
        } else if cmd.name == "sqrt" {
            let start = read_optional(input, cmd.end).map_or(cmd.end, |g| g.end);
            (1, usize::from(read_argument(input, start).is_some()))
        } else {
            continue;
        };

        if found < expected {
            let (line, col) = lines.locate(cmd.start);
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!(
                        "\\{} expects {} argument{}, found {}",
                        cmd.name,
                        expected,
                        if expected == 1 { "" } else { "s" },
                        found
                    ),
                )
                .with_location(line, col)
                .with_source(format!("\\{}", cmd.name))
                .with_suggestion("it will be kept as literal text"),
            );
        }
    }
}

fn check_scripts(input: &str, lines: &LineIndex<'_>, result: &mut CheckResult) {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            MARKER => {
                i += 2;
                continue;
            }
            b @ (b'^' | b'_') => {
                let next = skip_whitespace(input, i + 1);
                if matches!(bytes.get(next), None | Some(b'}') | Some(b'^') | Some(b'_')) {
                    let (line, col) = lines.locate(i);
                    result.add(
                        Diagnostic::new(
                            DiagnosticLevel::Warning,
                            format!("'{}' has nothing to attach", b as char),
                        )
                        .with_location(line, col),
                    );
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn check_unknown_commands(input: &str, lines: &LineIndex<'_>, result: &mut CheckResult) {
    let mut seen = FxHashSet::default();
    for cmd in commands(input) {
        if is_known_command(cmd.name) || !seen.insert(cmd.name) {
            continue;
        }
        let (line, col) = lines.locate(cmd.start);
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                format!("unknown command '\\{}'", cmd.name),
            )
            .with_location(line, col)
            .with_suggestion(format!("it will appear as plain '{}'", cmd.name)),
        );
    }
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    const RESET: &str = "\x1b[0m";
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",
                DiagnosticLevel::Warning => "\x1b[33m",
                DiagnosticLevel::Info => "\x1b[34m",
            };
            output.push_str(&format!("{}{}{}\n\n", color, diag, RESET));
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    let summary = format!("Summary: {}", result.summary());
    if use_color {
        let color = if result.has_errors() {
            "\x1b[31m"
        } else if result.warnings > 0 {
            "\x1b[33m"
        } else {
            "\x1b[32m"
        };
        output.push_str(&format!("{}{}{}", color, summary, RESET));
    } else {
        output.push_str(&summary);
    }

    output
}
