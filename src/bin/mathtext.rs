//! mathtext CLI - convert LaTeX math markup into linear Unicode text

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use mathtext::{
    convert_with_diagnostics,
    diagnostics::{check_math, format_diagnostics},
    trace, ConversionResult, ConversionWarning, ConvertOptions, STANDARD_PIPELINE,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mathtext")]
#[command(version)]
#[command(about = "Convert LaTeX math markup into linear Unicode text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Treat every input line as a separate formula
    #[arg(short, long)]
    lines: bool,

    /// Keep matrix grids and line breaks
    #[arg(long)]
    layout: bool,

    /// Keep scripts in ASCII `^`/`_` notation
    #[arg(long)]
    ascii: bool,

    /// Maximum number of fraction rewrite passes
    #[arg(long, default_value_t = 16)]
    max_passes: usize,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored warnings
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check math source for potential conversion issues
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the output of every pipeline stage
    Trace {
        /// Input file to trace
        input: Option<String>,

        /// Keep matrix grids and line breaks
        #[arg(long)]
        layout: bool,
    },

    /// Show version and pipeline info
    Info,
}

/// A warning and the input line it came from (in `--lines` mode)
#[cfg(feature = "cli")]
struct LineWarning {
    line: Option<usize>,
    warning: ConversionWarning,
}

#[cfg(feature = "cli")]
fn main() -> ConversionResult<()> {
    let cli = Cli::parse();

    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = read_input(cli.input_file.as_deref())?;

    let mut options = ConvertOptions::new().with_max_fraction_passes(cli.max_passes)?;
    options.preserve_layout = cli.layout;
    options.unicode_scripts = !cli.ascii;

    let mut warnings = Vec::new();
    let result = if cli.lines {
        let mut converted = Vec::new();
        for (idx, line) in input.lines().enumerate() {
            let output = convert_with_diagnostics(line, &options);
            warnings.extend(output.warnings.into_iter().map(|warning| LineWarning {
                line: Some(idx + 1),
                warning,
            }));
            converted.push(output.content);
        }
        converted.join("\n")
    } else {
        let output = convert_with_diagnostics(input.trim_end(), &options);
        warnings.extend(
            output
                .warnings
                .into_iter()
                .map(|warning| LineWarning { line: None, warning }),
        );
        output.content
    };

    if !cli.quiet && !warnings.is_empty() {
        print_warnings_to_stderr(&warnings, !cli.no_color);
    }

    if cli.strict && !warnings.is_empty() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            warnings.len()
        );
        std::process::exit(1);
    }

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            if warnings.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    warnings.len()
                );
            }
        }
        None => println!("{}", result),
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> ConversionResult<()> {
    match cmd {
        Commands::Check { input, no_color } => {
            let content = read_input(input.as_deref())?;
            let result = check_math(&content);
            println!("{}", format_diagnostics(&result, !no_color));

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Trace { input, layout } => {
            let content = read_input(input.as_deref())?;
            let options = if layout {
                ConvertOptions::layout()
            } else {
                ConvertOptions::default()
            };
            println!("{:<10} {:?}", "input", content.trim_end());
            for step in trace(content.trim_end(), &options) {
                println!("{:<10} {:?}", step.stage, step.output);
            }
        }

        Commands::Info => {
            println!("mathtext - LaTeX math to linear Unicode text");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Pipeline:");
            println!("  {}", STANDARD_PIPELINE.stage_names().join(" → "));
            println!();
            println!("Symbols: {}", mathtext::SYMBOL_TABLE.len());
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> ConversionResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[LineWarning], use_color: bool) {
    let (color, reset) = if use_color {
        ("\x1b[33m", "\x1b[0m")
    } else {
        ("", "")
    };

    eprintln!();
    eprintln!("{}Conversion Warnings ({}):{}", color, warnings.len(), reset);
    eprintln!();

    for LineWarning { line, warning } in warnings {
        let location = line.map(|n| format!("line {}: ", n)).unwrap_or_default();
        eprintln!(
            "  {}[{}]{} {}{}",
            color, warning.stage, reset, location, warning.message
        );
        if let Some(ref suggestion) = warning.suggestion {
            eprintln!("      = help: {}", suggestion);
        }
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathtext --features cli");
    eprintln!("  mathtext [OPTIONS] [INPUT_FILE]");
}
