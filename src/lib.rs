//! # mathtext
//!
//! Converts LaTeX-style math markup into linear Unicode text.
//!
//! ## Features
//!
//! - **Total**: every input produces output; unresolvable markup is kept as
//!   literal text and reported as a warning
//! - **Staged**: fractions, roots, scripts, functions, matrices, symbols and
//!   delimiters are rewritten by independent passes in a fixed order
//! - **Unicode scripts**: `x^{2}` → `x²`, `a_{n}` → `aₙ` when every character
//!   has a glyph
//! - **Diagnostics**: a separate checker reports unbalanced input up front
//! - **WASM / Python**: the same converter behind feature-gated bindings
//!
//! ## Usage
//!
//! ```rust
//! use mathtext::{convert, convert_with_options, ConvertOptions};
//!
//! assert_eq!(convert(r"\frac{a}{b}"), "a/b");
//! assert_eq!(convert(r"\sqrt[3]{8}"), "³√(8)");
//! assert_eq!(convert(r"\alpha + \beta"), "α + β");
//!
//! let grid = convert_with_options(
//!     r"\begin{pmatrix}1&2\\3&4\end{pmatrix}",
//!     &ConvertOptions::layout(),
//! );
//! assert_eq!(grid, "(\n1\t2\n3\t4\n)");
//! ```
//!
//! ### Warnings
//!
//! ```rust
//! use mathtext::{convert_with_diagnostics, ConvertOptions};
//!
//! let output = convert_with_diagnostics(r"\foo + 1", &ConvertOptions::default());
//! assert_eq!(output.content, "foo + 1");
//! assert!(output.has_warnings());
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - symbol and command tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::context::{ConvertOptions, StageContext};
pub use crate::core::pipeline::{Pipeline, Stage, StageTrace, STANDARD_PIPELINE};
pub use crate::core::stages;

pub use crate::data::symbols::{SymbolTable, SYMBOL_TABLE};

pub use crate::utils::diagnostics;
pub use crate::utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning,
};

/// Convert math source to math text with default options
pub fn convert(input: &str) -> String {
    convert_with_options(input, &ConvertOptions::default())
}

/// Convert math source to math text with custom options
pub fn convert_with_options(input: &str, options: &ConvertOptions) -> String {
    convert_with_diagnostics(input, options).content
}

/// Convert and keep the warnings raised along the way
pub fn convert_with_diagnostics(input: &str, options: &ConvertOptions) -> ConversionOutput {
    STANDARD_PIPELINE.run(input, options)
}

/// Run the standard pipeline and return every stage's output
pub fn trace(input: &str, options: &ConvertOptions) -> Vec<StageTrace> {
    STANDARD_PIPELINE.trace(input, options)
}
