//! Utility modules
//!
//! - Error, warning and output types
//! - Pre-conversion diagnostics

pub mod diagnostics;
pub mod error;

pub use diagnostics::{check_math, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel};
pub use error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};
