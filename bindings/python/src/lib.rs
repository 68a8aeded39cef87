//! Python bindings for mathtext

use mathtext::diagnostics::{check_math, format_diagnostics};
use mathtext::ConvertOptions;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Convert math source to math text.
#[pyfunction]
#[pyo3(signature = (source, preserve_layout = false, ascii = false, max_fraction_passes = 16))]
fn convert(
    source: &str,
    preserve_layout: bool,
    ascii: bool,
    max_fraction_passes: usize,
) -> PyResult<String> {
    let mut options = ConvertOptions::new()
        .with_max_fraction_passes(max_fraction_passes)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    options.preserve_layout = preserve_layout;
    options.unicode_scripts = !ascii;
    Ok(mathtext::convert_with_options(source, &options))
}

/// Convert and return `(text, warnings)`.
#[pyfunction]
fn convert_with_warnings(source: &str) -> (String, Vec<String>) {
    let output = mathtext::convert_with_diagnostics(source, &ConvertOptions::default());
    let warnings = output.warnings.iter().map(|w| w.to_string()).collect();
    (output.content, warnings)
}

/// Check math source and return a formatted report.
#[pyfunction]
fn check(source: &str) -> String {
    format_diagnostics(&check_math(source), false)
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(convert_with_warnings, m)?)?;
    m.add_function(wrap_pyfunction!(check, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
