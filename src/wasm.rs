//! WASM bindings for mathtext
//!
//! JavaScript-accessible conversion and checking.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::core::ConvertOptions;
use crate::diagnostics::DiagnosticLevel;

/// Conversion options as passed from JavaScript
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmConvertOptions {
    #[serde(default = "default_passes")]
    pub max_fraction_passes: usize,
    #[serde(default = "default_operand_len")]
    pub simple_operand_len: usize,
    #[serde(default = "default_true")]
    pub unicode_scripts: bool,
    #[serde(default)]
    pub preserve_layout: bool,
}

impl Default for WasmConvertOptions {
    fn default() -> Self {
        let defaults = ConvertOptions::default();
        Self {
            max_fraction_passes: defaults.max_fraction_passes,
            simple_operand_len: defaults.simple_operand_len,
            unicode_scripts: defaults.unicode_scripts,
            preserve_layout: defaults.preserve_layout,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_passes() -> usize {
    ConvertOptions::default().max_fraction_passes
}

fn default_operand_len() -> usize {
    ConvertOptions::default().simple_operand_len
}

/// Conversion result with warnings
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    pub output: String,
    pub success: bool,
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

/// Summary of check results
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub has_errors: bool,
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert math source to text with default options
#[wasm_bindgen(js_name = "convert")]
pub fn convert_wasm(input: &str) -> String {
    crate::convert(input)
}

/// Convert with options; invalid options are reported in `error`
#[wasm_bindgen(js_name = "convertWithOptions")]
pub fn convert_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: WasmConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match ConvertOptions::new().with_max_fraction_passes(opts.max_fraction_passes) {
        Ok(base) => {
            let options = ConvertOptions {
                simple_operand_len: opts.simple_operand_len,
                unicode_scripts: opts.unicode_scripts,
                preserve_layout: opts.preserve_layout,
                ..base
            };
            let output = crate::convert_with_diagnostics(input, &options);
            ConvertResult {
                warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
                output: output.content,
                success: true,
                error: None,
            }
        }
        Err(e) => ConvertResult {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
            warnings: vec![],
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Check math source for potential issues
#[wasm_bindgen(js_name = "checkMath")]
pub fn check_math_wasm(input: &str) -> JsValue {
    let result = crate::diagnostics::check_math(input);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        match d.level {
            DiagnosticLevel::Error => errors.push(d.message.clone()),
            DiagnosticLevel::Warning => warnings.push(d.message.clone()),
            DiagnosticLevel::Info => infos.push(d.message.clone()),
        }
    }

    let summary = CheckSummary {
        errors,
        warnings,
        infos,
        has_errors: result.has_errors(),
    };
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

/// Get version information
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
