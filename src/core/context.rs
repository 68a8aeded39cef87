//! Conversion options and the per-call stage context

use crate::data::symbols::{SymbolTable, SYMBOL_TABLE};
use crate::utils::error::{ConversionError, ConversionResult, ConversionWarning};

// =============================================================================
// Conversion Options
// =============================================================================

/// Options for math-source → math-text conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Upper bound on fraction rewrite passes; each pass resolves one level
    /// of nesting.
    /// Default: 16
    pub max_fraction_passes: usize,

    /// Longest operand (in characters) still printed without parentheses
    /// Default: 3
    pub simple_operand_len: usize,

    /// Collapse scripts into Unicode super/subscript glyphs when possible
    /// Default: true
    pub unicode_scripts: bool,

    /// Keep newlines and tabs (matrix grids, line breaks) in the final text
    /// Default: false
    pub preserve_layout: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_fraction_passes: 16,
            simple_operand_len: 3,
            unicode_scripts: true,
            preserve_layout: false,
        }
    }
}

impl ConvertOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the two-dimensional layout of matrices and line breaks
    pub fn layout() -> Self {
        Self {
            preserve_layout: true,
            ..Self::default()
        }
    }

    /// Plain ASCII `^`/`_` notation for every script
    pub fn ascii() -> Self {
        Self {
            unicode_scripts: false,
            ..Self::default()
        }
    }

    /// Set the fraction pass limit; zero would disable the stage entirely
    pub fn with_max_fraction_passes(mut self, passes: usize) -> ConversionResult<Self> {
        if passes == 0 {
            return Err(ConversionError::invalid(
                "max_fraction_passes must be at least 1",
            ));
        }
        self.max_fraction_passes = passes;
        Ok(self)
    }
}

// =============================================================================
// Stage Context
// =============================================================================

/// State shared by the stages of one conversion call
#[derive(Debug)]
pub struct StageContext<'a> {
    pub options: &'a ConvertOptions,
    pub symbols: &'a SymbolTable,
    pub warnings: Vec<ConversionWarning>,
}

impl<'a> StageContext<'a> {
    /// Context backed by the process-wide symbol table
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self::with_symbols(options, &SYMBOL_TABLE)
    }

    pub fn with_symbols(options: &'a ConvertOptions, symbols: &'a SymbolTable) -> Self {
        Self {
            options,
            symbols,
            warnings: Vec::new(),
        }
    }

    /// Record a non-fatal issue
    pub fn warn(&mut self, stage: &'static str, message: impl Into<String>) {
        self.warnings.push(ConversionWarning::new(stage, message));
    }

    /// Record a non-fatal issue with a hint for the author
    pub fn warn_with_suggestion(
        &mut self,
        stage: &'static str,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.warnings
            .push(ConversionWarning::new(stage, message).with_suggestion(suggestion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.max_fraction_passes, 16);
        assert_eq!(opts.simple_operand_len, 3);
        assert!(opts.unicode_scripts);
        assert!(!opts.preserve_layout);
    }

    #[test]
    fn test_presets() {
        assert!(ConvertOptions::layout().preserve_layout);
        assert!(!ConvertOptions::ascii().unicode_scripts);
    }

    #[test]
    fn test_with_max_fraction_passes() {
        let opts = ConvertOptions::new().with_max_fraction_passes(4).unwrap();
        assert_eq!(opts.max_fraction_passes, 4);
        assert!(ConvertOptions::new().with_max_fraction_passes(0).is_err());
    }

    #[test]
    fn test_context_collects_warnings() {
        let opts = ConvertOptions::default();
        let mut ctx = StageContext::new(&opts);
        ctx.warn("fraction", "unterminated");
        ctx.warn_with_suggestion("cleanup", "unknown command", "define it");
        assert_eq!(ctx.warnings.len(), 2);
        assert_eq!(ctx.warnings[0].stage, "fraction");
        assert_eq!(ctx.warnings[1].suggestion.as_deref(), Some("define it"));
    }
}
