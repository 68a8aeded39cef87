//! Error handling for mathtext conversions
//!
//! Conversion itself never fails; problems it works around are reported as
//! [`ConversionWarning`]s. [`ConversionError`] covers the edges: invalid
//! options and I/O in the command-line front end.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// Invalid input or options
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

impl ConversionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for fallible operations around conversion
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    /// Name of the stage that raised the warning
    pub stage: &'static str,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ConversionWarning {
    pub fn new(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning [{}]: {}", self.stage, self.message)?;
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ConversionError::invalid("max_fraction_passes must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("Invalid input"));
        assert!(msg.contains("max_fraction_passes"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.tex");
        let err: ConversionError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_warning_display() {
        let warning = ConversionWarning::new("cleanup", "unrecognized command \\foo")
            .with_suggestion("emitted as plain text");
        assert_eq!(
            warning.to_string(),
            "Warning [cleanup]: unrecognized command \\foo (emitted as plain text)"
        );
    }

    #[test]
    fn test_conversion_output() {
        let output = ConversionOutput::with_warnings("hello".to_string(), Vec::new());
        assert!(!output.has_warnings());

        let output_with_warn = ConversionOutput::with_warnings(
            "hello".to_string(),
            vec![ConversionWarning::new("fraction", "test warning")],
        );
        assert!(output_with_warn.has_warnings());
    }
}
