//! Data layer - Static mappings and constants
//!
//! This module contains all static data used by the conversion stages:
//! - Symbol mappings merged into the shared [`SymbolTable`]
//! - Unicode superscript/subscript glyphs
//! - Command name tables (functions, big operators, delimiters, spacing)

pub mod commands;
pub mod scripts;
pub mod symbols;

// Re-export commonly used items
pub use commands::{is_font_wrapper, is_known_command, BIG_OPERATORS, FUNCTION_NAMES};
pub use scripts::{SUBSCRIPTS, SUPERSCRIPTS};
pub use symbols::{
    SymbolTable, ARROW_SYMBOLS, GREEK_LETTERS, MISC_SYMBOLS, OPERATOR_SYMBOLS, RELATION_SYMBOLS,
    SYMBOL_TABLE,
};
