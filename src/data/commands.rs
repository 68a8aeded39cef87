//! Command name tables used by the rewrite stages
//!
//! Names are stored without the leading marker.

use phf::{phf_map, phf_set};

use super::symbols::SYMBOL_TABLE;

/// Fraction commands (two arguments)
pub static FRACTION_COMMANDS: &[&str] = &["frac", "dfrac", "tfrac", "cfrac"];

/// Named functions printed upright: the marker is simply dropped
pub static FUNCTION_NAMES: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "cot", "sec", "csc",
    "sinh", "cosh", "tanh", "coth",
    "arcsin", "arccos", "arctan",
    "ln", "log", "exp", "det", "dim",
    "lim", "liminf", "limsup", "sup", "inf", "max", "min",
    "gcd", "lcm", "deg", "ker", "arg", "hom", "Pr",
};

/// Style directives with no visible output
pub static STYLE_DIRECTIVES: phf::Set<&'static str> = phf_set! {
    "displaystyle", "textstyle", "scriptstyle", "scriptscriptstyle",
    "limits", "nolimits",
};

/// Big operators and their glyphs
pub static BIG_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "sum" => "∑",
    "prod" => "∏",
    "coprod" => "∐",
    "int" => "∫",
    "iint" => "∬",
    "iiint" => "∭",
    "oint" => "∮",
    "bigcup" => "⋃",
    "bigcap" => "⋂",
    "bigoplus" => "⨁",
    "bigotimes" => "⨂",
};

/// Spacing directives and the literal run each becomes
pub static SPACING: phf::Map<&'static str, &'static str> = phf_map! {
    "," => " ",
    ":" => " ",
    ";" => " ",
    " " => " ",
    "!" => "",
    "thinspace" => " ",
    "medspace" => " ",
    "thickspace" => " ",
    "enspace" => " ",
    "negthinspace" => "",
    "quad" => "  ",
    "qquad" => "    ",
};

/// Delimiter sizing directives, removed without touching the bracket
pub static DELIMITER_SIZES: phf::Set<&'static str> = phf_set! {
    "left", "right", "middle",
    "big", "Big", "bigg", "Bigg",
    "bigl", "Bigl", "biggl", "Biggl",
    "bigr", "Bigr", "biggr", "Biggr",
    "bigm", "Bigm", "biggm", "Biggm",
};

/// Named delimiters
pub static NAMED_DELIMITERS: phf::Map<&'static str, &'static str> = phf_map! {
    "langle" => "⟨",
    "rangle" => "⟩",
    "lceil" => "⌈",
    "rceil" => "⌉",
    "lfloor" => "⌊",
    "rfloor" => "⌋",
    "|" => "‖",
    "Vert" => "‖",
    "lVert" => "‖",
    "rVert" => "‖",
    "vert" => "|",
    "lvert" => "|",
    "rvert" => "|",
    "lbrace" => LEFT_BRACE_GLYPH,
    "rbrace" => RIGHT_BRACE_GLYPH,
};

/// Literal braces in the output; ASCII braces are reserved for script groups
pub const LEFT_BRACE_GLYPH: &str = "❴";
pub const RIGHT_BRACE_GLYPH: &str = "❵";

/// Wrappers that take one group and contribute only its content
pub static FONT_WRAPPERS: phf::Set<&'static str> = phf_set! {
    "mbox", "hbox", "boldsymbol", "bm",
};

/// Length-based spacing with a dimension argument
pub static LENGTH_SPACING: phf::Set<&'static str> = phf_set! {
    "hspace", "vspace",
};

/// Font size switches
pub static FONT_SIZES: phf::Set<&'static str> = phf_set! {
    "tiny", "scriptsize", "footnotesize", "small", "normalsize",
    "large", "Large", "LARGE", "huge", "Huge",
};

/// Structural commands consumed by the fraction, root and matrix stages
pub static STRUCTURAL_COMMANDS: phf::Set<&'static str> = phf_set! {
    "frac", "dfrac", "tfrac", "cfrac", "sqrt", "begin", "end",
    "operatorname", "hline", "\\", "{", "}", "^", "_", "&", "%", "#", "$",
};

/// Is `name` a font/style wrapper (`\mathrm`, `\textbf`, `\mbox`, ...)?
pub fn is_font_wrapper(name: &str) -> bool {
    FONT_WRAPPERS.contains(name)
        || (name.starts_with("math") && name.len() > 4)
        || name.starts_with("text")
}

/// Whether any stage of the pipeline understands `name`
pub fn is_known_command(name: &str) -> bool {
    FUNCTION_NAMES.contains(name)
        || STYLE_DIRECTIVES.contains(name)
        || BIG_OPERATORS.contains_key(name)
        || SPACING.contains_key(name)
        || DELIMITER_SIZES.contains(name)
        || NAMED_DELIMITERS.contains_key(name)
        || LENGTH_SPACING.contains(name)
        || FONT_SIZES.contains(name)
        || STRUCTURAL_COMMANDS.contains(name)
        || is_font_wrapper(name)
        || SYMBOL_TABLE.get(&format!("\\{}", name)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_wrappers() {
        assert!(is_font_wrapper("mathrm"));
        assert!(is_font_wrapper("mathbb"));
        assert!(is_font_wrapper("text"));
        assert!(is_font_wrapper("textbf"));
        assert!(is_font_wrapper("mbox"));
        assert!(!is_font_wrapper("math"));
        assert!(!is_font_wrapper("sin"));
    }

    #[test]
    fn test_known_commands() {
        assert!(is_known_command("frac"));
        assert!(is_known_command("alpha"));
        assert!(is_known_command("sin"));
        assert!(is_known_command("sum"));
        assert!(is_known_command("langle"));
        assert!(is_known_command(","));
        assert!(!is_known_command("foo"));
    }
}
