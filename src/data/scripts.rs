//! Unicode superscript and subscript glyphs
//!
//! Only characters with a real Unicode script form are listed; everything
//! else falls back to ASCII `^`/`_` notation.

use phf::phf_map;

pub static SUPERSCRIPTS: phf::Map<char, char> = phf_map! {
    '0' => '⁰',
    '1' => '¹',
    '2' => '²',
    '3' => '³',
    '4' => '⁴',
    '5' => '⁵',
    '6' => '⁶',
    '7' => '⁷',
    '8' => '⁸',
    '9' => '⁹',
    '+' => '⁺',
    '-' => '⁻',
    '=' => '⁼',
    '(' => '⁽',
    ')' => '⁾',
    'n' => 'ⁿ',
    'i' => 'ⁱ',
};

pub static SUBSCRIPTS: phf::Map<char, char> = phf_map! {
    '0' => '₀',
    '1' => '₁',
    '2' => '₂',
    '3' => '₃',
    '4' => '₄',
    '5' => '₅',
    '6' => '₆',
    '7' => '₇',
    '8' => '₈',
    '9' => '₉',
    '+' => '₊',
    '-' => '₋',
    '=' => '₌',
    '(' => '₍',
    ')' => '₎',
    'a' => 'ₐ',
    'e' => 'ₑ',
    'o' => 'ₒ',
    'x' => 'ₓ',
    'h' => 'ₕ',
    'k' => 'ₖ',
    'l' => 'ₗ',
    'm' => 'ₘ',
    'n' => 'ₙ',
    'p' => 'ₚ',
    's' => 'ₛ',
    't' => 'ₜ',
};

/// Map every character of `text` through `table`.
///
/// Returns `None` when `text` is empty or any character has no glyph.
pub fn map_all(text: &str, table: &phf::Map<char, char>) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    text.chars().map(|c| table.get(&c).copied()).collect()
}

/// Superscript each character that has a glyph, keeping the rest as-is
pub fn superscript_lossy(text: &str) -> String {
    text.chars()
        .map(|c| SUPERSCRIPTS.get(&c).copied().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_all() {
        assert_eq!(map_all("2", &SUPERSCRIPTS), Some("²".to_string()));
        assert_eq!(map_all("n+1", &SUPERSCRIPTS), Some("ⁿ⁺¹".to_string()));
        assert_eq!(map_all("12", &SUBSCRIPTS), Some("₁₂".to_string()));
        assert_eq!(map_all("ij", &SUBSCRIPTS), None);
        assert_eq!(map_all("", &SUBSCRIPTS), None);
    }

    #[test]
    fn test_superscript_lossy() {
        assert_eq!(superscript_lossy("3"), "³");
        assert_eq!(superscript_lossy("n+k"), "ⁿ⁺k");
    }
}
