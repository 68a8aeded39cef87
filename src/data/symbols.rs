//! Command → glyph mappings for math symbols
//!
//! The tables are grouped by category and merged once into [`SymbolTable`],
//! which orders keys by descending length so that a command is never
//! shadowed by one of its prefixes (`\leftrightarrow` vs `\leftarrow` vs `\le`).

use indexmap::IndexMap;
use lazy_static::lazy_static;

/// Greek letters
pub static GREEK_LETTERS: &[(&str, &str)] = &[
    ("\\alpha", "α"),
    ("\\beta", "β"),
    ("\\gamma", "γ"),
    ("\\delta", "δ"),
    ("\\epsilon", "ε"),
    ("\\varepsilon", "ε"),
    ("\\zeta", "ζ"),
    ("\\eta", "η"),
    ("\\theta", "θ"),
    ("\\vartheta", "ϑ"),
    ("\\iota", "ι"),
    ("\\kappa", "κ"),
    ("\\lambda", "λ"),
    ("\\mu", "μ"),
    ("\\nu", "ν"),
    ("\\xi", "ξ"),
    ("\\pi", "π"),
    ("\\varpi", "ϖ"),
    ("\\rho", "ρ"),
    ("\\varrho", "ϱ"),
    ("\\sigma", "σ"),
    ("\\varsigma", "ς"),
    ("\\tau", "τ"),
    ("\\upsilon", "υ"),
    ("\\phi", "φ"),
    ("\\varphi", "ϕ"),
    ("\\chi", "χ"),
    ("\\psi", "ψ"),
    ("\\omega", "ω"),
    ("\\Alpha", "Α"),
    ("\\Beta", "Β"),
    ("\\Gamma", "Γ"),
    ("\\Delta", "Δ"),
    ("\\Epsilon", "Ε"),
    ("\\Zeta", "Ζ"),
    ("\\Eta", "Η"),
    ("\\Theta", "Θ"),
    ("\\Iota", "Ι"),
    ("\\Kappa", "Κ"),
    ("\\Lambda", "Λ"),
    ("\\Mu", "Μ"),
    ("\\Nu", "Ν"),
    ("\\Xi", "Ξ"),
    ("\\Pi", "Π"),
    ("\\Rho", "Ρ"),
    ("\\Sigma", "Σ"),
    ("\\Tau", "Τ"),
    ("\\Upsilon", "Υ"),
    ("\\Phi", "Φ"),
    ("\\Chi", "Χ"),
    ("\\Psi", "Ψ"),
    ("\\Omega", "Ω"),
];

/// Binary operators
pub static OPERATOR_SYMBOLS: &[(&str, &str)] = &[
    ("\\times", "×"),
    ("\\div", "÷"),
    ("\\pm", "±"),
    ("\\mp", "∓"),
    ("\\cdot", "·"),
    ("\\ast", "*"),
    ("\\star", "★"),
    ("\\circ", "∘"),
    ("\\bullet", "•"),
    ("\\oplus", "⊕"),
    ("\\ominus", "⊖"),
    ("\\otimes", "⊗"),
    ("\\oslash", "⊘"),
    ("\\odot", "⊙"),
    ("\\dagger", "†"),
    ("\\ddagger", "‡"),
    ("\\amalg", "⨿"),
    ("\\vee", "∨"),
    ("\\wedge", "∧"),
    ("\\cap", "∩"),
    ("\\cup", "∪"),
    ("\\sqcap", "⊓"),
    ("\\sqcup", "⊔"),
    ("\\uplus", "⊎"),
    ("\\setminus", "∖"),
];

/// Relations
pub static RELATION_SYMBOLS: &[(&str, &str)] = &[
    ("\\leq", "≤"),
    ("\\le", "≤"),
    ("\\leqslant", "⩽"),
    ("\\geq", "≥"),
    ("\\ge", "≥"),
    ("\\geqslant", "⩾"),
    ("\\neq", "≠"),
    ("\\ne", "≠"),
    ("\\approx", "≈"),
    ("\\equiv", "≡"),
    ("\\sim", "∼"),
    ("\\simeq", "≃"),
    ("\\cong", "≅"),
    ("\\asymp", "≍"),
    ("\\doteq", "≐"),
    ("\\propto", "∝"),
    ("\\subset", "⊂"),
    ("\\subseteq", "⊆"),
    ("\\supset", "⊃"),
    ("\\supseteq", "⊇"),
    ("\\in", "∈"),
    ("\\ni", "∋"),
    ("\\notin", "∉"),
    ("\\ll", "≪"),
    ("\\gg", "≫"),
    ("\\prec", "≺"),
    ("\\succ", "≻"),
    ("\\perp", "⊥"),
    ("\\parallel", "∥"),
    ("\\mid", "∣"),
    ("\\nmid", "∤"),
    ("\\models", "⊨"),
    ("\\vdash", "⊢"),
];

/// Arrows
pub static ARROW_SYMBOLS: &[(&str, &str)] = &[
    ("\\rightarrow", "→"),
    ("\\to", "→"),
    ("\\leftarrow", "←"),
    ("\\gets", "←"),
    ("\\leftrightarrow", "↔"),
    ("\\Rightarrow", "⇒"),
    ("\\implies", "⟹"),
    ("\\Leftarrow", "⇐"),
    ("\\Leftrightarrow", "⇔"),
    ("\\iff", "⟺"),
    ("\\longrightarrow", "⟶"),
    ("\\longleftarrow", "⟵"),
    ("\\longleftrightarrow", "⟷"),
    ("\\Longrightarrow", "⟹"),
    ("\\Longleftarrow", "⟸"),
    ("\\Longleftrightarrow", "⟺"),
    ("\\uparrow", "↑"),
    ("\\downarrow", "↓"),
    ("\\updownarrow", "↕"),
    ("\\nearrow", "↗"),
    ("\\searrow", "↘"),
    ("\\swarrow", "↙"),
    ("\\nwarrow", "↖"),
    ("\\mapsto", "↦"),
    ("\\longmapsto", "⟼"),
    ("\\hookrightarrow", "↪"),
    ("\\hookleftarrow", "↩"),
];

/// Everything else: logic, sets, dots, geometry, currency
pub static MISC_SYMBOLS: &[(&str, &str)] = &[
    ("\\infty", "∞"),
    ("\\partial", "∂"),
    ("\\nabla", "∇"),
    ("\\forall", "∀"),
    ("\\exists", "∃"),
    ("\\nexists", "∄"),
    ("\\emptyset", "∅"),
    ("\\varnothing", "∅"),
    ("\\complement", "∁"),
    ("\\neg", "¬"),
    ("\\lnot", "¬"),
    ("\\land", "∧"),
    ("\\lor", "∨"),
    ("\\angle", "∠"),
    ("\\measuredangle", "∡"),
    ("\\sphericalangle", "∢"),
    ("\\prime", "′"),
    ("\\backprime", "‵"),
    ("\\ldots", "…"),
    ("\\dots", "…"),
    ("\\cdots", "⋯"),
    ("\\vdots", "⋮"),
    ("\\ddots", "⋱"),
    ("\\therefore", "∴"),
    ("\\because", "∵"),
    ("\\qed", "∎"),
    ("\\blacksquare", "■"),
    ("\\square", "□"),
    ("\\triangle", "△"),
    ("\\bigtriangleup", "△"),
    ("\\bigtriangledown", "▽"),
    ("\\diamond", "◊"),
    ("\\lozenge", "◊"),
    ("\\blacklozenge", "⧫"),
    ("\\bigcirc", "○"),
    ("\\aleph", "ℵ"),
    ("\\hbar", "ℏ"),
    ("\\ell", "ℓ"),
    ("\\Re", "ℜ"),
    ("\\Im", "ℑ"),
    ("\\wp", "℘"),
    ("\\top", "⊤"),
    ("\\bot", "⊥"),
    ("\\copyright", "©"),
    ("\\pounds", "£"),
    ("\\yen", "¥"),
    ("\\euro", "€"),
    ("\\section", "§"),
    ("\\paragraph", "¶"),
    ("\\dagger", "†"),
    ("\\ddagger", "‡"),
];

/// All categories in merge order
pub static SYMBOL_CATEGORIES: &[&[(&str, &str)]] = &[
    GREEK_LETTERS,
    OPERATOR_SYMBOLS,
    RELATION_SYMBOLS,
    ARROW_SYMBOLS,
    MISC_SYMBOLS,
];

lazy_static! {
    /// The process-wide symbol table shared by every conversion
    pub static ref SYMBOL_TABLE: SymbolTable = SymbolTable::build(SYMBOL_CATEGORIES);
}

/// Immutable command → glyph lookup ordered by descending command length
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: IndexMap<&'static str, &'static str>,
}

impl SymbolTable {
    /// Merge the given categories and order the result longest key first.
    ///
    /// The sort is stable: keys of equal length keep their category order.
    /// A key listed twice keeps its first position and takes the later glyph.
    pub fn build(categories: &[&[(&'static str, &'static str)]]) -> Self {
        let mut merged: IndexMap<&'static str, &'static str> = IndexMap::new();
        for category in categories {
            for &(command, glyph) in category.iter() {
                merged.insert(command, glyph);
            }
        }

        let mut pairs: Vec<(&'static str, &'static str)> = merged.into_iter().collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Exact lookup of a full command token (marker included)
    pub fn get(&self, command: &str) -> Option<&'static str> {
        self.entries.get(command).copied()
    }

    /// Find the longest command that prefixes `rest` and ends on a token boundary.
    ///
    /// A boundary is the end of input or any character that is not an ASCII
    /// letter, so `\le` never matches inside `\left`.
    pub fn longest_match(&self, rest: &str) -> Option<(&'static str, &'static str)> {
        self.entries
            .iter()
            .find(|(command, _)| {
                rest.starts_with(**command)
                    && !rest[command.len()..]
                        .bytes()
                        .next()
                        .is_some_and(|b| b.is_ascii_alphabetic())
            })
            .map(|(command, glyph)| (*command, *glyph))
    }

    /// Iterate entries in lookup order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_by_descending_length() {
        let lengths: Vec<usize> = SYMBOL_TABLE.iter().map(|(k, _)| k.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_longer_keys_precede_their_prefixes() {
        let keys: Vec<&str> = SYMBOL_TABLE.iter().map(|(k, _)| k).collect();
        let pos = |k: &str| keys.iter().position(|x| *x == k).unwrap();
        assert!(pos("\\leftrightarrow") < pos("\\leftarrow"));
        assert!(pos("\\leftarrow") < pos("\\le"));
        assert!(pos("\\simeq") < pos("\\sim"));
        assert!(pos("\\infty") < pos("\\in"));
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(
            SYMBOL_TABLE.longest_match("\\leftrightarrow x"),
            Some(("\\leftrightarrow", "↔"))
        );
        assert_eq!(SYMBOL_TABLE.longest_match("\\le 3"), Some(("\\le", "≤")));
        assert_eq!(SYMBOL_TABLE.longest_match("\\infty"), Some(("\\infty", "∞")));
    }

    #[test]
    fn test_longest_match_respects_token_boundary() {
        assert_eq!(SYMBOL_TABLE.longest_match("\\left("), None);
        assert_eq!(SYMBOL_TABLE.longest_match("\\alphabet"), None);
        assert_eq!(SYMBOL_TABLE.longest_match("\\alpha2"), Some(("\\alpha", "α")));
    }

    #[test]
    fn test_duplicates_are_merged() {
        let daggers = SYMBOL_TABLE.iter().filter(|(k, _)| *k == "\\dagger").count();
        assert_eq!(daggers, 1);
        assert_eq!(SYMBOL_TABLE.get("\\dagger"), Some("†"));
    }

    #[test]
    fn test_build_keeps_category_order_for_ties() {
        let a: &[(&'static str, &'static str)] = &[("\\ab", "1"), ("\\x", "2")];
        let b: &[(&'static str, &'static str)] = &[("\\cd", "3"), ("\\ab", "4")];
        let table = SymbolTable::build(&[a, b]);
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["\\ab", "\\cd", "\\x"]);
        assert_eq!(table.get("\\ab"), Some("4"));
    }
}
