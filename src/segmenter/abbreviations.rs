// Boundary lexicon for Medline-style sentence chunking. A stop token only
// ends a sentence when the tokens around it pass these checks.

use std::collections::HashSet;

/// Personal titles that precede a name ("Dr. Smith") rather than end a sentence
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "rev", "st", "sr", "jr",
];

/// Latin and scholarly abbreviations common in abstract prose
pub const LATIN_ABBREVIATIONS: &[&str] = &[
    "al", "etc", "vs", "viz", "cf", "resp", "approx", "ca", "seq",
];

/// Citation, figure, and specimen abbreviations from biomedical text
pub const REFERENCE_ABBREVIATIONS: &[&str] = &[
    "fig", "figs", "ref", "refs", "no", "nos", "vol", "pp", "wt",
    "spp", "subsp", "var", "conc",
];

/// Month abbreviations as they appear in citation strings
pub const MONTH_ABBREVIATIONS: &[&str] = &[
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec",
];

/// Tokens that never begin a sentence: closing delimiters, separators, stops
pub const IMPOSSIBLE_STARTS: &[&str] = &[
    ")", "]", "}", ">", ".", "!", "?", ",", ";", ":", "%", "-", "/",
];

/// O(1) membership checks for the boundary model's token-context rules
pub struct BoundaryLexicon {
    impossible_penultimates: HashSet<&'static str>,
    impossible_starts: HashSet<&'static str>,
}

impl BoundaryLexicon {
    pub fn new() -> Self {
        let impossible_penultimates: HashSet<&'static str> = TITLE_ABBREVIATIONS
            .iter()
            .chain(LATIN_ABBREVIATIONS.iter())
            .chain(REFERENCE_ABBREVIATIONS.iter())
            .chain(MONTH_ABBREVIATIONS.iter())
            .copied()
            .collect();

        Self {
            impossible_penultimates,
            impossible_starts: IMPOSSIBLE_STARTS.iter().copied().collect(),
        }
    }

    /// Check whether the token directly before a stop rules the boundary out.
    ///
    /// Single alphabetic characters always do: they are initials ("C. elegans")
    /// or pieces of spelled-out abbreviations ("e.g.", "i.e.").
    pub fn is_impossible_penultimate(&self, token: &str) -> bool {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_alphabetic() {
                return true;
            }
        }

        self.impossible_penultimates
            .contains(token.to_lowercase().as_str())
    }

    /// Check whether a token can never start a sentence
    pub fn is_impossible_start(&self, token: &str) -> bool {
        self.impossible_starts.contains(token)
    }
}

impl Default for BoundaryLexicon {
    fn default() -> Self {
        Self::new()
    }
}
