// Offset-carrying tokenizer feeding the boundary model. Token classes
// follow the Indo-European convention: alphanumeric runs and decimal
// numbers are single tokens, every other non-whitespace character stands
// alone.

use anyhow::Result;
use regex_automata::meta::Regex;

/// Token classes produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run starting with a letter ("renal", "p53")
    Word,
    /// Digit run, possibly with interior separators ("120", "0.05")
    Number,
    /// Single punctuation or symbol character
    Punct,
}

/// A token together with its byte offsets into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

/// Scanner producing offset-carrying tokens over a document.
///
/// Decimal and serial numbers ("3.5", "1,200") stay whole so their interior
/// periods never reach the boundary model as stop candidates.
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        // Alternation order matters: the number-with-separators branch must
        // win over the plain alphanumeric run at the same start position.
        let pattern = Regex::new(r"\p{N}+(?:[.,:]\p{N}+)+|[\p{L}\p{N}]+|\S")?;
        Ok(Self { pattern })
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();

        for mat in self.pattern.find_iter(text) {
            let slice = &text[mat.start()..mat.end()];
            tokens.push(Token {
                text: slice,
                start: mat.start(),
                end: mat.end(),
                kind: classify(slice),
            });
        }

        tokens
    }
}

fn classify(token: &str) -> TokenKind {
    match token.chars().next() {
        Some(c) if c.is_alphabetic() => TokenKind::Word,
        Some(c) if c.is_numeric() => TokenKind::Number,
        _ => TokenKind::Punct,
    }
}
