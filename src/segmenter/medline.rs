// Heuristic sentence chunker tuned for MEDLINE-style abstracts. Boundary
// decisions are local to a stop token and its two neighbors, with a
// delimiter-depth guard so stops inside parentheticals never split.

use std::collections::HashSet;

use anyhow::Result;
use tracing::debug;

use super::abbreviations::BoundaryLexicon;
use super::tokenizer::{Token, TokenKind, Tokenizer};
use super::{SentenceSegmenter, SentenceSpan};

/// Punctuation tokens that can terminate a sentence
pub const POSSIBLE_STOPS: &[&str] = &[".", "!", "?"];

const OPENING_DELIMITERS: &[char] = &['(', '[', '{'];
const CLOSING_DELIMITERS: &[char] = &[')', ']', '}'];
const OPENING_QUOTES: &[char] = &['"', '\'', '\u{201C}', '\u{2018}'];

/// Default sentence segmenter for biomedical abstracts.
///
/// A stop token ends a sentence when the preceding token is not an
/// impossible penultimate, the following token can open a sentence, and no
/// parenthesis, bracket, or brace is open at that point. The final token of
/// the document always closes the last sentence, so trailing text without
/// terminal punctuation still yields a span.
pub struct MedlineSegmenter {
    tokenizer: Tokenizer,
    lexicon: BoundaryLexicon,
    stops: HashSet<&'static str>,
}

impl MedlineSegmenter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            lexicon: BoundaryLexicon::new(),
            stops: POSSIBLE_STOPS.iter().copied().collect(),
        })
    }

    fn is_stop(&self, token: &Token) -> bool {
        token.kind == TokenKind::Punct && self.stops.contains(token.text)
    }

    /// A sentence opener leads with an uppercase letter, a digit, an opening
    /// quote, or an opening delimiter.
    fn can_start_sentence(&self, token: &Token) -> bool {
        if self.lexicon.is_impossible_start(token.text) {
            return false;
        }

        match token.text.chars().next() {
            Some(c) => {
                c.is_uppercase()
                    || c.is_numeric()
                    || OPENING_QUOTES.contains(&c)
                    || OPENING_DELIMITERS.contains(&c)
            }
            None => false,
        }
    }
}

impl SentenceSegmenter for MedlineSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<SentenceSpan>> {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut spans = Vec::new();
        let mut sentence_start = tokens[0].start;
        let mut open_depth: usize = 0;

        for (i, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::Punct {
                if let Some(c) = token.text.chars().next() {
                    if OPENING_DELIMITERS.contains(&c) {
                        open_depth += 1;
                    } else if CLOSING_DELIMITERS.contains(&c) {
                        open_depth = open_depth.saturating_sub(1);
                    }
                }
            }

            let Some(next) = tokens.get(i + 1) else {
                // Forced final stop: the last token closes the last sentence.
                spans.push(SentenceSpan::new(sentence_start, token.end));
                break;
            };

            if !self.is_stop(token) || open_depth > 0 {
                continue;
            }
            if i > 0 && self.lexicon.is_impossible_penultimate(tokens[i - 1].text) {
                continue;
            }
            if !self.can_start_sentence(next) {
                continue;
            }

            spans.push(SentenceSpan::new(sentence_start, token.end));
            sentence_start = next.start;
        }

        debug!(
            "segmented {} sentences from {} tokens over {} bytes",
            spans.len(),
            tokens.len(),
            text.len()
        );

        Ok(spans)
    }
}
