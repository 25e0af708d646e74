// Sentence-boundary capability behind a swappable trait, plus the
// Medline-tuned default implementation used by the CLI.

use anyhow::Result;

pub mod abbreviations;
pub mod medline;
pub mod tokenizer;

// Re-export core types
pub use abbreviations::BoundaryLexicon;
pub use medline::MedlineSegmenter;

/// Byte-offset range of one detected sentence, half-open `start..end`.
///
/// Offsets address the document the span was produced from and must fall on
/// UTF-8 character boundaries of that document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

impl SentenceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Extract the addressed substring.
    ///
    /// Returns `None` when the offsets fall outside `text` or off a
    /// character boundary, which signals a broken segmenter rather than a
    /// recoverable condition.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Sentence-boundary detection capability consumed by the pipeline.
///
/// Implementations return one span per detected sentence. Spans are
/// non-overlapping and may leave gaps (inter-sentence whitespace).
/// Enumeration order is unspecified; callers that need document order must
/// sort by start offset.
pub trait SentenceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<SentenceSpan>>;
}
