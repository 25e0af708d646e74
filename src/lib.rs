pub mod pipeline;
pub mod reader;
pub mod segmenter;

// Re-export main types for convenient access
pub use pipeline::{split_file, write_sentences, SplitStats};
pub use segmenter::{MedlineSegmenter, SentenceSegmenter, SentenceSpan};
