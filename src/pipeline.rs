// Single-pass split pipeline: load document, segment, order spans, write
// one sentence per line. The output handle is scoped to the write phase and
// flushed on every exit path.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::reader;
use crate::segmenter::{SentenceSegmenter, SentenceSpan};

/// Summary of one pipeline run
#[derive(Debug, Clone)]
pub struct SplitStats {
    pub bytes_read: u64,
    pub sentences_written: usize,
    pub duration_ms: u64,
}

/// Split the abstract at `input` into one sentence per line at `output`.
///
/// The output file is created if absent and truncated if present. A read or
/// decode failure propagates before the output file is touched; a write
/// failure propagates with a diagnostic naming the output path.
pub async fn split_file<S, I, O>(segmenter: &S, input: I, output: O) -> Result<SplitStats>
where
    S: SentenceSegmenter,
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();
    let start_time = Instant::now();

    let text = reader::load_document(input).await?;

    let mut spans = segmenter
        .segment(&text)
        .with_context(|| format!("sentence segmentation failed for {}", input.display()))?;

    // The segmenter contract leaves enumeration order open; emit document order.
    spans.sort_unstable_by_key(|span| (span.start, span.end));

    let sentences_written = write_sentences(&text, &spans, output).await?;

    let stats = SplitStats {
        bytes_read: text.len() as u64,
        sentences_written,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "split {} into {} sentences ({} bytes) in {}ms",
        input.display(),
        stats.sentences_written,
        stats.bytes_read,
        stats.duration_ms
    );

    Ok(stats)
}

/// Write each spanned substring as its own line, flushing after every line.
///
/// A span that does not address `text` (out of bounds or off a character
/// boundary) is a segmenter-contract violation and fails the run.
pub async fn write_sentences(text: &str, spans: &[SentenceSpan], output: &Path) -> Result<usize> {
    debug!("writing {} sentences to {}", spans.len(), output.display());

    let file = tokio::fs::File::create(output)
        .await
        .with_context(|| write_context(output))?;
    let mut writer = BufWriter::new(file);

    for span in spans {
        let sentence = span.slice(text).ok_or_else(|| {
            anyhow::anyhow!(
                "segmenter produced invalid span {}..{} for a {} byte document",
                span.start,
                span.end,
                text.len()
            )
        })?;

        writer
            .write_all(sentence.as_bytes())
            .await
            .with_context(|| write_context(output))?;
        writer
            .write_all(b"\n")
            .await
            .with_context(|| write_context(output))?;
        writer.flush().await.with_context(|| write_context(output))?;
    }

    writer.flush().await.with_context(|| write_context(output))?;

    Ok(spans.len())
}

fn write_context(output: &Path) -> String {
    format!("could not write to {}", output.display())
}
