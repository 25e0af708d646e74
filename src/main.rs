use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use absplit::pipeline;
use absplit::segmenter::MedlineSegmenter;

#[derive(Parser, Debug)]
#[command(name = "absplit")]
#[command(about = "Split a biomedical abstract into one sentence per line")]
#[command(version)]
struct Args {
    /// Path to the UTF-8 text file containing the abstract
    input: PathBuf,

    /// Destination file; created if missing, overwritten if present
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting absplit");
    info!(?args, "Parsed CLI arguments");

    // Validate the input path early so the failure names the real problem
    // instead of surfacing as a bare read error downstream.
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }
    if !args.input.is_file() {
        anyhow::bail!("Input path is not a file: {}", args.input.display());
    }

    let segmenter = MedlineSegmenter::new()?;
    let stats = pipeline::split_file(&segmenter, &args.input, &args.output).await?;

    println!(
        "absplit v{} - {} sentences written to {}",
        env!("CARGO_PKG_VERSION"),
        stats.sentences_written,
        args.output.display()
    );
    println!("  Bytes read: {}", stats.bytes_read);
    println!("  Duration: {}ms", stats.duration_ms);

    Ok(())
}
