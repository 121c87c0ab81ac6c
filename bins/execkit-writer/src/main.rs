use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Write a string to a file, creating or truncating it
#[derive(Parser, Debug)]
#[command(name = "writer")]
#[command(about = "Write a string to a file", long_about = None)]
struct Args {
    /// File to write
    file: PathBuf,

    /// Text to write
    text: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    debug!("Writing '{}' to {}", args.text, args.file.display());
    std::fs::write(&args.file, &args.text)
        .with_context(|| format!("Failed to write {}", args.file.display()))?;
    debug!("Write to {} succeeded", args.file.display());

    Ok(())
}
