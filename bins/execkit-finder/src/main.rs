use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Search a directory for files containing a piece of text
#[derive(Parser, Debug)]
#[command(name = "finder")]
#[command(about = "Count files and matching lines in a directory", long_about = None)]
struct Args {
    /// Directory to scan (non-recursive)
    directory: PathBuf,

    /// Text to search for
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
    let (files, lines) = scan_directory(&args.directory, &args.text)?;

    debug!(
        "Found {} matching lines for '{}' in directory '{}'",
        lines,
        args.text,
        args.directory.display()
    );
    println!(
        "The number of files are {} and the number of matching lines are {}",
        files, lines
    );

    Ok(())
}

/// Scan the immediate entries of `dir`, returning the number of regular
/// files examined and the total number of lines containing `text`.
/// Unreadable entries are skipped with a warning.
fn scan_directory(dir: &Path, text: &str) -> Result<(usize, usize)> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to open directory {}", dir.display()))?;

    let mut files = 0;
    let mut lines = 0;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        files += 1;
        let path = entry.path();
        match matching_lines(&path, text) {
            Ok(n) => lines += n,
            Err(e) => warn!("Skipping unreadable file {}: {}", path.display(), e),
        }
    }

    Ok((files, lines))
}

/// Count the lines of `path` containing `text`. Stops at the first read
/// error (e.g. binary content), keeping the lines counted so far.
fn matching_lines(path: &Path, text: &str) -> std::io::Result<usize> {
    let reader = BufReader::new(File::open(path)?);
    let mut count = 0;

    for line in reader.lines() {
        match line {
            Ok(line) if line.contains(text) => count += 1,
            Ok(_) => {}
            Err(_) => break,
        }
    }

    Ok(count)
}
