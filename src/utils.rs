// src/utils.rs
use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;
use std::io::Write;

use crate::models::WordCount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `word: count` line per word
    #[default]
    Text,
    /// A JSON array of `{"word", "count"}` objects
    Json,
}

/// Drops entries counted fewer than `min_count` times, then keeps at most
/// `top` of the rest, preserving order.
#[must_use]
pub fn select(entries: Vec<WordCount>, min_count: u64, top: Option<usize>) -> Vec<WordCount> {
    entries
        .into_iter()
        .filter(|entry| entry.count >= min_count)
        .take(top.unwrap_or(usize::MAX))
        .collect()
}

/// Writes `entries` to `out` in the given format, in the order given.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(
    out: &mut W,
    entries: &[WordCount],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "{}: {}", entry.word, entry.count)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
