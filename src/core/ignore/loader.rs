// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".wfcignore";

/// Loads ignore patterns from the `.wfcignore` file in `dir`, or from the
/// nearest ancestor directory that has one.
///
/// # Arguments
///
/// * `dir` - The directory about to be walked
///
/// # Returns
///
/// * `Ok(Patterns)` - The parsed rules, empty if no ignore file was found
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file exists but cannot be read
/// * A line of the file is not a valid glob pattern
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::new();

    for current_dir in dir.ancestors() {
        let ignore_file = current_dir.join(IGNORE_FILE_NAME);
        if !ignore_file.is_file() {
            continue;
        }

        let content = fs::read_to_string(&ignore_file).with_context(|| {
            format!("Failed to read ignore file: {}", ignore_file.display())
        })?;
        for line in content.lines() {
            patterns.add_pattern(line)?;
        }
        tracing::debug!(file = %ignore_file.display(), "loaded ignore patterns");
        break;
    }

    Ok(patterns)
}
