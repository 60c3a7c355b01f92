// src/core/scanner.rs
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::CONFIG_FILE_NAME;
use crate::core::ignore::{Patterns, load_ignore_patterns};
use crate::core::pipeline::Pipeline;
use crate::core::source::read_text;
use crate::models::FrequencyTable;


/// Lists the files below `dir` that should be counted, in file-name order.
///
/// # Arguments
///
/// * `dir` - The directory to walk
/// * `exclude_dirs` - Directory names skipped wherever they appear
/// * `skip_files` - Files left out even when they sit below `dir`
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Every file that is not hidden, excluded or ignored.
///   Config files named `wfc.toml` are never listed.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined for a relative `dir`
/// * The ignore file cannot be read or parsed
/// * File system operations fail during traversal
pub fn collect_files(
    dir: &Path,
    exclude_dirs: &[String],
    skip_files: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let ignore_patterns = load_ignore_patterns(&absolute_dir)?;
    let skip_files: Vec<PathBuf> = skip_files
        .iter()
        .filter_map(|path| path.canonicalize().ok())
        .collect();
    let mut files = Vec::new();

    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_exclude(e, &absolute_dir, exclude_dirs, &ignore_patterns))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_skipped(entry.path(), &skip_files) {
            tracing::debug!(path = %entry.path().display(), "skipping config file");
            continue;
        }
        files.push(entry.into_path());
    }

    tracing::debug!(dir = %absolute_dir.display(), files = files.len(), "collected files");
    Ok(files)
}

/// Counts the words of every input in `paths` into a single table.
///
/// Files are read directly and any error reading them is returned.
/// Directories are walked with [`collect_files`]; files inside them that
/// cannot be read are skipped with a warning, as are `skip_files`.
///
/// # Errors
///
/// This function may return an error if:
/// * A file named in `paths` cannot be opened or read (a [`crate::FileError`])
/// * A directory cannot be walked
pub fn count_paths(
    paths: &[PathBuf],
    exclude_dirs: &[String],
    skip_files: &[PathBuf],
    pipeline: &Pipeline,
) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for path in paths {
        if path.is_dir() {
            for file in collect_files(path, exclude_dirs, skip_files)? {
                match read_text(&file) {
                    Ok(content) => table.merge(pipeline.count(&content)),
                    Err(err) => tracing::warn!(error = %err, "skipping file"),
                }
            }
        } else {
            let content = read_text(path)?;
            table.merge(pipeline.count(&content));
        }
    }

    Ok(table)
}

fn should_exclude(
    entry: &DirEntry,
    root: &Path,
    exclude_dirs: &[String],
    ignore_patterns: &Patterns,
) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if is_hidden(entry) {
        return true;
    }

    let is_dir = entry.file_type().is_dir();
    if let Some(name) = entry.file_name().to_str() {
        if is_dir && exclude_dirs.iter().any(|d| d == name) {
            return true;
        }
        if !is_dir && name == CONFIG_FILE_NAME {
            return true;
        }
    }

    entry
        .path()
        .strip_prefix(root)
        .is_ok_and(|relative| ignore_patterns.matches(relative, is_dir))
}

fn is_skipped(path: &Path, skip_files: &[PathBuf]) -> bool {
    !skip_files.is_empty()
        && path
            .canonicalize()
            .is_ok_and(|path| skip_files.contains(&path))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}
