// src/core/source.rs
use std::fs::File;
use std::io::Read as _;
use std::path::Path;

use crate::models::FileError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Opens `path` for reading.
///
/// # Errors
///
/// Returns [`FileError::OpenFailed`] if the file does not exist or cannot be
/// opened.
#[inline]
pub fn open_file(path: &Path) -> Result<File, FileError> {
    File::open(path).map_err(|source| FileError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the whole of `path` as UTF-8 text. A leading byte-order mark is
/// dropped.
///
/// # Errors
///
/// * [`FileError::OpenFailed`] if the file cannot be opened
/// * [`FileError::ReadFailed`] if reading fails or the content is not valid
///   UTF-8
pub fn read_text(path: &Path) -> Result<String, FileError> {
    let mut file = open_file(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| FileError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

    if content.starts_with(BYTE_ORDER_MARK) {
        content.replace_range(..BYTE_ORDER_MARK.len_utf8(), "");
    }
    tracing::info!(path = %path.display(), bytes = content.len(), "read input");
    Ok(content)
}
