// src/models/file_error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which step of acquiring a file's text went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    OpenFailed,
    ReadFailed,
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not open file: {}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read file: {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> FileErrorKind {
        match self {
            Self::OpenFailed { .. } => FileErrorKind::OpenFailed,
            Self::ReadFailed { .. } => FileErrorKind::ReadFailed,
        }
    }

    #[inline]
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        match self {
            Self::OpenFailed { path, .. } | Self::ReadFailed { path, .. } => path,
        }
    }
}
