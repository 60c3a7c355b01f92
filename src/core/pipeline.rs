// src/core/pipeline.rs
use std::path::Path;

use crate::core::accents::AccentFolder;
use crate::core::case::CaseMode;
use crate::core::collate::{SortOrder, order};
use crate::core::frequency::count_words_with;
use crate::core::source::read_text;
use crate::models::{FileError, FrequencyTable, WordCount};

/// Count-then-order pipeline with its strategies fixed up front.
///
/// `Pipeline::default()` counts with the simple lowercase mapping and orders
/// alphabetically with the built-in accent table.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    case: CaseMode,
    folder: AccentFolder,
    sort: SortOrder,
}

impl Pipeline {
    #[inline]
    #[must_use]
    pub fn new(case: CaseMode, folder: AccentFolder, sort: SortOrder) -> Self {
        Self { case, folder, sort }
    }

    #[inline]
    #[must_use]
    pub fn count(&self, text: &str) -> FrequencyTable {
        count_words_with(text, self.case.folder())
    }

    /// Orders every word of `table` and pairs it with its count.
    #[must_use]
    pub fn rank(&self, table: &FrequencyTable) -> Vec<WordCount> {
        order(table, &self.folder, self.sort)
            .into_iter()
            .map(|word| WordCount::new(word, table.get(word).unwrap_or_default()))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn process(&self, text: &str) -> Vec<WordCount> {
        self.rank(&self.count(text))
    }

    /// Reads `path` and runs it through the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the [`FileError`] from reading `path` unchanged; nothing is
    /// counted in that case.
    #[inline]
    pub fn process_file(&self, path: &Path) -> Result<Vec<WordCount>, FileError> {
        let content = read_text(path)?;
        Ok(self.process(&content))
    }
}

/// Counts `content` and returns its words in accent-folded alphabetical
/// order, each with its count.
#[inline]
#[must_use]
pub fn process(content: &str) -> Vec<WordCount> {
    Pipeline::default().process(content)
}

/// Reads `path` and returns its word counts in accent-folded alphabetical
/// order.
///
/// # Errors
///
/// Propagates the [`FileError`] raised while opening or reading `path`.
#[inline]
pub fn process_file(path: &Path) -> Result<Vec<WordCount>, FileError> {
    Pipeline::default().process_file(path)
}
