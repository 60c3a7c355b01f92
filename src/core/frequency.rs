// src/core/frequency.rs
use crate::core::case::{CaseFolder, SimpleLowercase};
use crate::core::tokenizer::words;
use crate::models::FrequencyTable;

/// Counts the words of `text`, case-folded with the simple lowercase
/// mapping.
///
/// Punctuation stays attached to its word: `"teste"` and `"teste."` are
/// counted separately.
#[inline]
#[must_use]
pub fn count_words(text: &str) -> FrequencyTable {
    count_words_with(text, &SimpleLowercase)
}

/// Counts the words of `text`, using `folder` to build each key.
#[must_use]
pub fn count_words_with(text: &str, folder: &dyn CaseFolder) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for word in words(text) {
        table.record(folder.fold_case(word));
    }
    tracing::debug!(
        tokens = table.total(),
        distinct = table.len(),
        "counted words"
    );
    table
}
