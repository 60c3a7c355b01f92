// src/core/collate.rs
use clap::ValueEnum;
use serde::Deserialize;
use std::cmp::Reverse;

use crate::core::accents::{AccentFolder, default_folder};
use crate::models::FrequencyTable;

/// Order in which counted words are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Alphabetical by accent-folded spelling.
    #[default]
    Alpha,
    /// Most frequent first, alphabetical within equal counts.
    Count,
}

/// Orders the words of `table` alphabetically with the built-in accent
/// table, so `"será"` sorts as `"sera"` instead of after `"z"`.
#[inline]
#[must_use]
pub fn order_words(table: &FrequencyTable) -> Vec<&str> {
    order_words_with(table, default_folder())
}

/// Orders the words of `table` by `(folder.fold(word), word)`.
///
/// The original spelling breaks ties between words that fold to the same
/// key, so `"cafe"` always precedes `"café"`. Counts are never consulted.
#[must_use]
pub fn order_words_with<'t>(table: &'t FrequencyTable, folder: &AccentFolder) -> Vec<&'t str> {
    let mut pairs: Vec<(String, &str)> = table.words().map(|w| (folder.fold(w), w)).collect();
    // keys are unique so the composite key is a strict total order
    pairs.sort_unstable();
    pairs.into_iter().map(|(_, word)| word).collect()
}

/// Orders the words of `table` by descending count, falling back to the
/// alphabetical collation of [`order_words_with`] for equal counts.
#[must_use]
pub fn order_by_count<'t>(table: &'t FrequencyTable, folder: &AccentFolder) -> Vec<&'t str> {
    let mut entries: Vec<(Reverse<u64>, String, &str)> = table
        .iter()
        .map(|(word, count)| (Reverse(*count), folder.fold(word), word.as_str()))
        .collect();
    entries.sort_unstable();
    entries.into_iter().map(|(_, _, word)| word).collect()
}

/// Orders `table` according to `sort`.
#[inline]
#[must_use]
pub fn order<'t>(
    table: &'t FrequencyTable,
    folder: &AccentFolder,
    sort: SortOrder,
) -> Vec<&'t str> {
    match sort {
        SortOrder::Alpha => order_words_with(table, folder),
        SortOrder::Count => order_by_count(table, folder),
    }
}
