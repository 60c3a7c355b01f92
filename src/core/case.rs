// src/core/case.rs
use clap::ValueEnum;
use serde::Deserialize;

/// Maps a word to the form used as its counting key.
pub trait CaseFolder {
    fn fold_case(&self, word: &str) -> String;
}

/// One-to-one lowercase mapping per code point. Diacritics are kept, so
/// `"É"` becomes `"é"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLowercase;

impl CaseFolder for SimpleLowercase {
    fn fold_case(&self, word: &str) -> String {
        // full lowercase can expand a code point (U+0130); keep its first char
        word.chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect()
    }
}

/// Lowercases `A-Z` only and leaves every other code point alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiLowercase;

impl CaseFolder for AsciiLowercase {
    fn fold_case(&self, word: &str) -> String {
        word.to_ascii_lowercase()
    }
}

/// Counts words exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveCase;

impl CaseFolder for PreserveCase {
    fn fold_case(&self, word: &str) -> String {
        word.to_owned()
    }
}

/// Selectable case-folding strategy, shared by the command line and the
/// config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Simple,
    Ascii,
    Preserve,
}

impl CaseMode {
    #[inline]
    #[must_use]
    pub fn folder(self) -> &'static dyn CaseFolder {
        match self {
            Self::Simple => &SimpleLowercase,
            Self::Ascii => &AsciiLowercase,
            Self::Preserve => &PreserveCase,
        }
    }
}
