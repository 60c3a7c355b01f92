// src/core/tokenizer.rs

/// Lazily yields the whitespace-delimited words of `text`.
///
/// Any run of Unicode whitespace, newlines included, separates two words.
/// Leading and trailing whitespace produce nothing.
#[inline]
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Splits `text` into words, leaving their content untouched.
///
/// Case, diacritics and attached punctuation all survive, so `"teste."`
/// stays `"teste."`.
#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    words(text).collect()
}
