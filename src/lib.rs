// src/lib.rs
//! Word frequency counting with accent-aware alphabetical ordering.
//!
//! Text is split on whitespace, each word is lowercased and counted, and the
//! distinct words are listed in the order of their accent-folded spelling,
//! so `"será"` sits between `"que"` and `"texto"`.
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use cli::{Args, Settings, run, run_with_writer};
pub use config::{CONFIG_FILE_NAME, Config, load_config, load_config_file};
pub use crate::core::accents::{AccentFolder, AccentTableError, fold_accents};
pub use crate::core::case::{AsciiLowercase, CaseFolder, CaseMode, PreserveCase, SimpleLowercase};
pub use crate::core::collate::{SortOrder, order_by_count, order_words, order_words_with};
pub use crate::core::frequency::{count_words, count_words_with};
pub use crate::core::ignore::{IGNORE_FILE_NAME, Patterns, load_ignore_patterns};
pub use crate::core::pipeline::{Pipeline, process, process_file};
pub use crate::core::scanner::{collect_files, count_paths};
pub use crate::core::source::{open_file, read_text};
pub use crate::core::tokenizer::{tokenize, words};
pub use models::{FileError, FileErrorKind, FrequencyTable, WordCount};
pub use utils::{OutputFormat, select, write_report};
