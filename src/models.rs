// src/models.rs
pub mod file_error;
pub mod frequency_table;
pub mod word_count;

pub use file_error::{FileError, FileErrorKind};
pub use frequency_table::FrequencyTable;
pub use word_count::WordCount;
