// src/core.rs
pub mod accents;
pub mod case;
pub mod collate;
pub mod frequency;
pub mod ignore;
pub mod pipeline;
pub mod scanner;
pub mod source;
pub mod tokenizer;
