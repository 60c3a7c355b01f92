// src/config.rs
use anyhow::{Context as _, Result, anyhow};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::accents::AccentFolder;
use crate::core::case::CaseMode;
use crate::core::collate::SortOrder;
use crate::utils::OutputFormat;

pub const CONFIG_FILE_NAME: &str = "wfc.toml";

/// Settings read from `wfc.toml`. Anything left out falls back to the
/// command line or the built-in default.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub case: Option<CaseMode>,
    pub sort: Option<SortOrder>,
    pub format: Option<OutputFormat>,
    pub top: Option<usize>,
    pub min_count: Option<u64>,
    pub exclude: Option<Vec<String>>,
    /// Extra accent substitutions, one character to one character.
    pub accents: BTreeMap<String, String>,
}

impl Config {
    /// Parses a config file's contents.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or has unknown keys.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!("Failed to parse config: {e}"))
    }

    /// Builds the accent folder described by the `[accents]` table.
    ///
    /// # Errors
    ///
    /// Returns an error if a key or value is not exactly one character, or
    /// if the mappings chain into each other.
    pub fn accent_folder(&self) -> Result<AccentFolder> {
        let mut mappings = Vec::with_capacity(self.accents.len());
        for (from, to) in &self.accents {
            mappings.push((single_char(from)?, single_char(to)?));
        }
        AccentFolder::with_mappings(mappings).context("Invalid [accents] table")
    }
}

fn single_char(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(anyhow!(
            "Accent mappings must be single characters, got {value:?}"
        )),
    }
}

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = Config::parse(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    tracing::debug!(file = %path.display(), "loaded config");
    Ok(config)
}

/// Finds `wfc.toml` in `dir` or its nearest ancestor.
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|d| d.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the config found from `dir` upwards, or the defaults when there is
/// none.
///
/// # Errors
///
/// Returns an error if a config file is found but cannot be read or parsed.
pub fn load_config(dir: &Path) -> Result<Config> {
    find_config(dir).map_or_else(|| Ok(Config::default()), |path| load_config_file(&path))
}
