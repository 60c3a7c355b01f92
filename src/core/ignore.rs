// src/core/ignore.rs
pub mod loader;

pub use loader::{IGNORE_FILE_NAME, load_ignore_patterns};

use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    pattern: Pattern,
    negated: bool,
    /// Only matches directories (pattern ended with `/`).
    dir_only: bool,
    /// Matched against a single path component rather than the whole
    /// relative path (pattern had no `/` in it).
    basename: bool,
}

impl Rule {
    fn matches(&self, relative: &str, name: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.basename {
            self.pattern.matches_with(name, MATCH_OPTIONS)
        } else {
            self.pattern.matches_with(relative, MATCH_OPTIONS)
        }
    }
}

/// Gitignore-style rules deciding which files of a walked directory are
/// left out of the count. Later rules take precedence over earlier ones.
#[derive(Debug, Default)]
pub struct Patterns {
    rules: Vec<Rule>,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parses one line of an ignore file and adds the resulting rule.
    ///
    /// Supported forms:
    /// - blank lines and `#` comments are skipped
    /// - `!pattern` re-includes paths an earlier rule excluded
    /// - `dir/` matches a directory and therefore everything below it
    /// - `/pattern` is anchored to the root of the walk
    /// - a pattern with no `/` matches a file or directory name at any depth
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a valid glob pattern.
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (body, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |rest| (rest, true));
        let (body, dir_only) = body
            .strip_suffix('/')
            .map_or((body, false), |rest| (rest, true));
        let (body, anchored) = body
            .strip_prefix('/')
            .map_or((body, false), |rest| (rest, true));

        if body.is_empty() {
            return Ok(());
        }

        let pattern =
            Pattern::new(body).with_context(|| format!("Invalid ignore pattern: {line}"))?;
        self.rules.push(Rule {
            pattern,
            negated,
            dir_only,
            basename: !anchored && !body.contains('/'),
        });
        Ok(())
    }

    /// Returns `true` if `relative` (a path relative to the walk root) is
    /// ignored, either itself or because one of its parent directories is.
    #[must_use]
    pub fn matches(&self, relative: impl AsRef<Path>, is_dir: bool) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let names: Vec<String> = relative
            .as_ref()
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let mut prefix = String::new();
        for (index, name) in names.iter().enumerate() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(name);

            let last = index.saturating_add(1) == names.len();
            if self.decide(&prefix, name, !last || is_dir) {
                return true;
            }
        }
        false
    }

    fn decide(&self, relative: &str, name: &str, is_dir: bool) -> bool {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(relative, name, is_dir))
            .is_some_and(|rule| !rule.negated)
    }
}
