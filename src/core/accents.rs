// src/core/accents.rs
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Accented Latin letters and the base letter each one sorts as.
#[rustfmt::skip]
const BASE_TABLE: &[(char, char)] = &[
    ('à', 'a'), ('á', 'a'), ('â', 'a'), ('ã', 'a'), ('ä', 'a'),
    ('è', 'e'), ('é', 'e'), ('ê', 'e'), ('ë', 'e'),
    ('ì', 'i'), ('í', 'i'), ('î', 'i'), ('ï', 'i'),
    ('ò', 'o'), ('ó', 'o'), ('ô', 'o'), ('õ', 'o'), ('ö', 'o'),
    ('ù', 'u'), ('ú', 'u'), ('û', 'u'), ('ü', 'u'),
    ('ç', 'c'),
    ('À', 'A'), ('Á', 'A'), ('Â', 'A'), ('Ã', 'A'), ('Ä', 'A'),
    ('È', 'E'), ('É', 'E'), ('Ê', 'E'), ('Ë', 'E'),
    ('Ì', 'I'), ('Í', 'I'), ('Î', 'I'), ('Ï', 'I'),
    ('Ò', 'O'), ('Ó', 'O'), ('Ô', 'O'), ('Õ', 'O'), ('Ö', 'O'),
    ('Ù', 'U'), ('Ú', 'U'), ('Û', 'U'), ('Ü', 'U'),
    ('Ç', 'C'),
];

static DEFAULT_FOLDER: LazyLock<AccentFolder> = LazyLock::new(AccentFolder::default);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccentTableError {
    /// A character is both folded and produced by folding, so folding twice
    /// would differ from folding once.
    #[error("'{0}' is both a source and a target of accent mappings")]
    Chained(char),
}

/// Per-code-point substitution table used to build collation keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentFolder {
    table: HashMap<char, char>,
}

impl Default for AccentFolder {
    fn default() -> Self {
        Self {
            table: BASE_TABLE.iter().copied().collect(),
        }
    }
}

impl AccentFolder {
    /// Builds a folder from the built-in table plus `extra` mappings. Extra
    /// mappings replace built-in ones for the same source character.
    ///
    /// # Errors
    ///
    /// Returns [`AccentTableError::Chained`] if a resulting target is also a
    /// source, e.g. `ñ -> n` together with `n -> m`.
    pub fn with_mappings(
        extra: impl IntoIterator<Item = (char, char)>,
    ) -> Result<Self, AccentTableError> {
        let mut folder = Self::default();
        folder.table.extend(extra);
        folder.table.retain(|from, to| from != to);

        let mut targets: Vec<char> = folder.table.values().copied().collect();
        targets.sort_unstable();
        if let Some(c) = targets.into_iter().find(|c| folder.table.contains_key(c)) {
            return Err(AccentTableError::Chained(c));
        }
        Ok(folder)
    }

    /// Returns `word` with every accented letter replaced by its base letter.
    /// The result has the same number of characters as the input.
    #[inline]
    #[must_use]
    pub fn fold(&self, word: &str) -> String {
        word.chars()
            .map(|c| self.table.get(&c).copied().unwrap_or(c))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Folds `word` with the built-in table.
#[inline]
#[must_use]
pub fn fold_accents(word: &str) -> String {
    default_folder().fold(word)
}

/// The built-in table, built once on first use.
#[must_use]
pub(crate) fn default_folder() -> &'static AccentFolder {
    &DEFAULT_FOLDER
}
