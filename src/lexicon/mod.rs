use std::fs;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use crate::error::{Result, UdGuardError};

/// Folds the variation the corpus shows in closed-class surface forms:
/// lowercase, with typographic apostrophes normalized to `'`.
#[must_use]
pub fn normalize(form: &str) -> String {
    form.to_lowercase().replace(['‘', '’'], "'")
}

/// Allow-list of fixed multiword expressions, keyed by a surface word and
/// mapping to the surface words allowed to precede it.
///
/// Loaded once before validation begins; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct FixedLexicon {
    allowed: IndexMap<String, IndexSet<String>>,
}

impl FixedLexicon {
    /// Reads a fixed-expression list: one phrase of two or more
    /// whitespace-separated surface words per line.
    ///
    /// # Errors
    /// `FileRead` when the file cannot be read, `Lexicon` for a line with
    /// fewer than two words.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| UdGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content, path)
    }

    /// # Errors
    /// `Lexicon` for a line with fewer than two words.
    pub fn parse_str(input: &str, source: &Path) -> Result<Self> {
        let mut allowed: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for (idx, line) in input.lines().enumerate() {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            if words.len() < 2 {
                return Err(UdGuardError::Lexicon {
                    path: source.to_path_buf(),
                    line: idx + 1,
                    message: format!("expected at least two words, found {:?}", line.trim()),
                });
            }
            for pair in words.windows(2) {
                allowed
                    .entry(normalize(pair[1]))
                    .or_default()
                    .insert(normalize(pair[0]));
            }
        }
        Ok(Self { allowed })
    }

    /// Whether `form` (normalized) continues any known fixed expression.
    #[must_use]
    pub fn known_continuation(&self, form: &str) -> bool {
        self.allowed.contains_key(form)
    }

    /// Whether `prev form` (both normalized) is a known adjacent pair.
    #[must_use]
    pub fn allows(&self, form: &str, prev: &str) -> bool {
        self.allowed
            .get(form)
            .is_some_and(|preds| preds.contains(prev))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
