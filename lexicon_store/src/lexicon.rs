// SPDX-License-Identifier: MIT OR Apache-2.0
//! Immutable word and prompt-target vector tables.
//!
//! Both tables keep insertion order. The predictor's tie-break depends on
//! lexicon order, and the shell lists suggested prompts in target order.

use std::collections::HashMap;

use crate::error::{LexiconError, Result};
use crate::vector::Vector;

/// Ordered key -> vector table with unique, non-blank keys.
#[derive(Debug, Clone, Default, PartialEq)]
struct OrderedTable {
    entries: Vec<(String, Vector)>,
    index: HashMap<String, usize>,
}

impl OrderedTable {
    fn from_entries<I, K>(
        entries: I,
        check_key: fn(&str) -> Result<()>,
        duplicate_err: fn(String) -> LexiconError,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vector)>,
        K: Into<String>,
    {
        let mut table = Self::default();
        for (key, vector) in entries {
            let key = key.into();
            check_key(&key)?;
            if table.index.contains_key(&key) {
                return Err(duplicate_err(key));
            }
            table.index.insert(key.clone(), table.entries.len());
            table.entries.push((key, vector));
        }
        Ok(table)
    }

    fn get(&self, key: &str) -> Option<&Vector> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Candidate pool: word -> vector, fixed after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    table: OrderedTable,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lexicon from `(word, vector)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::EmptyWord`] for a blank word and
    /// [`LexiconError::DuplicateWord`] when a word repeats.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vector)>,
        K: Into<String>,
    {
        let table = OrderedTable::from_entries(
            entries,
            |word| {
                if word.trim().is_empty() {
                    return Err(LexiconError::EmptyWord);
                }
                Ok(())
            },
            LexiconError::DuplicateWord,
        )?;
        Ok(Self { table })
    }

    /// Looks up the vector of a word.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Vector> {
        self.table.get(word)
    }

    /// Iterates `(word, vector)` pairs in lexicon order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.table.iter()
    }

    /// Iterates words in lexicon order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.table.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }
}

/// Precomputed context vectors keyed by prompt text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptTargets {
    table: OrderedTable,
}

impl PromptTargets {
    /// Creates an empty target table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from `(prompt, target)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::EmptyPromptKey`] for a blank prompt,
    /// [`LexiconError::UntrimmedPromptKey`] for a prompt with surrounding
    /// whitespace and [`LexiconError::DuplicatePrompt`] when a prompt repeats.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vector)>,
        K: Into<String>,
    {
        let table = OrderedTable::from_entries(
            entries,
            |prompt| {
                if prompt.trim().is_empty() {
                    return Err(LexiconError::EmptyPromptKey);
                }
                // Lookups use the trimmed prompt.
                if prompt.trim() != prompt {
                    return Err(LexiconError::UntrimmedPromptKey(prompt.to_string()));
                }
                Ok(())
            },
            LexiconError::DuplicatePrompt,
        )?;
        Ok(Self { table })
    }

    /// Exact, case-sensitive lookup of a prompt's target vector.
    ///
    /// No trimming happens here; callers pass the already-trimmed prompt.
    #[must_use]
    pub fn resolve_target(&self, prompt: &str) -> Option<&Vector> {
        self.table.get(prompt)
    }

    /// The supported prompts, in table order.
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.table.keys()
    }

    /// Iterates `(prompt, target)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.table.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }
}
