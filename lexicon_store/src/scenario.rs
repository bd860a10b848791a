// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scenario bundles: poem, lexicon and prompt targets.
//!
//! The built-in scenario carries the shipped Indonesian poem and vectors.
//! Alternate scenarios are read from JSON documents whose tables are arrays,
//! so their order survives deserialization.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::lexicon::{Lexicon, PromptTargets};
use crate::vector::Vector;

/// The poem shown as context data.
pub const BUILTIN_POEM: &str =
    "Bunga di taman mekar indah.\nWanginya harum semerbak,\nMenyentuh hati yang rindu.";

const BUILTIN_WORDS: [(&str, [f64; 3]); 14] = [
    ("bunga", [0.95, 0.2, 0.1]),
    ("taman", [0.9, 0.1, 0.2]),
    ("indah", [0.4, 0.7, 0.3]),
    ("wanginya", [0.8, 0.3, 0.1]),
    ("harum", [0.85, 0.25, 0.15]),
    ("semerbak", [0.88, 0.35, 0.2]),
    ("menyentuh", [0.1, 0.6, 0.8]),
    ("hati", [0.2, 0.9, 0.5]),
    ("rindu", [0.1, 0.95, 0.4]),
    ("tersenyum", [0.3, 0.8, 0.9]),
    ("meja", [0.1, -0.5, -0.8]),
    ("berlari", [-0.2, 0.1, 0.95]),
    ("gunung", [0.98, -0.1, 0.05]),
    ("sedih", [0.15, 0.92, 0.3]),
];

const BUILTIN_PROMPTS: [(&str, [f64; 3]); 4] = [
    ("Bunga di", [0.92, 0.15, 0.18]),
    ("Menyentuh", [0.15, 0.92, 0.45]),
    ("Wanginya harum", [0.86, 0.3, 0.18]),
    ("Hati yang", [0.15, 0.98, 0.42]),
];

/// Static configuration consumed by the predictor and the shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    /// Context text shown alongside the predictions.
    pub poem: String,
    /// Candidate words.
    pub lexicon: Lexicon,
    /// Supported prompts and their target vectors.
    pub targets: PromptTargets,
}

/// On-disk form of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    poem: String,
    #[serde(default)]
    words: Vec<WordEntry>,
    #[serde(default)]
    prompts: Vec<PromptEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WordEntry {
    word: String,
    vector: Vector,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PromptEntry {
    prompt: String,
    target: Vector,
}

impl Scenario {
    /// Builds a scenario from already-validated tables.
    #[must_use]
    pub fn new(poem: impl Into<String>, lexicon: Lexicon, targets: PromptTargets) -> Self {
        Self {
            poem: poem.into(),
            lexicon,
            targets,
        }
    }

    /// The shipped poem, 14-word lexicon and four prompt targets.
    #[must_use]
    pub fn builtin() -> Self {
        let lexicon = Lexicon::from_entries(
            BUILTIN_WORDS
                .iter()
                .map(|&(word, vector)| (word, Vector::from(vector))),
        )
        .unwrap_or_default();
        let targets = PromptTargets::from_entries(
            BUILTIN_PROMPTS
                .iter()
                .map(|&(prompt, target)| (prompt, Vector::from(target))),
        )
        .unwrap_or_default();
        Self::new(BUILTIN_POEM, lexicon, targets)
    }

    /// Parses a scenario from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or vectors without
    /// exactly three components, and a lexicon error for blank or repeated keys.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ScenarioFile = serde_json::from_str(json)?;
        let lexicon = Lexicon::from_entries(file.words.into_iter().map(|e| (e.word, e.vector)))?;
        let targets =
            PromptTargets::from_entries(file.prompts.into_iter().map(|e| (e.prompt, e.target)))?;
        Ok(Self::new(file.poem, lexicon, targets))
    }

    /// Reads a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, otherwise the errors
    /// of [`Scenario::from_json`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let scenario = Self::from_json(&json)?;
        debug!(
            words = scenario.lexicon.len(),
            prompts = scenario.targets.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Serializes the scenario to pretty-printed JSON in table order.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        let file = ScenarioFile {
            poem: self.poem.clone(),
            words: self
                .lexicon
                .iter()
                .map(|(word, vector)| WordEntry {
                    word: word.to_string(),
                    vector: *vector,
                })
                .collect(),
            prompts: self
                .targets
                .iter()
                .map(|(prompt, target)| PromptEntry {
                    prompt: prompt.to_string(),
                    target: *target,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Suggested prompts, which are exactly the target keys.
    #[must_use]
    pub fn suggested_prompts(&self) -> Vec<String> {
        self.targets.prompts().map(str::to_string).collect()
    }
}
