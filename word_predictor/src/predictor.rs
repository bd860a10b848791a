// SPDX-License-Identifier: MIT OR Apache-2.0
//! Nearest-neighbor word prediction.

use lexicon_store::{distance, Lexicon, PromptTargets, Scenario, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::error::{PredictError, Result};

/// Outcome of a successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// The lexicon word nearest to the prompt's target vector.
    pub predicted_word: String,
    /// Euclidean distance between the predicted word and the target.
    pub distance: f64,
    /// The trimmed prompt and the predicted word joined by one space.
    pub full_sentence: String,
}

/// A lexicon word scored against a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The lexicon word.
    pub word: String,
    /// The word's vector.
    pub vector: Vector,
    /// Distance from the target vector.
    pub distance: f64,
}

/// Resolves prompts to target vectors and picks the nearest lexicon word.
///
/// The tables are passed in at construction and never change afterwards, so
/// every call is independent and deterministic.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    lexicon: Lexicon,
    targets: PromptTargets,
}

impl Predictor {
    /// Creates a predictor over the given tables.
    #[must_use]
    pub const fn new(lexicon: Lexicon, targets: PromptTargets) -> Self {
        Self { lexicon, targets }
    }

    /// Creates a predictor over a scenario's tables.
    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.lexicon.clone(), scenario.targets.clone())
    }

    /// Returns the candidate pool.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the prompt target table.
    #[must_use]
    pub const fn targets(&self) -> &PromptTargets {
        &self.targets
    }

    /// Suggested prompts, exactly the keys of the target table.
    pub fn suggested_prompts(&self) -> impl Iterator<Item = &str> {
        self.targets.prompts()
    }

    /// Trims the prompt and resolves its target vector.
    ///
    /// # Errors
    ///
    /// [`PredictError::EmptyPrompt`] if the prompt trims to nothing,
    /// [`PredictError::UnknownPrompt`] if the trimmed prompt has no target.
    pub fn resolve<'a>(&self, prompt: &'a str) -> Result<(&'a str, Vector)> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(PredictError::EmptyPrompt);
        }
        self.targets
            .resolve_target(trimmed)
            .map(|target| (trimmed, *target))
            .ok_or_else(|| PredictError::UnknownPrompt {
                prompt: trimmed.to_string(),
            })
    }

    /// Predicts the next word for a prompt.
    ///
    /// Scans the whole lexicon once. On equal distances the word that comes
    /// first in lexicon order wins. Words whose distance is NaN or infinite
    /// are never chosen.
    ///
    /// # Errors
    ///
    /// The errors of [`Predictor::resolve`], plus [`PredictError::EmptyLexicon`]
    /// when no word has a finite distance to the target.
    pub fn predict(&self, prompt: &str) -> Result<PredictionResult> {
        self.evaluate(prompt).map(|(result, _)| result)
    }

    /// Like [`Predictor::predict`], also returning the resolved target.
    #[instrument(skip(self), fields(words = self.lexicon.len()))]
    pub(crate) fn evaluate(&self, prompt: &str) -> Result<(PredictionResult, Vector)> {
        let (trimmed, target) = self.resolve(prompt)?;

        let mut best_word: Option<&str> = None;
        let mut best_dist = f64::INFINITY;
        for (word, vector) in self.lexicon.iter() {
            let dist = distance(&target, vector);
            trace!(word, distance = dist, "candidate");
            if dist < best_dist {
                best_word = Some(word);
                best_dist = dist;
            }
        }

        let word = best_word.ok_or(PredictError::EmptyLexicon)?;
        let dist = best_dist;
        debug!(prompt = trimmed, word, distance = dist, "prediction resolved");

        let result = PredictionResult {
            predicted_word: word.to_string(),
            distance: dist,
            full_sentence: format!("{trimmed} {word}"),
        };
        Ok((result, target))
    }

    /// Scores every lexicon word against the prompt's target, nearest first.
    ///
    /// Words at equal distance keep their lexicon order and NaN distances sort
    /// last, so the first candidate is always the word [`Predictor::predict`]
    /// returns.
    ///
    /// # Errors
    ///
    /// Same as [`Predictor::predict`].
    #[instrument(skip(self), fields(words = self.lexicon.len()))]
    pub fn rank(&self, prompt: &str) -> Result<Vec<Candidate>> {
        let (_, target) = self.resolve(prompt)?;

        let mut candidates: Vec<Candidate> = self
            .lexicon
            .iter()
            .map(|(word, vector)| Candidate {
                word: word.to_string(),
                vector: *vector,
                distance: distance(&target, vector),
            })
            .collect();
        candidates.sort_by(|a, b| {
            a.distance
                .is_nan()
                .cmp(&b.distance.is_nan())
                .then(a.distance.total_cmp(&b.distance))
        });
        match candidates.first() {
            Some(c) if c.distance < f64::INFINITY => Ok(candidates),
            _ => Err(PredictError::EmptyLexicon),
        }
    }
}
