// SPDX-License-Identifier: MIT OR Apache-2.0
//! Presentation-facing prediction state.
//!
//! A session starts `Idle`. Each submission evaluates synchronously and
//! replaces the state with `Resolved` or `Failed`; nothing from the previous
//! outcome survives.

use lexicon_store::Vector;

use crate::error::PredictError;
use crate::predictor::{PredictionResult, Predictor};

/// Current outcome exposed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No prediction has been requested yet.
    #[default]
    Idle,
    /// The last request produced a prediction.
    Resolved {
        /// The prediction.
        result: PredictionResult,
        /// The target vector the prompt resolved to.
        target: Vector,
    },
    /// The last request failed.
    Failed(PredictError),
}

/// Holds the latest prediction outcome.
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    state: SessionState,
}

impl PredictionSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a prediction and makes its outcome the current state.
    pub fn submit(&mut self, predictor: &Predictor, prompt: &str) -> &SessionState {
        self.state = match predictor.evaluate(prompt) {
            Ok((result, target)) => SessionState::Resolved { result, target },
            Err(e) => SessionState::Failed(e),
        };
        &self.state
    }

    /// Returns to the idle state.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current prediction, if the last request succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<&PredictionResult> {
        match &self.state {
            SessionState::Resolved { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The current error, if the last request failed.
    #[must_use]
    pub const fn error(&self) -> Option<&PredictError> {
        match &self.state {
            SessionState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The resolved target vector of the current prediction.
    #[must_use]
    pub const fn target(&self) -> Option<&Vector> {
        match &self.state {
            SessionState::Resolved { target, .. } => Some(target),
            _ => None,
        }
    }

    /// The word to highlight in tables and plots.
    #[must_use]
    pub fn highlighted_word(&self) -> Option<&str> {
        self.result().map(|r| r.predicted_word.as_str())
    }

    /// Whether nothing has been submitted since creation or the last reset.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }
}
