// SPDX-License-Identifier: MIT OR Apache-2.0
//! Prediction errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a prediction request produced no result.
///
/// All variants are recoverable; retrying the same input yields the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictError {
    /// The prompt is empty after trimming.
    #[error("please enter a prompt")]
    EmptyPrompt,

    /// The trimmed prompt has no entry in the prompt targets.
    #[error(
        "prompt \"{prompt}\" has no predefined target context vector; try one of the suggested prompts"
    )]
    UnknownPrompt {
        /// The trimmed prompt that failed to resolve.
        prompt: String,
    },

    /// The lexicon holds no word with a finite distance to the target.
    #[error("no candidate words available")]
    EmptyLexicon,
}

/// A specialized Result type for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(PredictError::EmptyPrompt.to_string(), "please enter a prompt");
        assert_eq!(
            PredictError::UnknownPrompt {
                prompt: "not a real prompt".to_string()
            }
            .to_string(),
            "prompt \"not a real prompt\" has no predefined target context vector; \
             try one of the suggested prompts"
        );
        assert_eq!(
            PredictError::EmptyLexicon.to_string(),
            "no candidate words available"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(PredictError::EmptyLexicon);
        assert!(e.source().is_none());
    }
}
