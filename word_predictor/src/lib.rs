// SPDX-License-Identifier: MIT OR Apache-2.0
//! Word Predictor - nearest-neighbor next-word selection
//!
//! Demonstrates, in simplified form, how a language model might choose the
//! next word: the prompt resolves to a precomputed context vector, and the
//! lexicon word whose vector is closest (Euclidean distance) wins.
//!
//! # Flow
//!
//! 1. Trim the prompt; empty input fails with [`PredictError::EmptyPrompt`]
//! 2. Look the trimmed prompt up in the prompt targets; a miss fails with
//!    [`PredictError::UnknownPrompt`]
//! 3. Scan the lexicon linearly, keeping the first word with the strictly
//!    smallest distance; an empty lexicon fails with [`PredictError::EmptyLexicon`]
//!
//! # Quick Start
//!
//! ```rust
//! use lexicon_store::Scenario;
//! use word_predictor::{PredictionSession, Predictor};
//!
//! let predictor = Predictor::from_scenario(&Scenario::builtin());
//! let result = predictor.predict("  Bunga di ").unwrap();
//! assert_eq!(result.full_sentence, "Bunga di taman");
//!
//! let mut session = PredictionSession::new();
//! session.submit(&predictor, "Hati yang");
//! assert_eq!(session.highlighted_word(), Some("rindu"));
//! ```

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![warn(missing_docs)]

mod error;
mod predictor;
mod session;

pub use error::{PredictError, Result};
pub use predictor::{Candidate, PredictionResult, Predictor};
pub use session::{PredictionSession, SessionState};
