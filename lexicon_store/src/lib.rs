// SPDX-License-Identifier: MIT OR Apache-2.0
//! Lexicon Store - word vectors and prompt targets for word prediction
//!
//! Holds the static configuration of the word prediction simulation:
//!
//! - **Vectors**: points on three fixed semantic axes (Nature, Emotion, Action)
//!   with Euclidean [`distance`]
//! - **Lexicon**: the candidate pool, word -> vector, in insertion order
//! - **Prompt targets**: precomputed context vectors keyed by prompt text
//! - **Scenarios**: poem + lexicon + targets, built in or loaded from JSON
//!
//! Everything here is immutable once constructed; the predictor receives the
//! tables explicitly rather than reading global state.
//!
//! # Quick Start
//!
//! ```rust
//! use lexicon_store::{distance, Scenario, Vector};
//!
//! let scenario = Scenario::builtin();
//! let target = scenario.targets.resolve_target("Menyentuh").unwrap();
//! let hati = scenario.lexicon.get("hati").unwrap();
//! assert!(distance(target, hati) < 0.1);
//! assert_eq!(distance(&Vector::new(0.0, 0.0, 0.0), &Vector::new(3.0, 4.0, 0.0)), 5.0);
//! ```

#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

mod error;
mod lexicon;
mod scenario;
mod vector;

pub use error::{LexiconError, Result};
pub use lexicon::{Lexicon, PromptTargets};
pub use scenario::{Scenario, BUILTIN_POEM};
pub use vector::{distance, Axis, Vector, DIMENSION};
