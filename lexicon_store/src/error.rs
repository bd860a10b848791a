// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for lexicon construction and scenario loading.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("lexicon word must not be empty")]
    EmptyWord,

    #[error("duplicate lexicon word: {0}")]
    DuplicateWord(String),

    #[error("prompt target key must not be empty")]
    EmptyPromptKey,

    #[error("prompt target key has leading or trailing whitespace: {0:?}")]
    UntrimmedPromptKey(String),

    #[error("duplicate prompt target: {0}")]
    DuplicatePrompt(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for LexiconError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for LexiconError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LexiconError>;
