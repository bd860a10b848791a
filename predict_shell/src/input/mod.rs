// SPDX-License-Identifier: MIT OR Apache-2.0
//! Input handling for the shell (completion).

mod completer;

pub use completer::PromptCompleter;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

/// Readline helper: prompt completion, no hints or highlighting.
#[derive(Debug, Default)]
pub struct PredictHelper {
    completer: PromptCompleter,
}

impl PredictHelper {
    /// Creates a helper completing the given prompts.
    #[must_use]
    pub fn new(prompts: Vec<String>) -> Self {
        Self {
            completer: PromptCompleter::new(prompts),
        }
    }
}

impl Helper for PredictHelper {}

impl Completer for PredictHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for PredictHelper {}

impl Hinter for PredictHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Validator for PredictHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_creation() {
        let _helper = PredictHelper::new(vec!["Bunga di".to_string()]);
    }

    #[test]
    fn test_helper_default() {
        let _helper = PredictHelper::default();
    }
}
