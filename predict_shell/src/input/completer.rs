// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tab completion for shell commands and suggested prompts.

use rustyline::completion::{Completer, Pair};
use rustyline::Context;

const COMMANDS: [&str; 8] = [
    "help", "exit", "quit", "clear", "poem", "prompts", "vectors", "plot",
];

const RANK_PREFIXES: [&str; 2] = ["rank ", "\\r "];

/// Completes whole prompts, since prompts may contain spaces.
#[derive(Debug, Default)]
pub struct PromptCompleter {
    prompts: Vec<String>,
}

impl PromptCompleter {
    /// Creates a completer over the given suggested prompts.
    #[must_use]
    pub fn new(prompts: Vec<String>) -> Self {
        Self { prompts }
    }

    /// Returns the replacement start and candidates for the input up to `pos`.
    fn complete_input(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let input = line.get(..pos).unwrap_or(line);

        for prefix in RANK_PREFIXES {
            if let Some(rest) = input.strip_prefix(prefix) {
                return (prefix.len(), self.filter_prompts(rest));
            }
        }

        let mut candidates = self.filter_prompts(input);
        candidates.extend(
            COMMANDS
                .iter()
                .chain(std::iter::once(&"rank"))
                .filter(|c| !input.is_empty() && c.starts_with(&input.to_lowercase()))
                .map(|c| Pair {
                    display: (*c).to_string(),
                    replacement: if *c == "rank" {
                        "rank ".to_string()
                    } else {
                        (*c).to_string()
                    },
                }),
        );
        (0, candidates)
    }

    /// Prompts starting with `prefix`; matching is case-sensitive like lookup.
    fn filter_prompts(&self, prefix: &str) -> Vec<Pair> {
        self.prompts
            .iter()
            .filter(|p| p.starts_with(prefix))
            .map(|p| Pair {
                display: p.clone(),
                replacement: p.clone(),
            })
            .collect()
    }
}

impl Completer for PromptCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.complete_input(line, pos))
    }
}
