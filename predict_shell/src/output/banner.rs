// SPDX-License-Identifier: MIT OR Apache-2.0
//! Welcome banner for shell startup.

use crate::style::{styled, Theme};

const TITLE: &str = "LLM Word Prediction Simulation";
const TAGLINE: &str =
    "See how a language model \"thinks\" of the next word by comparing context and word vectors.";

/// Generates the welcome banner with version and hints.
#[must_use]
pub fn welcome_banner(version: &str, theme: &Theme) -> String {
    let rule = "\u{2500}".repeat(TITLE.len() + 4);
    format!(
        "{}\n  {}  {}\n{}\n{}\n\nType '{}' for commands, {} to complete prompts.\n",
        styled(&rule, theme.border),
        styled(TITLE, theme.header),
        styled(format!("v{version}"), theme.muted),
        styled(&rule, theme.border),
        styled(TAGLINE, theme.info),
        styled("help", theme.string),
        styled("Tab", theme.muted)
    )
}

/// Generates a compact one-line banner.
#[must_use]
pub fn compact_banner(version: &str, theme: &Theme) -> String {
    format!(
        "{} {}\n",
        styled(TITLE, theme.header),
        styled(format!("v{version}"), theme.muted)
    )
}
