// SPDX-License-Identifier: MIT OR Apache-2.0
//! Help text for the interactive shell.

use std::fmt::Write as _;

use crate::style::{styled, Theme};

const COMMANDS: [(&str, &str); 8] = [
    ("help, \\h", "Show this help message"),
    ("exit, quit, \\q", "Exit the shell"),
    ("clear, \\c", "Clear the screen and the last prediction"),
    ("poem, \\p", "Show the context poem"),
    ("prompts, \\s", "List the suggested prompts"),
    ("vectors, \\v", "Show the vector dictionary"),
    ("plot, \\g", "Plot the vector space"),
    ("rank <prompt>, \\r", "Rank every word by distance to the prompt's target"),
];

/// Formats the interactive help text.
#[must_use]
pub fn format_help(theme: &Theme) -> String {
    let mut output = format!("{}\n\n", styled("Word Prediction Shell", theme.header));
    output.push_str(&styled("Commands:\n", theme.header));
    for (cmd, desc) in COMMANDS {
        let _ = writeln!(output, "  {:<20} {desc}", styled(cmd, theme.keyword));
    }
    output.push('\n');
    output.push_str(&styled("Prompts:\n", theme.header));
    output.push_str(
        "  Any other input is a prompt. It is trimmed and looked up exactly\n  \
         (case-sensitive) among the suggested prompts; the word whose vector\n  \
         is nearest to the prompt's target context vector is predicted.\n",
    );
    output.push('\n');
    output.push_str(&styled("Examples:\n", theme.header));
    output.push_str("  > Bunga di\n  > rank Menyentuh\n  > plot\n");
    output
}
