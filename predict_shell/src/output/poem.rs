// SPDX-License-Identifier: MIT OR Apache-2.0
//! Poem and suggested-prompt panels.

use std::fmt::Write as _;

use crate::style::{styled, Icons, Theme};

/// Formats the context poem as a quoted block.
#[must_use]
pub fn format_poem(poem: &str, theme: &Theme) -> String {
    let mut output = format!("{}\n", styled("Context Data (Poem)", theme.header));
    if poem.trim().is_empty() {
        output.push_str(&styled("  (no poem)", theme.muted));
        return output;
    }
    let lines: Vec<String> = poem
        .lines()
        .map(|line| {
            format!(
                "  {} {}",
                styled("\u{2502}", theme.info),
                styled(line, theme.string)
            )
        })
        .collect();
    output.push_str(&lines.join("\n"));
    output
}

/// Formats the prompts that resolve to a target vector.
#[must_use]
pub fn format_prompts(prompts: &[String], theme: &Theme, icons: &Icons) -> String {
    if prompts.is_empty() {
        return styled("(no suggested prompts)", theme.muted);
    }
    let mut output = format!("{}\n", styled("Or try one of these prompts:", theme.header));
    for prompt in prompts {
        let _ = writeln!(
            output,
            "  {} {}",
            styled(icons.bullet, theme.muted),
            styled(prompt, theme.keyword)
        );
    }
    output.truncate(output.trim_end().len());
    output
}
