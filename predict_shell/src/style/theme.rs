// SPDX-License-Identifier: MIT OR Apache-2.0
//! Color theme system for terminal output.

use owo_colors::{OwoColorize, Style};

/// Color theme for terminal output.
///
/// One palette for every panel: prediction, tables, poem and plot.
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub success: Style,
    pub error: Style,
    pub info: Style,

    // Structural
    pub header: Style,
    pub border: Style,
    pub muted: Style,

    // Data types
    pub keyword: Style,
    pub string: Style,
    pub number: Style,

    // Plot markers
    pub highlight: Style,
    pub target: Style,
}

#[allow(clippy::missing_const_for_fn)]
impl Theme {
    /// Creates the dark theme used on color terminals (sky and green accents).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),

            header: Style::new().bright_cyan().bold(),
            border: Style::new().bright_black(),
            muted: Style::new().bright_black(),

            keyword: Style::new().blue(),
            string: Style::new().white().italic(),
            number: Style::new().yellow(),

            highlight: Style::new().bright_green().bold(),
            target: Style::new().bright_red().bold(),
        }
    }

    /// Creates a plain theme with no colors (for piped output).
    #[must_use]
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
            border: Style::new(),
            muted: Style::new(),
            keyword: Style::new(),
            string: Style::new(),
            number: Style::new(),
            highlight: Style::new(),
            target: Style::new(),
        }
    }

    /// Picks the dark theme on a terminal, plain otherwise.
    #[must_use]
    pub fn auto() -> Self {
        if console::Term::stdout().is_term() {
            Self::dark()
        } else {
            Self::plain()
        }
    }
}

/// Applies a style to text, returning the styled string.
pub fn styled<T: std::fmt::Display>(text: T, style: Style) -> String {
    text.style(style).to_string()
}
