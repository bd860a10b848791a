// SPDX-License-Identifier: MIT OR Apache-2.0
// Command-line argument parsing for the prediction shell.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::output::{PLOT_HEIGHT, PLOT_WIDTH};

/// predict-sim: watch a toy language model pick the next word by vector distance.
#[derive(Parser, Debug)]
#[command(name = "predict-sim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Predict the next word for a single prompt and exit
    #[arg(short = 'c', long = "command")]
    pub command: Option<String>,

    /// Predict the next word for each non-blank line of a file
    #[arg(short = 'f', long = "file", conflicts_with = "command")]
    pub file: Option<PathBuf>,

    /// Output format for non-interactive mode
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,

    /// Scenario file (JSON) replacing the built-in poem, words and prompts
    #[arg(long = "lexicon", env = "PREDICT_SIM_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Projection used by the vector space plot
    #[arg(long = "view", value_enum, default_value_t = PlotView::Isometric)]
    pub view: PlotView,

    /// Width of the vector space plot in cells (minimum 8)
    #[arg(long = "plot-width", default_value_t = PLOT_WIDTH)]
    pub plot_width: usize,

    /// Height of the vector space plot in cells (minimum 8)
    #[arg(long = "plot-height", default_value_t = PLOT_HEIGHT)]
    pub plot_height: usize,

    /// Disable colored output
    #[arg(long = "no-color", env = "NO_COLOR")]
    pub no_color: bool,

    /// Quiet mode: print only the prediction
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log debug diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format for non-interactive results.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable panels and tables (default)
    #[default]
    Table,
    /// One JSON record per prediction
    Json,
}

/// Projection of the three semantic axes onto the terminal.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum PlotView {
    /// All three axes, isometric (default)
    #[default]
    #[value(alias = "iso")]
    Isometric,
    /// Nature across, Emotion up
    NatureEmotion,
    /// Nature across, Action up
    NatureAction,
    /// Emotion across, Action up
    EmotionAction,
}

impl PlotView {
    /// Short description used in plot headers.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Isometric => "isometric",
            Self::NatureEmotion => "Nature x Emotion",
            Self::NatureAction => "Nature x Action",
            Self::EmotionAction => "Emotion x Action",
        }
    }
}
