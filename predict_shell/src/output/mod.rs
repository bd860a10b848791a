// SPDX-License-Identifier: MIT OR Apache-2.0
//! Output formatting for shell results.
//!
//! Each panel of the simulation (poem, prompts, prediction, vector table,
//! ranking and plot) has a formatter taking a theme.

mod banner;
mod help;
mod plot;
mod poem;
mod prediction;
mod table;
mod vectors;

pub use banner::{compact_banner, welcome_banner};
pub use help::format_help;
pub use plot::{project, ScatterPlot, PLOT_HEIGHT, PLOT_MIN_SIDE, PLOT_WIDTH};
pub use poem::{format_poem, format_prompts};
pub use prediction::{
    format_error, format_json, format_prediction, format_state, IDLE_PLACEHOLDER,
};
pub use table::TableBuilder;
pub use vectors::{format_rank, format_vector_table};
