// SPDX-License-Identifier: MIT OR Apache-2.0
//! Character-grid scatter plot of the vector space.
//!
//! Word vectors, the target context vector and the segment joining the
//! target to the predicted word are projected onto a 2D grid. The isometric
//! view shows all three axes; the plane views drop one axis.

use std::fmt::Write as _;

use lexicon_store::{Axis, Lexicon, Vector};

use crate::cli::PlotView;
use crate::style::{styled, Icons, Theme};

/// Default grid width in cells.
pub const PLOT_WIDTH: usize = 64;
/// Default grid height in cells.
pub const PLOT_HEIGHT: usize = 24;
/// Smallest grid side accepted by [`ScatterPlot::with_size`].
pub const PLOT_MIN_SIDE: usize = 8;

const COS_30: f64 = 0.866_025_403_784_438_6;
const SIN_30: f64 = 0.5;

/// What occupies a grid cell, used to pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Axis,
    Link,
    Point,
    Chosen,
    Target,
    Label,
    ChosenLabel,
}

impl Cell {
    /// Axis and link strokes may be overwritten by markers and labels.
    const fn is_background(self) -> bool {
        matches!(self, Self::Empty | Self::Axis | Self::Link)
    }
}

/// Projects a vector to screen space (x right, y up).
#[must_use]
pub fn project(view: PlotView, v: &Vector) -> (f64, f64) {
    let n = v.get(Axis::Nature);
    let e = v.get(Axis::Emotion);
    let a = v.get(Axis::Action);
    match view {
        PlotView::Isometric => ((n - a) * COS_30, e - (n + a) * SIN_30),
        PlotView::NatureEmotion => (n, e),
        PlotView::NatureAction => (n, a),
        PlotView::EmotionAction => (e, a),
    }
}

/// Axes drawn in a view, with their unit endpoints.
fn visible_axes(view: PlotView) -> Vec<(Axis, Vector)> {
    let unit = |axis: Axis| {
        let mut c = [0.0; 3];
        c[axis.index()] = 1.0;
        (axis, Vector::from(c))
    };
    match view {
        PlotView::Isometric => Axis::ALL.into_iter().map(unit).collect(),
        PlotView::NatureEmotion => vec![unit(Axis::Nature), unit(Axis::Emotion)],
        PlotView::NatureAction => vec![unit(Axis::Nature), unit(Axis::Action)],
        PlotView::EmotionAction => vec![unit(Axis::Emotion), unit(Axis::Action)],
    }
}

/// Screen-space bounds mapped onto the grid.
#[derive(Debug, Clone, Copy)]
struct Frame {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    width: usize,
    height: usize,
}

impl Frame {
    fn fit(points: &[(f64, f64)], width: usize, height: usize) -> Self {
        let mut frame = Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            width,
            height,
        };
        for &(x, y) in points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            frame.min_x = frame.min_x.min(x);
            frame.max_x = frame.max_x.max(x);
            frame.min_y = frame.min_y.min(y);
            frame.max_y = frame.max_y.max(y);
        }
        if frame.min_x > frame.max_x {
            (frame.min_x, frame.max_x, frame.min_y, frame.max_y) = (-1.0, 1.0, -1.0, 1.0);
        }
        if frame.max_x - frame.min_x < f64::EPSILON {
            frame.min_x -= 1.0;
            frame.max_x += 1.0;
        }
        if frame.max_y - frame.min_y < f64::EPSILON {
            frame.min_y -= 1.0;
            frame.max_y += 1.0;
        }
        frame
    }

    /// Grid cell `(col, row)` of a screen point; `None` for non-finite input.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn cell(&self, (x, y): (f64, f64)) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let fx = (x - self.min_x) / (self.max_x - self.min_x);
        let fy = (self.max_y - y) / (self.max_y - self.min_y);
        let col = (fx * (self.width - 1) as f64).round().clamp(0.0, (self.width - 1) as f64);
        let row = (fy * (self.height - 1) as f64).round().clamp(0.0, (self.height - 1) as f64);
        Some((col as usize, row as usize))
    }
}

/// Character grid with a style tag per cell.
struct Canvas {
    chars: Vec<Vec<char>>,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            chars: vec![vec![' '; width]; height],
            cells: vec![vec![Cell::Empty; width]; height],
        }
    }

    fn width(&self) -> usize {
        self.chars.first().map_or(0, Vec::len)
    }

    fn put(&mut self, (col, row): (usize, usize), ch: char, kind: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = kind;
            self.chars[row][col] = ch;
        }
    }

    fn is_background(&self, (col, row): (usize, usize)) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|c| c.is_background())
    }

    /// Draws a stroke between two cells, leaving existing markers alone.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap
    )]
    fn line(&mut self, from: (usize, usize), to: (usize, usize), ch: char, kind: Cell) {
        let (c0, r0) = (from.0 as f64, from.1 as f64);
        let (c1, r1) = (to.0 as f64, to.1 as f64);
        let steps = from.0.abs_diff(to.0).max(from.1.abs_diff(to.1)).max(1);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let cell = (
                (c0 + (c1 - c0) * t).round() as usize,
                (r0 + (r1 - r0) * t).round() as usize,
            );
            if self.is_background(cell) {
                self.put(cell, ch, kind);
            }
        }
    }

    /// Writes a label right of a marker when every cell it needs is free.
    fn label(&mut self, (col, row): (usize, usize), text: &str, kind: Cell) -> bool {
        let start = col + 2;
        let len = text.chars().count();
        if start + len > self.width() {
            return false;
        }
        if !(start..start + len).all(|c| self.is_background((c, row))) {
            return false;
        }
        for (i, ch) in text.chars().enumerate() {
            self.put((start + i, row), ch, kind);
        }
        true
    }

    fn render(&self, theme: &Theme) -> String {
        let mut output = String::new();
        for (chars, cells) in self.chars.iter().zip(&self.cells) {
            let mut run = String::new();
            let mut run_kind = Cell::Empty;
            let mut line = String::new();
            for (&ch, &kind) in chars.iter().zip(cells) {
                if kind != run_kind && !run.is_empty() {
                    line.push_str(&style_run(&run, run_kind, theme));
                    run.clear();
                }
                run_kind = kind;
                run.push(ch);
            }
            line.push_str(&style_run(&run, run_kind, theme));
            let _ = writeln!(output, "{}", line.trim_end());
        }
        output
    }
}

fn style_run(run: &str, kind: Cell, theme: &Theme) -> String {
    match kind {
        Cell::Empty => run.to_string(),
        Cell::Axis => styled(run, theme.border),
        Cell::Link => styled(run, theme.info),
        Cell::Point => styled(run, theme.keyword),
        Cell::Label => styled(run, theme.muted),
        Cell::Chosen | Cell::ChosenLabel => styled(run, theme.highlight),
        Cell::Target => styled(run, theme.target),
    }
}

/// Scatter plot configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScatterPlot {
    view: PlotView,
    width: usize,
    height: usize,
}

impl ScatterPlot {
    /// Creates a plot of the default size.
    #[must_use]
    pub const fn new(view: PlotView) -> Self {
        Self {
            view,
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }

    /// Overrides the grid size; each side is at least [`PLOT_MIN_SIDE`] cells.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(PLOT_MIN_SIDE);
        self.height = height.max(PLOT_MIN_SIDE);
        self
    }

    /// Renders words, the target and the link to the predicted word.
    #[must_use]
    pub fn render(
        &self,
        lexicon: &Lexicon,
        highlighted: Option<&str>,
        target: Option<&Vector>,
        theme: &Theme,
        icons: &Icons,
    ) -> String {
        let axes = visible_axes(self.view);
        let origin = project(self.view, &Vector::default());

        let mut screen: Vec<(f64, f64)> = vec![origin];
        screen.extend(axes.iter().map(|(_, end)| project(self.view, end)));
        screen.extend(lexicon.iter().map(|(_, v)| project(self.view, v)));
        if let Some(t) = target {
            screen.push(project(self.view, t));
        }
        let frame = Frame::fit(&screen, self.width, self.height);
        let mut canvas = Canvas::new(self.width, self.height);

        if let Some(o) = frame.cell(origin) {
            for (axis, end) in &axes {
                if let Some(e) = frame.cell(project(self.view, end)) {
                    canvas.line(o, e, icons.axis, Cell::Axis);
                    let tag = axis.label().chars().next().unwrap_or('?');
                    canvas.put(e, tag, Cell::Label);
                }
            }
        }

        let chosen = highlighted.and_then(|w| lexicon.get(w).map(|v| (w, v)));
        let target_cell = target.and_then(|t| frame.cell(project(self.view, t)));
        if let (Some(tc), Some((_, v))) = (target_cell, chosen) {
            if let Some(wc) = frame.cell(project(self.view, v)) {
                canvas.line(tc, wc, icons.link, Cell::Link);
            }
        }

        let mut placed: Vec<((usize, usize), &str, Cell)> = Vec::new();
        for (word, v) in lexicon.iter() {
            if Some(word) == highlighted {
                continue;
            }
            if let Some(c) = frame.cell(project(self.view, v)) {
                canvas.put(c, icons.point, Cell::Point);
                placed.push((c, word, Cell::Label));
            }
        }
        if let Some((word, v)) = chosen {
            if let Some(c) = frame.cell(project(self.view, v)) {
                canvas.put(c, icons.chosen, Cell::Chosen);
                placed.insert(0, (c, word, Cell::ChosenLabel));
            }
        }
        if let Some(tc) = target_cell {
            canvas.put(tc, icons.target, Cell::Target);
            placed.insert(0, (tc, "target", Cell::Target));
        }
        for (cell, text, kind) in placed {
            canvas.label(cell, text, kind);
        }

        let mut output = format!(
            "{} {}\n",
            styled("Vector Space", theme.header),
            styled(format!("({})", self.view.describe()), theme.muted)
        );
        output.push_str(&canvas.render(theme));
        output.push_str(&self.legend(chosen.map(|(w, _)| w), target, theme, icons));
        output
    }

    fn legend(
        &self,
        chosen: Option<&str>,
        target: Option<&Vector>,
        theme: &Theme,
        icons: &Icons,
    ) -> String {
        let axes: Vec<String> = visible_axes(self.view)
            .iter()
            .map(|(axis, _)| {
                let label = axis.label();
                format!("{}={label}", &label[..1])
            })
            .collect();
        let mut legend = format!(
            "  {} word  {} axes {}",
            styled(icons.point, theme.keyword),
            styled(icons.axis, theme.border),
            styled(axes.join(" "), theme.muted)
        );
        if let Some(t) = target {
            let _ = write!(
                legend,
                "\n  {} target {}",
                styled(icons.target, theme.target),
                styled(t, theme.number)
            );
        }
        if let Some(word) = chosen {
            let _ = write!(
                legend,
                "\n  {} predicted {}",
                styled(icons.chosen, theme.highlight),
                styled(word, theme.highlight)
            );
        }
        legend
    }
}
