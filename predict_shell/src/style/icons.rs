// SPDX-License-Identifier: MIT OR Apache-2.0
//! Unicode and ASCII glyphs for terminal output and the scatter plot.

/// Glyph set for terminal display.
///
/// Provides both Unicode and ASCII variants for terminal compatibility.
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub error: &'static str,
    pub bullet: &'static str,
    pub arrow: &'static str,
    /// Plot marker for an ordinary word.
    pub point: char,
    /// Plot marker for the predicted word.
    pub chosen: char,
    /// Plot marker for the target context vector.
    pub target: char,
    /// Plot axis stroke.
    pub axis: char,
    /// Plot stroke between target and predicted word.
    pub link: char,
}

impl Icons {
    /// Unicode glyphs for terminals with good Unicode support.
    pub const UNICODE: Self = Self {
        error: "\u{2718}",   // X mark
        bullet: "\u{2022}",  // bullet
        arrow: "\u{25B6}",   // right triangle
        point: '\u{25CB}',   // hollow circle
        chosen: '\u{25CF}',  // filled circle
        target: '\u{25C6}',  // filled diamond
        axis: '\u{00B7}',    // middle dot
        link: '\u{2219}',    // bullet operator
    };

    /// ASCII-only glyphs for maximum compatibility.
    pub const ASCII: Self = Self {
        error: "[!!]",
        bullet: "*",
        arrow: "->",
        point: 'o',
        chosen: '@',
        target: 'X',
        axis: '.',
        link: ':',
    };

    /// Unicode on a terminal, ASCII when piped.
    #[must_use]
    pub fn auto() -> &'static Self {
        if console::Term::stdout().is_term() {
            &Self::UNICODE
        } else {
            &Self::ASCII
        }
    }

    /// Returns ASCII glyphs for plain/no-color mode.
    #[must_use]
    pub const fn plain() -> &'static Self {
        &Self::ASCII
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_markers_are_distinct() {
        for icons in [Icons::UNICODE, Icons::ASCII] {
            let markers = [icons.point, icons.chosen, icons.target, icons.axis, icons.link];
            for (i, a) in markers.iter().enumerate() {
                for b in &markers[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = Icons::ASCII;
        assert!(icons.bullet.is_ascii());
        assert!(icons.error.is_ascii());
        assert!(icons.arrow.is_ascii());
        assert!(icons.target.is_ascii());
        assert!(icons.link.is_ascii());
    }

    #[test]
    fn test_plain_is_ascii() {
        assert_eq!(Icons::plain().point, 'o');
    }

    #[test]
    fn test_auto_icons() {
        let icons = Icons::auto();
        assert!(icons.point == Icons::UNICODE.point || icons.point == Icons::ASCII.point);
    }
}
