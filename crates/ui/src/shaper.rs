//! Text shaper for fonts where every glyph has the same advance.

use crate::backend::{ShapedLine, TextShaper};
use mdconsole_core::StyledText;

/// Greedy word wrapper over a fixed-advance font.
///
/// Lines break at the last whitespace that fits; words longer than a line are
/// hard-broken. Explicit `\n` always starts a new line. Span colours survive
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAdvanceShaper {
    advance: i32,
    line_height: i32,
}

impl Default for FixedAdvanceShaper {
    fn default() -> Self {
        // Vanilla bitmap font metrics.
        Self::new(6, 9)
    }
}

type Glyph = (char, Option<u32>);

impl FixedAdvanceShaper {
    /// Shaper with `advance` units per glyph and `line_height` units per line.
    pub fn new(advance: i32, line_height: i32) -> Self {
        Self {
            advance: advance.max(1),
            line_height,
        }
    }

    /// Width of `text` on a single line.
    pub fn measure(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn width_of(&self, glyphs: &[Glyph]) -> i32 {
        glyphs.len() as i32 * self.advance
    }

    fn finish_line(glyphs: Vec<Glyph>) -> ShapedLine {
        ShapedLine::from_glyphs(glyphs)
    }
}

impl TextShaper for FixedAdvanceShaper {
    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn wrap(&self, text: &StyledText, max_width: i32) -> Vec<ShapedLine> {
        let mut lines = Vec::new();
        let mut current: Vec<Glyph> = Vec::new();
        // Index just past the last whitespace on the current line.
        let mut last_break: Option<usize> = None;
        let mut soft_break = false;

        let glyphs = text
            .spans()
            .iter()
            .flat_map(|span| span.text.chars().map(move |ch| (ch, span.color)));

        for (ch, color) in glyphs {
            if ch == '\n' {
                lines.push(Self::finish_line(std::mem::take(&mut current)));
                last_break = None;
                soft_break = false;
                continue;
            }

            if !current.is_empty() && self.width_of(&current) + self.advance > max_width {
                soft_break = true;
                if ch.is_whitespace() {
                    lines.push(Self::finish_line(std::mem::take(&mut current)));
                    last_break = None;
                    continue;
                }
                match last_break.take() {
                    Some(at) => {
                        let tail = current.split_off(at);
                        lines.push(Self::finish_line(std::mem::replace(&mut current, tail)));
                    }
                    None => lines.push(Self::finish_line(std::mem::take(&mut current))),
                }
            }

            if current.is_empty() && ch.is_whitespace() && soft_break {
                // Wrapped lines do not start with the separating space.
                continue;
            }

            current.push((ch, color));
            if ch.is_whitespace() {
                last_break = Some(current.len());
            }
        }

        lines.push(Self::finish_line(current));
        lines
    }
}
