//! Capabilities the overlay borrows from the host client.

use mdconsole_core::{StyledText, TextSpan};
use serde::{Deserialize, Serialize};

/// One wrapped line of text, ready to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapedLine {
    /// Styled runs of the line, left to right.
    pub spans: Vec<TextSpan>,
}

impl ShapedLine {
    /// Line holding a single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![TextSpan::plain(text)],
        }
    }

    /// Build a line from coloured characters, dropping trailing whitespace
    /// and merging neighbours of the same colour into one span.
    pub fn from_glyphs(glyphs: impl IntoIterator<Item = (char, Option<u32>)>) -> Self {
        let mut glyphs: Vec<(char, Option<u32>)> = glyphs.into_iter().collect();
        while glyphs.last().is_some_and(|(ch, _)| ch.is_whitespace()) {
            glyphs.pop();
        }

        let mut spans: Vec<TextSpan> = Vec::new();
        for (ch, color) in glyphs {
            match spans.last_mut() {
                Some(span) if span.color == color => span.text.push(ch),
                _ => spans.push(TextSpan {
                    text: ch.to_string(),
                    color,
                }),
            }
        }
        Self { spans }
    }

    /// Plain characters of the line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Breaks styled text into lines of a maximum width.
pub trait TextShaper {
    /// Vertical advance between consecutive lines.
    fn line_height(&self) -> i32;

    /// Wrap `text` to at most `max_width` units per line.
    ///
    /// Must be deterministic for identical input. Returning no lines is
    /// tolerated; the overlay treats it as one empty line.
    fn wrap(&self, text: &StyledText, max_width: i32) -> Vec<ShapedLine>;
}

/// Draw surface plus the frame clock and pointer of the host.
pub trait Presenter {
    /// Fill an axis-aligned rectangle with a packed ARGB colour.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32);

    /// Draw a shaped line with its top-left corner at `(x, y)`.
    ///
    /// `color` is the packed ARGB default colour; spans carrying their own
    /// colour keep their RGB but take the alpha of `color`.
    fn draw_text(&mut self, line: &ShapedLine, x: i32, y: i32, color: u32);

    /// Monotonic time in seconds, on the same clock passed to `update`.
    fn now(&self) -> f64;

    /// Pointer position in layout units, or `None` when there is no pointer.
    fn pointer_position(&self) -> Option<(f64, f64)>;
}
