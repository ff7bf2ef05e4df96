use serde::{Deserialize, Serialize};
use std::fmt;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Raw characters of the run.
    pub text: String,
    /// Packed ARGB colour overriding the level's text colour, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

impl TextSpan {
    /// Unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Span drawn in a fixed colour.
    pub fn colored(text: impl Into<String>, color: u32) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Message body made of styled spans, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    spans: Vec<TextSpan>,
}

impl StyledText {
    /// Empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(TextSpan::plain(text))
    }

    /// Builder: append a span.
    pub fn with(mut self, span: TextSpan) -> Self {
        self.push(span);
        self
    }

    /// Append a span. Empty spans are dropped.
    pub fn push(&mut self, span: TextSpan) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    /// Spans in reading order.
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// True when there is no visible character.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }
}

impl From<&str> for StyledText {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<String> for StyledText {
    fn from(value: String) -> Self {
        Self::plain(value)
    }
}

impl FromIterator<TextSpan> for StyledText {
    fn from_iter<I: IntoIterator<Item = TextSpan>>(iter: I) -> Self {
        let mut text = StyledText::new();
        for span in iter {
            text.push(span);
        }
        text
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
