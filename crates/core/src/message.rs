use crate::text::StyledText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a console message; selects its colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Neutral status information.
    Info,
    /// Something degraded but still working.
    Warn,
    /// Something failed.
    Error,
}

impl MessageLevel {
    /// All levels, lowest severity first.
    pub const ALL: [MessageLevel; 3] = [MessageLevel::Info, MessageLevel::Warn, MessageLevel::Error];

    /// Lowercase label used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageLevel::Info => "info",
            MessageLevel::Warn => "warn",
            MessageLevel::Error => "error",
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message submitted to the console. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    level: MessageLevel,
    text: StyledText,
    /// Requested on-screen time in seconds.
    duration: f64,
}

impl Message {
    /// Create a message shown for `duration` seconds.
    pub fn new(level: MessageLevel, text: impl Into<StyledText>, duration: f64) -> Self {
        Self {
            level,
            text: text.into(),
            duration,
        }
    }

    /// Info-level message.
    pub fn info(text: impl Into<StyledText>, duration: f64) -> Self {
        Self::new(MessageLevel::Info, text, duration)
    }

    /// Warn-level message.
    pub fn warn(text: impl Into<StyledText>, duration: f64) -> Self {
        Self::new(MessageLevel::Warn, text, duration)
    }

    /// Error-level message.
    pub fn error(text: impl Into<StyledText>, duration: f64) -> Self {
        Self::new(MessageLevel::Error, text, duration)
    }

    /// Severity level.
    pub fn level(&self) -> MessageLevel {
        self.level
    }

    /// Message body.
    pub fn text(&self) -> &StyledText {
        &self.text
    }

    /// Requested duration in seconds, exactly as submitted.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Split into owned parts.
    pub fn into_parts(self) -> (MessageLevel, StyledText, f64) {
        (self.level, self.text, self.duration)
    }
}
