//! Presenter that records draw calls instead of painting.

use mdconsole_ui::{Presenter, ShapedLine};
use serde::Serialize;

/// One captured draw primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// `fill_rect` call.
    FillRect {
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Width.
        width: i32,
        /// Height.
        height: i32,
        /// Packed ARGB colour.
        color: u32,
    },
    /// `draw_text` call.
    Text {
        /// Plain characters of the line.
        text: String,
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Packed ARGB colour.
        color: u32,
    },
}

impl DrawCommand {
    /// Alpha channel of the command's colour.
    pub fn alpha(&self) -> u8 {
        match self {
            DrawCommand::FillRect { color, .. } | DrawCommand::Text { color, .. } => {
                mdconsole_core::argb::alpha(*color)
            }
        }
    }
}

/// Scripted clock and pointer; records every draw call.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    now: f64,
    pointer: Option<(f64, f64)>,
    commands: Vec<DrawCommand>,
}

impl RecordingPresenter {
    /// Presenter reporting `now` and no pointer.
    pub fn at(now: f64) -> Self {
        Self {
            now,
            ..Default::default()
        }
    }

    /// Builder: report the pointer at `(x, y)`.
    pub fn with_pointer(mut self, x: f64, y: f64) -> Self {
        self.pointer = Some((x, y));
        self
    }

    /// Move the clock.
    pub fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    /// Move or remove the pointer.
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Texts drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::FillRect { .. } => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_text(&mut self, line: &ShapedLine, x: i32, y: i32, color: u32) {
        self.commands.push(DrawCommand::Text {
            text: line.text(),
            x,
            y,
            color,
        });
    }

    fn now(&self) -> f64 {
        self.now
    }

    fn pointer_position(&self) -> Option<(f64, f64)> {
        self.pointer
    }
}
