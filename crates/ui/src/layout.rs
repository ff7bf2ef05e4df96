//! Per-frame placement of visible messages.

use crate::active::ActiveMessage;
use crate::backend::{ShapedLine, TextShaper};
use crate::config::OverlayConfig;
use crate::fade::FadeCurve;
use mdconsole_core::MessageLevel;
use serde::Serialize;

/// Screen rectangle and content for one visible message, valid for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBox {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Box width.
    pub width: i32,
    /// Box height.
    pub height: i32,
    /// Level used to pick colours.
    pub level: MessageLevel,
    /// Wrapped text, top to bottom. Never empty.
    pub lines: Vec<ShapedLine>,
    /// Fade opacity before hover dimming.
    pub opacity: f64,
}

impl RenderBox {
    /// Half-open hit test: left/top edges inside, right/bottom edges outside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let (x, y) = (self.x as f64, self.y as f64);
        px >= x && px < x + self.width as f64 && py >= y && py < y + self.height as f64
    }

    /// Bottom edge, where the next box starts.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Stacks visible messages top-down from the configured origin.
#[derive(Debug, Clone)]
pub struct LayoutEngine<'a> {
    config: &'a OverlayConfig,
    curve: FadeCurve,
}

impl<'a> LayoutEngine<'a> {
    /// Layout engine for `config`.
    pub fn new(config: &'a OverlayConfig) -> Self {
        Self {
            config,
            curve: FadeCurve::from_config(config),
        }
    }

    /// Lay out `messages` (oldest first) at time `now`.
    ///
    /// Messages under the visibility threshold are skipped and take no space.
    pub fn layout<'m, I>(&self, messages: I, shaper: &dyn TextShaper, now: f64) -> Vec<RenderBox>
    where
        I: IntoIterator<Item = &'m ActiveMessage>,
    {
        let config = self.config;
        let line_height = shaper.line_height();
        let mut boxes = Vec::new();
        let mut y = config.origin_y;

        for message in messages {
            let opacity = self.curve.opacity(message, now);
            if opacity < config.visibility_threshold {
                continue;
            }

            let mut lines = shaper.wrap(message.text(), config.wrap_width());
            if lines.is_empty() {
                lines.push(ShapedLine::default());
            }

            let height = line_height * lines.len() as i32 + config.padding_y * 2;
            boxes.push(RenderBox {
                x: config.origin_x,
                y,
                width: config.box_width,
                height,
                level: message.level(),
                lines,
                opacity,
            });
            y += height;
        }

        boxes
    }
}
