//! The console overlay drawn over the HUD.
//!
//! Hosts call [`ConsoleOverlay::update`] and then [`ConsoleOverlay::draw`] once
//! per frame. All boxes are recomputed from scratch on every draw.

use crate::active::{ActiveMessage, ActiveMessageSet};
use crate::backend::{Presenter, TextShaper};
use crate::config::OverlayConfig;
use crate::layout::{LayoutEngine, RenderBox};
use crate::palette::ColorPalette;
use mdconsole_core::{argb, MessageSource};
use tracing::trace;

/// Result of one [`ConsoleOverlay::draw`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    /// Boxes drawn this frame, top to bottom.
    pub boxes: Vec<RenderBox>,
    /// Whether the pointer was over any box.
    pub hovered: bool,
    /// Multiplier applied to every box's opacity.
    pub opacity_scale: f64,
}

impl FrameSummary {
    /// Opacity a box was actually drawn with.
    pub fn final_opacity(&self, render: &RenderBox) -> f64 {
        render.opacity * self.opacity_scale
    }
}

/// Timed, fading notification stack.
#[derive(Debug, Default)]
pub struct ConsoleOverlay {
    messages: ActiveMessageSet,
    config: OverlayConfig,
}

impl ConsoleOverlay {
    /// Overlay using `config` for layout and timing.
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            messages: ActiveMessageSet::new(),
            config,
        }
    }

    /// Active settings.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Pull new messages from `source`, stamped with `now`, then drop expired ones.
    pub fn update<S: MessageSource + ?Sized>(&mut self, source: &mut S, now: f64) {
        let ingested = self.messages.ingest(source, now);
        let purged = self.messages.purge(now);
        if ingested > 0 || purged > 0 {
            trace!(ingested, purged, active = self.messages.len(), "console overlay updated");
        }
    }

    /// Active messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &ActiveMessage> {
        self.messages.iter()
    }

    /// Number of active messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no message is active.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every active message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Boxes for the visible messages at `now`, without drawing anything.
    pub fn layout(&self, shaper: &dyn TextShaper, now: f64) -> Vec<RenderBox> {
        LayoutEngine::new(&self.config).layout(&self.messages, shaper, now)
    }

    /// Lay out and draw the visible messages.
    ///
    /// While the pointer is over any box, every box is dimmed by the
    /// configured hover factor so the stack gets out of the way.
    pub fn draw(&self, shaper: &dyn TextShaper, presenter: &mut dyn Presenter) -> FrameSummary {
        let now = presenter.now();
        let boxes = self.layout(shaper, now);

        let hovered = presenter
            .pointer_position()
            .is_some_and(|(px, py)| boxes.iter().any(|render| render.contains(px, py)));
        let opacity_scale = if hovered {
            self.config.hover_dim_factor
        } else {
            1.0
        };

        let line_height = shaper.line_height();
        for render in &boxes {
            let palette = ColorPalette::for_level(render.level);
            let alpha = argb::unit_to_byte((render.opacity * opacity_scale) as f32);

            presenter.fill_rect(
                render.x,
                render.y,
                render.width,
                render.height,
                argb::with_alpha(palette.background, alpha),
            );
            presenter.fill_rect(
                render.x,
                render.y,
                self.config.stripe_width,
                render.height,
                argb::with_alpha(palette.stripe, alpha),
            );

            let text_x = render.x + self.config.padding_x + self.config.text_indent;
            let mut text_y = render.y + self.config.padding_y;
            let text_color = argb::with_alpha(palette.text, alpha);
            for line in &render.lines {
                presenter.draw_text(line, text_x, text_y, text_color);
                text_y += line_height;
            }
        }

        FrameSummary {
            boxes,
            hovered,
            opacity_scale,
        }
    }
}
