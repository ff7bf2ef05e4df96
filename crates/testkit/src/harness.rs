//! Frame-stepping harness for overlay tests.
//!
//! Each step runs `update` then `draw` at a scripted time, exactly as the host
//! render loop does, and captures what was drawn.

use crate::presenter::{DrawCommand, RecordingPresenter};
use mdconsole_core::Message;
use mdconsole_ui::{ConsoleOverlay, OverlayConfig, RenderBox, TextShaper};
use serde::Serialize;
use std::collections::VecDeque;

/// Everything one frame produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameCapture {
    /// Frame time.
    pub time: f64,
    /// Whether the pointer dimmed the stack.
    pub hovered: bool,
    /// Laid-out boxes.
    pub boxes: Vec<RenderBox>,
    /// Draw calls, in order.
    pub commands: Vec<DrawCommand>,
}

/// Overlay plus a scripted source, shaper and presenter.
pub struct FrameHarness<S: TextShaper> {
    overlay: ConsoleOverlay,
    pending: VecDeque<Message>,
    shaper: S,
    presenter: RecordingPresenter,
}

impl<S: TextShaper> FrameHarness<S> {
    /// Harness with an empty overlay.
    pub fn new(config: OverlayConfig, shaper: S) -> Self {
        Self {
            overlay: ConsoleOverlay::new(config),
            pending: VecDeque::new(),
            shaper,
            presenter: RecordingPresenter::default(),
        }
    }

    /// Queue a message for the next step.
    pub fn push(&mut self, message: Message) -> &mut Self {
        self.pending.push_back(message);
        self
    }

    /// Place or remove the pointer for following steps.
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) -> &mut Self {
        self.presenter.set_pointer(pointer);
        self
    }

    /// The overlay under test.
    pub fn overlay(&self) -> &ConsoleOverlay {
        &self.overlay
    }

    /// Run one frame at `now`.
    pub fn step(&mut self, now: f64) -> FrameCapture {
        self.overlay.update(&mut self.pending, now);
        self.redraw(now)
    }

    /// Draw again at `now` without an update.
    pub fn redraw(&mut self, now: f64) -> FrameCapture {
        self.presenter.set_now(now);
        let summary = self.overlay.draw(&self.shaper, &mut self.presenter);
        FrameCapture {
            time: now,
            hovered: summary.hovered,
            boxes: summary.boxes,
            commands: self.presenter.take_commands(),
        }
    }

    /// Step through every time in `times`.
    pub fn run(&mut self, times: &[f64]) -> Vec<FrameCapture> {
        times.iter().map(|&now| self.step(now)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdconsole_ui::FixedAdvanceShaper;

    #[test]
    fn message_lives_for_its_duration() {
        let mut harness = FrameHarness::new(OverlayConfig::default(), FixedAdvanceShaper::default());
        harness.push(Message::info("hello", 1.0));

        let frames = harness.run(&[0.0, 0.5, 1.0, 1.1]);
        let counts: Vec<usize> = frames.iter().map(|f| f.boxes.len()).collect();
        // Invisible at its show time and at its expiry instant.
        assert_eq!(counts, vec![0, 1, 0, 0]);
        assert_eq!(harness.overlay().len(), 0);
    }

    #[test]
    fn redraw_matches_step() {
        let mut harness = FrameHarness::new(OverlayConfig::default(), FixedAdvanceShaper::default());
        harness.push(Message::warn("hello", 4.0));
        harness.step(0.0);
        let first = harness.step(1.0);
        let again = harness.redraw(1.0);
        assert_eq!(first, again);
    }
}
