//! Opacity curve for console messages.
//!
//! A message ramps in over a fixed window starting at its show time, holds,
//! then ramps out over the tail of its duration. Which ramp applies is picked
//! by comparing `now` with the midpoint of the display window, so for very
//! short durations the curve can jump at the midpoint; that is intended.

use crate::active::ActiveMessage;
use crate::config::OverlayConfig;

/// Ramp lengths used by [`FadeCurve::opacity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeCurve {
    /// Fade-in ramp length in seconds.
    pub fade_in: f64,
    /// Cap on the fade-out ramp length in seconds.
    pub fade_out_max: f64,
    /// Fade-out ramp length as a fraction of the message duration.
    pub fade_out_fraction: f64,
}

impl Default for FadeCurve {
    fn default() -> Self {
        Self::from_config(&OverlayConfig::default())
    }
}

impl FadeCurve {
    /// Ramp lengths from overlay settings.
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            fade_in: config.fade_in_seconds,
            fade_out_max: config.fade_out_max_seconds,
            fade_out_fraction: config.fade_out_fraction,
        }
    }

    /// Fade-out ramp length for a message lasting `duration` seconds.
    pub fn fade_out_duration(&self, duration: f64) -> f64 {
        self.fade_out_max.min(duration * self.fade_out_fraction)
    }

    /// Opacity in `[0, 1]` of `message` at time `now`.
    pub fn opacity(&self, message: &ActiveMessage, now: f64) -> f64 {
        let midpoint = message.shown_at() + message.duration() / 2.0;

        if now > midpoint {
            self.fade_out_opacity(message, now)
        } else if now < midpoint {
            self.fade_in_opacity(message, now)
        } else {
            1.0
        }
    }

    fn fade_in_opacity(&self, message: &ActiveMessage, now: f64) -> f64 {
        let start = message.shown_at();
        ramp_progress(now, start, start + self.fade_in)
    }

    fn fade_out_opacity(&self, message: &ActiveMessage, now: f64) -> f64 {
        let end = message.expires_at();
        let start = end - self.fade_out_duration(message.duration());
        1.0 - ramp_progress(now, start, end)
    }
}

/// Linear progress of `now` through `[start, end]`, clamped to `[0, 1]`.
///
/// An empty window is a step at `end`.
pub fn ramp_progress(now: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if now >= end { 1.0 } else { 0.0 };
    }
    ((now - start) / (end - start)).clamp(0.0, 1.0)
}
