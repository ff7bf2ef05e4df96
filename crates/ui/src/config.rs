//! Layout and timing constants for the console overlay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`OverlayConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The wrap width left after the inset would be empty.
    #[error("box_width {box_width} must be larger than wrap_inset {wrap_inset}")]
    WrapWidth {
        /// Configured box width.
        box_width: i32,
        /// Configured wrap inset.
        wrap_inset: i32,
    },
    /// A length that must not be negative was.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A fraction was outside `[0, 1]`.
    #[error("{field} must be within [0, 1] (got {value})")]
    NotAFraction {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// Overlay geometry and animation settings, in GUI-scaled units and seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Left edge of every message box.
    pub origin_x: i32,
    /// Top edge of the first message box.
    pub origin_y: i32,
    /// Width of every message box.
    pub box_width: i32,
    /// Text wraps at `box_width - wrap_inset`.
    pub wrap_inset: i32,
    /// Horizontal padding inside the box.
    pub padding_x: i32,
    /// Vertical padding above and below the text block.
    pub padding_y: i32,
    /// Extra indent of the text past `padding_x`, leaving room for the stripe.
    pub text_indent: i32,
    /// Width of the level-coloured stripe on the left edge.
    pub stripe_width: i32,
    /// Length of the fade-in ramp.
    pub fade_in_seconds: f64,
    /// Upper bound of the fade-out ramp.
    pub fade_out_max_seconds: f64,
    /// Fade-out ramp as a fraction of the message duration (before the cap).
    pub fade_out_fraction: f64,
    /// Messages below this opacity are skipped for the frame.
    pub visibility_threshold: f64,
    /// Opacity multiplier applied to every box while the pointer hovers any box.
    pub hover_dim_factor: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            origin_x: 4,
            origin_y: 4,
            box_width: 270,
            wrap_inset: 20,
            padding_x: 3,
            padding_y: 1,
            text_indent: 3,
            stripe_width: 1,
            fade_in_seconds: 0.25,
            fade_out_max_seconds: 0.5,
            fade_out_fraction: 0.2,
            visibility_threshold: 0.025,
            hover_dim_factor: 0.4,
        }
    }
}

impl OverlayConfig {
    /// Width text is wrapped to.
    pub fn wrap_width(&self) -> i32 {
        self.box_width - self.wrap_inset
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.box_width <= self.wrap_inset {
            return Err(ConfigError::WrapWidth {
                box_width: self.box_width,
                wrap_inset: self.wrap_inset,
            });
        }

        let lengths = [
            ("wrap_inset", self.wrap_inset as f64),
            ("padding_x", self.padding_x as f64),
            ("padding_y", self.padding_y as f64),
            ("text_indent", self.text_indent as f64),
            ("stripe_width", self.stripe_width as f64),
            ("fade_in_seconds", self.fade_in_seconds),
            ("fade_out_max_seconds", self.fade_out_max_seconds),
        ];
        for (field, value) in lengths {
            // `!(x >= 0)` also rejects NaN.
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let fractions = [
            ("fade_out_fraction", self.fade_out_fraction),
            ("visibility_threshold", self.visibility_threshold),
            ("hover_dim_factor", self.hover_dim_factor),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::NotAFraction { field, value });
            }
        }

        Ok(())
    }
}
