#![warn(missing_docs)]
//! Console overlay for the HUD: timed, fading info/warn/error messages
//! stacked in the top-left corner.
//!
//! # Example
//!
//! ```rust,no_run
//! use mdconsole_core::{Console, MessageLevel};
//! use mdconsole_ui::{ConsoleOverlay, FixedAdvanceShaper, OverlayConfig};
//!
//! let (sender, mut console) = Console::channel();
//! sender.log(MessageLevel::Warn, "Chunk mesh upload stalled", 5.0).unwrap();
//!
//! let mut overlay = ConsoleOverlay::new(OverlayConfig::default());
//! let shaper = FixedAdvanceShaper::default();
//!
//! // Once per frame:
//! overlay.update(&mut console, 12.5);
//! let boxes = overlay.layout(&shaper, 12.5);
//! # let _ = boxes;
//! ```

mod active;
mod backend;
mod config;
pub mod egui_backend;
mod fade;
mod layout;
mod overlay;
mod palette;
pub mod screens;
mod shaper;

// Re-export commonly used types
pub use active::{ActiveMessage, ActiveMessageSet};
pub use backend::{Presenter, ShapedLine, TextShaper};
pub use config::{ConfigError, OverlayConfig};
pub use egui_backend::{EguiPresenter, EguiShaper};
pub use fade::{ramp_progress, FadeCurve};
pub use layout::{LayoutEngine, RenderBox};
pub use overlay::{ConsoleOverlay, FrameSummary};
pub use palette::ColorPalette;
pub use screens::{Screen, ScreenKind, ScreenRegistry};
pub use shaper::FixedAdvanceShaper;
