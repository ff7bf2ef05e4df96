//! Screen construction with per-kind overrides.
//!
//! The client asks the registry for a screen instead of building it directly,
//! so a module can swap, say, the vanilla video settings for its own page.

use std::collections::HashMap;
use tracing::debug;

/// Menu screens the client knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Top-level options menu.
    Options,
    /// Video / graphics settings, opened from the options menu.
    VideoSettings,
    /// Key bindings and mouse settings.
    Controls,
}

/// A menu screen.
pub trait Screen {
    /// Title shown at the top of the screen.
    fn title(&self) -> &str;

    /// Screen to return to when this one closes.
    fn parent(&self) -> Option<&dyn Screen>;
}

/// Builds a screen given the screen it was opened from.
pub type ScreenFactory = Box<dyn Fn(Option<Box<dyn Screen>>) -> Box<dyn Screen> + Send + Sync>;

/// Default factories plus overrides, keyed by screen kind.
#[derive(Default)]
pub struct ScreenRegistry {
    defaults: HashMap<ScreenKind, ScreenFactory>,
    overrides: HashMap<ScreenKind, ScreenFactory>,
}

impl ScreenRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in factory for `kind`.
    pub fn register_default<F>(&mut self, kind: ScreenKind, factory: F)
    where
        F: Fn(Option<Box<dyn Screen>>) -> Box<dyn Screen> + Send + Sync + 'static,
    {
        self.defaults.insert(kind, Box::new(factory));
    }

    /// Replace how `kind` is built. Returns the previous override, if any.
    pub fn register_override<F>(&mut self, kind: ScreenKind, factory: F) -> Option<ScreenFactory>
    where
        F: Fn(Option<Box<dyn Screen>>) -> Box<dyn Screen> + Send + Sync + 'static,
    {
        debug!(?kind, "screen factory overridden");
        self.overrides.insert(kind, Box::new(factory))
    }

    /// Drop the override for `kind`, restoring the default.
    pub fn clear_override(&mut self, kind: ScreenKind) -> Option<ScreenFactory> {
        self.overrides.remove(&kind)
    }

    /// Whether `kind` is currently overridden.
    pub fn is_overridden(&self, kind: ScreenKind) -> bool {
        self.overrides.contains_key(&kind)
    }

    /// Build the screen for `kind`, preferring an override.
    ///
    /// Returns `None` if nothing is registered for `kind`.
    pub fn open(&self, kind: ScreenKind, parent: Option<Box<dyn Screen>>) -> Option<Box<dyn Screen>> {
        let factory = self.overrides.get(&kind).or_else(|| self.defaults.get(&kind))?;
        Some(factory(parent))
    }
}
