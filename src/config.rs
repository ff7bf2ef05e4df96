use anyhow::Result;
use mdconsole_ui::OverlayConfig;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};
use tracing::{debug, warn};

const DEFAULT_CONSOLE_PATH: &str = "config/console.toml";
const CONSOLE_PATH_ENV: &str = "MDCONSOLE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub overlay: OverlayConfig,
    pub headless: HeadlessSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HeadlessSettings {
    /// Simulated frame rate of the headless loop.
    pub frames_per_second: u32,
    /// Simulated run length in seconds.
    pub run_seconds: f64,
}

impl Default for HeadlessSettings {
    fn default() -> Self {
        Self {
            frames_per_second: 60,
            run_seconds: 8.0,
        }
    }
}

impl ConsoleConfig {
    /// Load console configuration from `$MDCONSOLE_CONFIG` or the default path.
    pub fn load() -> Self {
        match env::var(CONSOLE_PATH_ENV) {
            Ok(path) => Self::load_from_path(Path::new(&path)),
            Err(_) => Self::load_from_path(Path::new(DEFAULT_CONSOLE_PATH)),
        }
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        let cfg = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConsoleConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    return ConsoleConfig::default();
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    debug!(
                        "Console config not found at {}. Using defaults",
                        path.display()
                    );
                }
                return ConsoleConfig::default();
            }
        };

        if let Err(err) = cfg.overlay.validate() {
            warn!("Invalid overlay settings in {}: {err}. Using defaults", path.display());
            return ConsoleConfig {
                overlay: OverlayConfig::default(),
                ..cfg
            };
        }
        cfg
    }

    /// Save console configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("mdconsole-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = ConsoleConfig::load_from_path(&temp_path("does-not-exist"));
        assert_eq!(cfg, ConsoleConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "[overlay]\nbox_width = 300\n").unwrap();
        let cfg = ConsoleConfig::load_from_path(&path);
        assert_eq!(cfg.overlay.box_width, 300);
        assert_eq!(cfg.overlay.origin_x, 4);
        assert_eq!(cfg.headless, HeadlessSettings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn invalid_overlay_falls_back() {
        let path = temp_path("invalid");
        fs::write(
            &path,
            "[overlay]\nhover_dim_factor = 3.0\n\n[headless]\nrun_seconds = 2.0\n",
        )
        .unwrap();
        let cfg = ConsoleConfig::load_from_path(&path);
        assert_eq!(cfg.overlay, OverlayConfig::default());
        assert_eq!(cfg.headless.run_seconds, 2.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn garbage_falls_back() {
        let path = temp_path("garbage");
        fs::write(&path, "this is = = not toml").unwrap();
        assert_eq!(ConsoleConfig::load_from_path(&path), ConsoleConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("saved");
        let mut cfg = ConsoleConfig::default();
        cfg.overlay.box_width = 320;
        cfg.save_to_path(&path).unwrap();
        assert_eq!(ConsoleConfig::load_from_path(&path), cfg);
        let _ = fs::remove_file(&path);
    }
}
