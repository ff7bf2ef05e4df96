//! mdconsole - on-screen debug console overlay
//!
//! Headless driver that runs the overlay through a simulated frame loop.

mod config;
mod headless;

use anyhow::Result;
use config::ConsoleConfig;
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting mdconsole v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::load_from_path(path),
        None => ConsoleConfig::load(),
    };
    if let Some(seconds) = cli.run_seconds {
        config.headless.run_seconds = seconds;
    }
    if let Some(fps) = cli.frames_per_second {
        config.headless.frames_per_second = fps;
    }
    if let Some(path) = &cli.write_config {
        config.save_to_path(path)?;
        info!("Wrote effective console config to {}", path.display());
    }

    let stats = headless::run(config.overlay, &config.headless)?;
    info!(
        frames = stats.frames,
        rects = stats.rects,
        texts = stats.texts,
        "mdconsole finished"
    );
    Ok(())
}

struct CliOptions {
    config: Option<PathBuf>,
    run_seconds: Option<f64>,
    frames_per_second: Option<u32>,
    write_config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            config: None,
            run_seconds: None,
            frames_per_second: None,
            write_config: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--write-config" => {
                    if let Some(path) = args.next() {
                        opts.write_config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--write-config requires a file path");
                    }
                }
                "--seconds" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<f64>() {
                            Ok(value) if value.is_finite() && value >= 0.0 => {
                                opts.run_seconds = Some(value)
                            }
                            Ok(_) => {
                                tracing::error!(value = %raw, "--seconds must be a non-negative number");
                            }
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--seconds must be a number");
                            }
                        }
                    } else {
                        tracing::error!("--seconds requires a number");
                    }
                }
                "--fps" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u32>() {
                            Ok(value) if value > 0 => opts.frames_per_second = Some(value),
                            Ok(_) => tracing::error!("--fps must be positive"),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--fps must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--fps requires an integer");
                    }
                }
                other => {
                    tracing::warn!(arg = %other, "ignoring unknown argument");
                }
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_overrides() {
        let opts = parse(&["--config", "my.toml", "--seconds", "2.5", "--fps", "30"]);
        assert_eq!(opts.config, Some(PathBuf::from("my.toml")));
        assert_eq!(opts.run_seconds, Some(2.5));
        assert_eq!(opts.frames_per_second, Some(30));
        assert!(opts.write_config.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let opts = parse(&["--seconds", "-1", "--fps", "0", "--config"]);
        assert!(opts.config.is_none());
        assert!(opts.run_seconds.is_none());
        assert!(opts.frames_per_second.is_none());
    }
}
