#![warn(missing_docs)]
//! Deterministic testing surfaces for the console overlay (recording presenter,
//! frame harness, canonical JSON comparison and frame logs).

mod harness;
mod presenter;
mod snapshot;

use anyhow::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use harness::*;
pub use presenter::*;
pub use snapshot::*;

/// Per-frame summary written to a frame log.
#[derive(Debug, Serialize)]
pub struct FrameRecord<'a> {
    /// Frame counter.
    pub frame: u64,
    /// Frame time in seconds.
    pub time: f64,
    /// Whether the stack was hover-dimmed.
    pub hovered: bool,
    /// Draw calls issued during the frame.
    pub commands: &'a [DrawCommand],
}

/// A sink that writes newline-delimited JSON frame records to disk.
pub struct FrameLogSink {
    writer: BufWriter<File>,
    frames: u64,
}

impl FrameLogSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            frames: 0,
        })
    }

    /// Append a captured frame to the log.
    pub fn write(&mut self, capture: &FrameCapture) -> Result<()> {
        let record = FrameRecord {
            frame: self.frames,
            time: capture.time,
            hovered: capture.hovered,
            commands: &capture.commands,
        };
        let line = serde_json::to_string(&record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }

    /// Number of frames written.
    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    /// Flush buffered records to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdconsole_core::Message;
    use mdconsole_ui::{FixedAdvanceShaper, OverlayConfig};

    #[test]
    fn frame_log_writes_one_line_per_frame() {
        let path = std::env::temp_dir().join(format!("mdconsole-frames-{}.jsonl", std::process::id()));
        let mut sink = FrameLogSink::create(&path).unwrap();

        let mut harness = FrameHarness::new(OverlayConfig::default(), FixedAdvanceShaper::default());
        harness.push(Message::error("boom", 2.0));
        for capture in harness.run(&[0.0, 1.0]) {
            sink.write(&capture).unwrap();
        }
        sink.flush().unwrap();
        assert_eq!(sink.frames_written(), 2);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["frame"], 1);
        assert_eq!(second["commands"][0]["op"], "fill_rect");

        let _ = fs::remove_file(&path);
    }
}
