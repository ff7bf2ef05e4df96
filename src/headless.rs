use crate::config::HeadlessSettings;
use anyhow::{Context, Result};
use mdconsole_core::{Console, ConsoleSender, MessageLevel, StyledText, TextSpan};
use mdconsole_ui::{
    ConsoleOverlay, FixedAdvanceShaper, OverlayConfig, Presenter, Screen, ScreenKind,
    ScreenRegistry, ShapedLine,
};
use std::thread;
use tracing::{debug, info};

/// Presenter that logs every primitive instead of painting it.
#[derive(Debug, Default)]
pub struct LogPresenter {
    now: f64,
    pointer: Option<(f64, f64)>,
    pub rects: u64,
    pub texts: u64,
}

impl Presenter for LogPresenter {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        self.rects += 1;
        debug!(x, y, width, height, color, "fill");
    }

    fn draw_text(&mut self, line: &ShapedLine, x: i32, y: i32, color: u32) {
        self.texts += 1;
        debug!(x, y, color, "text {:?}", line.text());
    }

    fn now(&self) -> f64 {
        self.now
    }

    fn pointer_position(&self) -> Option<(f64, f64)> {
        self.pointer
    }
}

/// Totals reported at the end of a headless run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunStats {
    pub frames: u64,
    pub hovered_frames: u64,
    pub peak_boxes: usize,
    pub rects: u64,
    pub texts: u64,
}

/// Messages a client logs while starting up, sent from a loader thread.
fn log_startup(sender: ConsoleSender) -> Result<()> {
    let loader = thread::spawn(move || -> Result<()> {
        sender.log(MessageLevel::Info, "Loaded 4 resource packs", 3.0)?;
        sender.log(
            MessageLevel::Warn,
            StyledText::plain("Shader pack ")
                .with(TextSpan::colored("ComplementaryReimagined", 0xFF55_FFFF))
                .with(TextSpan::plain(
                    " requests features this driver does not support; some effects are disabled",
                )),
            5.0,
        )?;
        Ok(())
    });
    loader
        .join()
        .map_err(|_| anyhow::anyhow!("startup loader thread panicked"))?
}

/// Drive the overlay through a simulated frame loop.
pub fn run(overlay_config: OverlayConfig, settings: &HeadlessSettings) -> Result<RunStats> {
    let (sender, mut console) = Console::channel();
    log_startup(console.sender()).context("failed to log startup messages")?;

    let mut screens = ScreenRegistry::new();
    screens.register_default(ScreenKind::VideoSettings, |parent| {
        Box::new(MenuPage::new("Video Settings", parent))
    });
    screens.register_override(ScreenKind::VideoSettings, |parent| {
        Box::new(MenuPage::new("Renderer Settings", parent))
    });

    let mut overlay = ConsoleOverlay::new(overlay_config);
    let shaper = FixedAdvanceShaper::default();
    let mut presenter = LogPresenter::default();
    let mut stats = RunStats::default();

    let fps = settings.frames_per_second.max(1);
    let total_frames = (settings.run_seconds.max(0.0) * fps as f64).round() as u64;

    for frame in 0..total_frames {
        let now = frame as f64 / fps as f64;

        if frame == u64::from(fps) * 2 {
            if let Some(screen) = screens.open(ScreenKind::VideoSettings, None) {
                sender.log(
                    MessageLevel::Info,
                    format!("Opened {}", screen.title()),
                    2.0,
                )?;
            }
        }
        if frame == u64::from(fps) * 4 {
            sender.log(
                MessageLevel::Error,
                "Failed to allocate chunk mesh staging buffer (out of device memory)",
                3.0,
            )?;
        }

        overlay.update(&mut console, now);

        // Sweep the pointer over the stack for half a second.
        presenter.pointer = if (3.0..3.5).contains(&now) {
            Some((40.0, 8.0))
        } else {
            None
        };
        presenter.now = now;

        let summary = overlay.draw(&shaper, &mut presenter);
        stats.frames += 1;
        stats.peak_boxes = stats.peak_boxes.max(summary.boxes.len());
        if summary.hovered {
            stats.hovered_frames += 1;
        }
    }

    stats.rects = presenter.rects;
    stats.texts = presenter.texts;
    info!(
        frames = stats.frames,
        hovered = stats.hovered_frames,
        peak_boxes = stats.peak_boxes,
        active = overlay.len(),
        "headless console run finished"
    );
    Ok(stats)
}

struct MenuPage {
    title: &'static str,
    parent: Option<Box<dyn Screen>>,
}

impl MenuPage {
    fn new(title: &'static str, parent: Option<Box<dyn Screen>>) -> Self {
        Self { title, parent }
    }
}

impl Screen for MenuPage {
    fn title(&self) -> &str {
        self.title
    }

    fn parent(&self) -> Option<&dyn Screen> {
        self.parent
            .as_ref()
            .map(|parent| &**parent as &dyn Screen)
    }
}
