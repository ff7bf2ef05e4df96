//! Console overlay backend for egui HUDs.
//!
//! [`EguiShaper`] wraps text with egui's own galley layout so line breaks match
//! what is painted; [`EguiPresenter`] paints onto a foreground layer and takes
//! the frame time and pointer from the context input. One layout unit is one
//! egui point.

use crate::backend::{Presenter, ShapedLine, TextShaper};
use egui::text::{LayoutJob, TextFormat};
use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order, Painter, Pos2, Rect};
use mdconsole_core::{argb, StyledText};

/// Convert a packed ARGB colour.
pub fn to_color32(color: u32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        argb::red(color),
        argb::green(color),
        argb::blue(color),
        argb::alpha(color),
    )
}

/// Text shaping through egui's font system.
///
/// Fonts only exist once the context has run a frame, so shape inside the
/// frame callback.
#[derive(Clone)]
pub struct EguiShaper {
    ctx: Context,
    font_id: FontId,
}

impl EguiShaper {
    /// Shaper using `font_id` from `ctx`'s fonts.
    pub fn new(ctx: &Context, font_id: FontId) -> Self {
        Self {
            ctx: ctx.clone(),
            font_id,
        }
    }
}

impl TextShaper for EguiShaper {
    fn line_height(&self) -> i32 {
        self.ctx
            .fonts(|fonts| fonts.row_height(&self.font_id))
            .ceil() as i32
    }

    fn wrap(&self, text: &StyledText, max_width: i32) -> Vec<ShapedLine> {
        let mut job = LayoutJob::default();
        job.wrap.max_width = max_width as f32;
        for span in text.spans() {
            job.append(
                &span.text,
                0.0,
                TextFormat::simple(self.font_id.clone(), Color32::WHITE),
            );
        }

        let galley = self.ctx.fonts(|fonts| fonts.layout_job(job));
        let spans = text.spans();

        galley
            .rows
            .iter()
            .map(|row| {
                ShapedLine::from_glyphs(row.glyphs.iter().map(|glyph| {
                    let color = spans
                        .get(glyph.section_index as usize)
                        .and_then(|span| span.color);
                    (glyph.chr, color)
                }))
            })
            .collect()
    }
}

/// Paints the overlay on egui's foreground layer.
pub struct EguiPresenter {
    painter: Painter,
    font_id: FontId,
    time: f64,
    pointer: Option<Pos2>,
}

impl EguiPresenter {
    /// Presenter for the current frame of `ctx`.
    pub fn new(ctx: &Context, font_id: FontId) -> Self {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("console_overlay")));
        let (time, pointer) = ctx.input(|input| (input.time, input.pointer.hover_pos()));
        Self {
            painter,
            font_id,
            time,
            pointer,
        }
    }
}

impl Presenter for EguiPresenter {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        let rect = Rect::from_min_size(
            Pos2::new(x as f32, y as f32),
            egui::vec2(width as f32, height as f32),
        );
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn draw_text(&mut self, line: &ShapedLine, x: i32, y: i32, color: u32) {
        let alpha = argb::alpha(color);
        let mut pos = Pos2::new(x as f32, y as f32);
        for span in &line.spans {
            let span_color = span
                .color
                .map_or(color, |override_color| argb::with_alpha(override_color, alpha));
            let drawn = self.painter.text(
                pos,
                Align2::LEFT_TOP,
                &span.text,
                self.font_id.clone(),
                to_color32(span_color),
            );
            pos.x += drawn.width();
        }
    }

    fn now(&self) -> f64 {
        self.time
    }

    fn pointer_position(&self) -> Option<(f64, f64)> {
        self.pointer.map(|pos| (pos.x as f64, pos.y as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConsoleOverlay, OverlayConfig};
    use egui::{Event, RawInput};
    use mdconsole_core::{Message, TextSpan};
    use std::collections::VecDeque;

    const RED: u32 = 0xFFDC_0000;

    fn in_frame<R>(input: RawInput, f: impl FnOnce(&Context) -> R) -> R {
        let ctx = Context::default();
        let mut result = None;
        let _ = ctx.run(input, |ctx| result = Some(f(ctx)));
        result.unwrap()
    }

    fn line_width(ctx: &Context, line: &ShapedLine) -> f32 {
        ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(line.text(), FontId::monospace(9.0), Color32::WHITE)
                .size()
                .x
        })
    }

    #[test]
    fn packed_colour_converts_channels() {
        let color = to_color32(argb::pack_argb(255, 224, 187, 0));
        assert_eq!(color, Color32::from_rgb(224, 187, 0));
    }

    #[test]
    fn transparent_colour_converts() {
        let color = to_color32(argb::pack_argb(0, 10, 20, 30));
        assert_eq!(color.a(), 0);
    }

    #[test]
    fn lines_wrap_within_max_width() {
        let text = StyledText::plain(
            "the quick brown fox jumps over the lazy dog while the console keeps on logging",
        );
        let (line_height, lines, widths) = in_frame(RawInput::default(), |ctx| {
            let shaper = EguiShaper::new(ctx, FontId::monospace(9.0));
            let lines = shaper.wrap(&text, 100);
            let widths: Vec<f32> = lines.iter().map(|line| line_width(ctx, line)).collect();
            (shaper.line_height(), lines, widths)
        });

        assert!(line_height > 0);
        assert!(lines.len() > 1);
        for width in widths {
            assert!(width <= 100.5, "line too wide: {width}");
        }
        for line in &lines {
            assert!(!line.text().ends_with(' '), "trailing space in {:?}", line.text());
        }
        let words: Vec<String> = lines
            .iter()
            .flat_map(|line| {
                line.text()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(words.join(" "), text.to_string());
    }

    #[test]
    fn span_colours_survive_wrapping() {
        let text = StyledText::plain("chunk upload ")
            .with(TextSpan::colored("failed after three retries", RED))
            .with(TextSpan::plain(" giving up"));
        let lines = in_frame(RawInput::default(), |ctx| {
            EguiShaper::new(ctx, FontId::monospace(9.0)).wrap(&text, 60)
        });

        assert!(lines.len() > 1);
        let spans: Vec<&TextSpan> = lines.iter().flat_map(|line| &line.spans).collect();
        for span in spans {
            if span.text.contains("retries") || span.text.contains("failed") {
                assert_eq!(span.color, Some(RED), "{span:?}");
            }
            if span.text.contains("chunk") || span.text.contains("giving") {
                assert_eq!(span.color, None, "{span:?}");
            }
        }
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let lines = in_frame(RawInput::default(), |ctx| {
            EguiShaper::new(ctx, FontId::monospace(9.0)).wrap(&StyledText::new(), 250)
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn overlay_draws_through_the_egui_presenter() {
        let input = RawInput {
            events: vec![Event::PointerMoved(Pos2::new(10.0, 6.0))],
            ..Default::default()
        };
        let ctx = Context::default();
        let mut outcome = None;
        let output = ctx.run(input, |ctx| {
            let shaper = EguiShaper::new(ctx, FontId::monospace(9.0));
            let mut presenter = EguiPresenter::new(ctx, FontId::monospace(9.0));
            let now = presenter.now();

            let mut overlay = ConsoleOverlay::new(OverlayConfig::default());
            let mut queue = VecDeque::from(vec![Message::error("boom", 4.0)]);
            overlay.update(&mut queue, now - 1.0);

            let pointer = presenter.pointer_position();
            let summary = overlay.draw(&shaper, &mut presenter);
            outcome = Some((pointer, summary));
        });

        let (pointer, summary) = outcome.unwrap();
        assert_eq!(pointer, Some((10.0, 6.0)));
        assert_eq!(summary.boxes.len(), 1);
        assert!(summary.hovered);
        // Background, stripe and at least one text run.
        assert!(output.shapes.len() >= 3);
    }
}
