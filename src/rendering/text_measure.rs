//! Text measurement backed by egui's font system.

use std::collections::HashMap;

use eframe::egui;
use egui::{Color32, FontId};
use rjview::TextMeasurer;

/// Measures text with an egui painter, caching the advance of each glyph.
///
/// Per-glyph caching ignores kerning, which monospace fonts do not apply.
pub struct PainterMeasurer {
    painter: egui::Painter,
    font_id: FontId,
    advances: HashMap<char, f32>,
    row_height: Option<f32>,
}

impl PainterMeasurer {
    pub fn new(painter: egui::Painter, font_id: FontId) -> Self {
        Self {
            painter,
            font_id,
            advances: HashMap::new(),
            row_height: None,
        }
    }
}

impl TextMeasurer for PainterMeasurer {
    fn text_width(&mut self, text: &str) -> f32 {
        let painter = &self.painter;
        let font_id = &self.font_id;
        let advances = &mut self.advances;
        text.chars()
            .map(|ch| {
                *advances.entry(ch).or_insert_with(|| {
                    painter
                        .layout_no_wrap(ch.to_string(), font_id.clone(), Color32::WHITE)
                        .size()
                        .x
                })
            })
            .sum()
    }

    fn line_height(&mut self) -> f32 {
        if let Some(height) = self.row_height {
            return height;
        }
        let height = self
            .painter
            .layout_no_wrap("M".to_string(), self.font_id.clone(), Color32::WHITE)
            .size()
            .y;
        self.row_height = Some(height);
        height
    }
}
