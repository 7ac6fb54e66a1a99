//! Block rendering for document lines
//!
//! A [`LayoutBlock`] is the GUI's line container: the presenter writes spans
//! into it as colored `LayoutJob` sections, one row per document line, and the
//! JSON panel paints it at its block's offset on the scroll track.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Galley, Pos2, Stroke};
use once_cell::unsync::OnceCell;
use rjview::{LineContainer, Span};
use std::sync::Arc;

use crate::presentation::color_mapping::SyntaxPalette;

/// Point size of the document font.
pub const LINE_FONT_SIZE: f32 = 13.0;

/// Font used for every document line. Monospace so indents line up.
pub fn line_font() -> FontId {
    FontId::monospace(LINE_FONT_SIZE)
}

/// A reusable, paintable run of document lines.
pub struct LayoutBlock {
    job: LayoutJob,
    /// Laid-out `job`, built on first paint and dropped whenever the job changes
    galley: OnceCell<Arc<Galley>>,
    /// Indent depth of each held line, in order
    depths: Vec<usize>,
    font_id: FontId,
    palette: SyntaxPalette,
    indent_width: f32,
}

impl LayoutBlock {
    pub fn new(font_id: FontId, palette: SyntaxPalette, indent_width: f32) -> Self {
        Self {
            job: LayoutJob::default(),
            galley: OnceCell::new(),
            depths: Vec::new(),
            font_id,
            palette,
            indent_width,
        }
    }

    /// Swaps the palette. Only lines presented afterwards use it.
    pub fn set_palette(&mut self, palette: SyntaxPalette) {
        self.palette = palette;
    }

    fn format(&self, color: Color32) -> TextFormat {
        TextFormat {
            font_id: self.font_id.clone(),
            color,
            ..Default::default()
        }
    }

    /// Paints indent guides and text with the first row's top-left at `origin`.
    pub fn paint(&self, painter: &egui::Painter, origin: Pos2, line_height: f32) {
        if self.depths.is_empty() {
            return;
        }

        let stroke = Stroke::new(1.0, self.palette.indent_guide);
        for (row, &depth) in self.depths.iter().enumerate() {
            let top = origin.y + row as f32 * line_height;
            for level in 0..depth {
                let x = origin.x + level as f32 * self.indent_width + 2.0;
                painter.line_segment([egui::pos2(x, top), egui::pos2(x, top + line_height)], stroke);
            }
        }

        let galley = self.galley.get_or_init(|| painter.layout_job(self.job.clone()));
        painter.galley(origin, Arc::clone(galley), self.palette.bracket);
    }
}

impl LineContainer for LayoutBlock {
    fn clear(&mut self) {
        self.job = LayoutJob::default();
        self.galley.take();
        self.depths.clear();
    }

    fn begin_line(&mut self, _index: usize) {
        self.galley.take();
        if !self.depths.is_empty() {
            let format = self.format(self.palette.bracket);
            self.job.append("\n", 0.0, format);
        }
        self.depths.push(0);
    }

    fn append(&mut self, span: Span<'_>) {
        if matches!(span, Span::Indent) {
            if let Some(depth) = self.depths.last_mut() {
                *depth += 1;
            }
        }
        self.galley.take();
        let format = self.format(self.palette.span_color(&span));
        self.job.append(&span.text(), 0.0, format);
    }

    fn line_count(&self) -> usize {
        self.depths.len()
    }
}
