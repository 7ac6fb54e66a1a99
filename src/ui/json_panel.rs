//! Document panel UI rendering
//!
//! Allocates the full scroll track for the loaded document and paints only
//! the blocks the session has materialized. Scrolling and resizing feed the
//! session. A frame that moves the viewport builds only the anchor block;
//! each later frame materializes one deferred chunk.

use crate::app::AppState;
use crate::io::AsyncLoader;
use egui::{ScrollArea, Sense};

/// Renders the document panel.
pub fn render_json_panel(ui: &mut egui::Ui, state: &mut AppState, loader: &AsyncLoader) {
    let Some(session) = state.document.session_mut() else {
        if loader.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading document...");
            });
        } else {
            ui.label("No document loaded. Open a JSON file or generate the sample document.");
        }
        return;
    };

    let mut scroll_area = ScrollArea::both()
        .id_salt("json_scroll_area")
        .auto_shrink([false, false]);
    if state.viewport.take_scroll_reset() {
        scroll_area = scroll_area.scroll_offset(egui::Vec2::ZERO);
    }

    let viewport_state = &mut state.viewport;
    scroll_area.show_viewport(ui, |ui, visible| {
        let width = session.min_line_width().max(ui.available_width());
        let (track, _) = ui.allocate_exact_size(egui::vec2(width, session.track_height()), Sense::hover());

        if viewport_state.drive(session, visible.min.y, visible.height()) {
            ui.ctx().request_repaint();
        }

        let line_height = session.metrics().line_height;
        let painter = ui.painter();
        for placement in session.placements() {
            let height = placement.range.len() as f32 * line_height;
            let top = placement.top_px;
            if top > visible.max.y || top + height < visible.min.y {
                continue;
            }
            placement
                .container
                .paint(painter, track.min + egui::vec2(0.0, top), line_height);
        }
    });
}
