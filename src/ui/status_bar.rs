//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying document and render statistics.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::utils::{format_count, format_memory_mb, format_pixels, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Loader, for the in-progress indicator
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        if loader.is_loading() {
            ui.label(RichText::new("Loading...").strong());
            return;
        }

        match (state.document.session(), state.document.source()) {
            (Some(session), Some(source)) => {
                let document = session.document();
                let config = session.config();
                ui.label(RichText::new(format!(
                    "{} | Lines: {} | Blocks: {} x {} | Materialized: {} | Width: {}",
                    source,
                    format_count(document.len()),
                    format_count(document.block_count(config.block_size)),
                    format_count(config.block_size),
                    format_count(session.materialized_line_count()),
                    format_pixels(session.min_line_width()),
                )).strong());
            }
            _ => {
                ui.label(RichText::new("No document loaded").strong());
            }
        }
    });
}
