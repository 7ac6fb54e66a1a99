//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar and document panel, and forwards header
//! interactions to the application.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{header, json_panel, status_bar};
use rjview::RenderStrategy;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the generated sample document
    OpenSampleRequested,
    /// User selected a render strategy
    StrategyChanged(RenderStrategy),
    /// User selected a theme
    ThemeChanged(String),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                    header::HeaderInteraction::StrategyChanged(strategy) => {
                        PanelInteraction::StrategyChanged(strategy)
                    }
                    header::HeaderInteraction::ThemeChanged(name) => {
                        PanelInteraction::ThemeChanged(name)
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        let document_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(state.theme.colors().extreme_background);

        egui::CentralPanel::default()
            .frame(document_frame)
            .show(ctx, |ui| {
                json_panel::render_json_panel(ui, state, loader);
            });

        interaction
    }
}
