//! Header panel UI rendering
//!
//! Handles the top bar with document controls, render strategy and theme selectors.

use eframe::egui;
use egui::Color32;
use rjview::RenderStrategy;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a file through the "Open JSON" dialog
    OpenFileRequested(PathBuf),
    /// User clicked "Sample Document" button
    OpenSampleRequested,
    /// User selected another render strategy
    StrategyChanged(RenderStrategy),
    /// User selected another theme
    ThemeChanged(String),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open JSON").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("JSON Files", &["json", "br"])
                .add_filter("All Files", &["*"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            // A cancelled dialog is a no-op
            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🎲 Sample Document").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        ui.separator();

        ui.label("Rendering:");
        let mut strategy = state.config.strategy;
        egui::ComboBox::from_id_salt("strategy_selector")
            .selected_text(strategy_label(strategy))
            .show_ui(ui, |ui| {
                for option in [RenderStrategy::Blocks, RenderStrategy::Append] {
                    ui.selectable_value(&mut strategy, option, strategy_label(option));
                }
            })
            .response
            .on_hover_text("Blocks recycles a fixed set of blocks around the viewport; Append grows one list downward");

        if strategy != state.config.strategy {
            interaction = Some(HeaderInteraction::StrategyChanged(strategy));
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name
                        );
                    }
                });

            if old_theme != current_theme {
                interaction = Some(HeaderInteraction::ThemeChanged(current_theme));
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}

fn strategy_label(strategy: RenderStrategy) -> &'static str {
    match strategy {
        RenderStrategy::Blocks => "Recycled blocks",
        RenderStrategy::Append => "Append",
    }
}
