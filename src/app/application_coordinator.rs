//! Application-level coordination and workflow management.
//!
//! Handles document loading, session building, and the preference changes
//! that require a loaded session to be rebuilt or restyled.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::presentation::color_mapping;
use crate::rendering::line_renderer::{line_font, LayoutBlock};
use crate::rendering::text_measure::PainterMeasurer;
use rjview::{Document, RenderStrategy, TextMeasurer, ThemeColors, ViewerConfig, ViewerSession, INDENT};
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous file loading.
    ///
    /// Immediately drops the previous document so the loading indicator shows.
    pub fn open_file(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.reset_document_state();
        loader.start_file_load(path, state.config.max_depth, ctx);
    }

    /// Initiates generation of the sample document.
    pub fn open_sample(state: &mut AppState, loader: &mut AsyncLoader, ctx: &egui::Context) {
        state.reset_document_state();
        loader.start_sample_load(state.config.max_depth, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader, ctx: &egui::Context) -> bool {
        match loader.check_completion() {
            LoadResult::Success { document, source } => {
                let session = build_session(document, &state.config, ctx, state.theme.colors());
                state.document.load_session(session, source);
                state.viewport.reset();
                state.error_message = None;
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading JSON: {}", error_msg));
                state.document.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Switches the render strategy, rebuilding a loaded session around the
    /// same document.
    pub fn change_strategy(state: &mut AppState, strategy: RenderStrategy, ctx: &egui::Context) {
        if state.config.strategy == strategy {
            return;
        }
        log::info!("render strategy changed to {:?}", strategy);
        state.config.strategy = strategy;

        if let Some((document, source)) = state.document.take_document() {
            let session = build_session(document, &state.config, ctx, state.theme.colors());
            state.document.load_session(session, source);
            state.viewport.invalidate();
        }
    }

    /// Switches the theme and re-presents every materialized line with the
    /// new syntax palette.
    pub fn change_theme(state: &mut AppState, theme_name: String) {
        state.theme.set_theme(theme_name);
        let palette = color_mapping::syntax_palette(state.theme.colors());

        if let Some(session) = state.document.session_mut() {
            session.restyle(|block| block.set_palette(palette));
            state.viewport.invalidate();
        }
    }
}

/// Measures `document` with the line font and wraps it in a session whose
/// containers paint with the current theme.
fn build_session(
    document: Document,
    config: &ViewerConfig,
    ctx: &egui::Context,
    colors: &ThemeColors,
) -> ViewerSession<LayoutBlock> {
    let font_id = line_font();
    let painter = ctx.layer_painter(egui::LayerId::background());
    let mut measurer = PainterMeasurer::new(painter, font_id.clone());
    let indent_width = measurer.text_width(INDENT);
    let palette = color_mapping::syntax_palette(colors);

    ViewerSession::new(document, config.clone(), &mut measurer, move || {
        LayoutBlock::new(font_id.clone(), palette, indent_width)
    })
}
