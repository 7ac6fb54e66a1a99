//! rjview JSON Viewer GUI Application
//!
//! An interactive viewer for large JSON documents built on egui. The document
//! is flattened into one display line per scalar, key or bracket, and only the
//! blocks of lines around the viewport are laid out, so scrolling cost does
//! not grow with the document.
//!
//! Also:
//! - Asynchronous loading of plain or Brotli-compressed files
//! - A generated sample document for demonstration
//! - Multiple themes and viewer settings with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Syntax color mapping
//! - `io/` - Background document loading
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panel rendering
//! - `rendering/` - Line containers, painting and text measurement
//! - `state/` - State for the document, viewport and theme

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use rjview::ViewerConfig;
use ui::panel_manager::{PanelInteraction, PanelManager};

const VIEWER_CONFIG_KEY: &str = "viewer_config";

/// Main application entry point that initializes and launches the JSON viewer GUI.
fn main() -> eframe::Result {
    env_logger::init();

    // An optional first argument names a file to load on startup
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("rjview JSON Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "rjview JSON Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(JsonViewerApp::new(cc, initial_file)))),
    )
}

/// The main JSON viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading, session building and preference changes
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct JsonViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous document loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl JsonViewerApp {
    /// Creates a viewer with theme and viewer settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let config: ViewerConfig = SettingsCoordinator::load_setting_or(
            cc.storage,
            VIEWER_CONFIG_KEY,
            ViewerConfig::default(),
        );

        Self {
            state: AppState::with_preferences(theme_name, config),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, VIEWER_CONFIG_KEY, &self.state.config);
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample(&mut self.state, &mut self.loader, ctx);
            }
            PanelInteraction::StrategyChanged(strategy) => {
                ApplicationCoordinator::change_strategy(&mut self.state, strategy, ctx);
            }
            PanelInteraction::ThemeChanged(theme_name) => {
                ApplicationCoordinator::change_theme(&mut self.state, theme_name);
            }
        }
    }
}

impl eframe::App for JsonViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader, ctx);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);

            // Persist preference changes right away (for crash resilience)
            if let Some(storage) = frame.storage_mut() {
                self.save_preferences(storage);
            }
        }
    }
}
