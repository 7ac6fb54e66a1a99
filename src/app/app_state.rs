//! Centralized application state for the JSON viewer.
//!
//! Composes focused state components, each keeping its own invariants, so
//! panels can borrow the parts they need independently.

use rjview::ViewerConfig;

use crate::state::{DocumentState, ThemeState, ViewportState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded document and its viewer session
    pub document: DocumentState,

    /// Scroll viewport last reported to the session
    pub viewport: ViewportState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Viewer preferences, persisted between runs
    pub config: ViewerConfig,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_preferences(rjview::DEFAULT_THEME.to_string(), ViewerConfig::default())
    }

    /// Creates a state with theme and viewer settings loaded from storage.
    pub fn with_preferences(theme_name: String, config: ViewerConfig) -> Self {
        Self {
            document: DocumentState::new(),
            viewport: ViewportState::new(),
            theme: ThemeState::with_theme(theme_name),
            config: config.validated(),
            error_message: None,
        }
    }

    /// Drops the current document before a new load starts.
    ///
    /// This clears the document, viewport and error message.
    pub fn reset_document_state(&mut self) {
        self.document.clear();
        self.viewport.reset();
        self.error_message = None;
    }
}
