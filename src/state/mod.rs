//! State management modules for the JSON viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Document state (viewer session, document source)
//! - Viewport state (scroll offset, viewport height)
//! - Theme state (theme manager, current theme)

mod document_state;
mod viewport;
mod theme_state;

pub use document_state::{DocumentSource, DocumentState};
pub use viewport::ViewportState;
pub use theme_state::ThemeState;
