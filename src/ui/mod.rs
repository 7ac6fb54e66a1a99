//! UI panel rendering subsystem
//!
//! - Header panel (document controls, render strategy, theme selector)
//! - JSON panel (virtualized document view)
//! - Status bar (memory and document statistics)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod json_panel;
pub mod status_bar;
pub mod panel_manager;
