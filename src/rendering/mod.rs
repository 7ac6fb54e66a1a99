//! Rendering subsystem for drawing document lines
//!
//! - Line renderer (the GUI line container and its painting)
//! - Text measurement (egui-backed glyph widths for line metrics)

pub mod line_renderer;
pub mod text_measure;
