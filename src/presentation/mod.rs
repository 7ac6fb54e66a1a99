//! Presentation layer for visual styling and color mapping.
//!
//! Maps the syntax roles of presented spans to theme colors.

pub mod color_mapping;
