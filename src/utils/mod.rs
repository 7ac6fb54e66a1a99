//! Utility modules for the JSON viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_count, format_memory_mb, format_pixels, get_current_memory_mb};
