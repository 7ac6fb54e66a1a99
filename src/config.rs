//! Viewer configuration.
//!
//! Persisted as a JSON string in the host's settings storage, so every field
//! has a serde default and older stored values keep loading.

use serde::{Deserialize, Serialize};

use crate::flatten::DEFAULT_MAX_DEPTH;

/// Largest accepted `look_around`; stored values above it are clamped.
pub const MAX_LOOK_AROUND: usize = 16;

/// How lines are materialized while scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RenderStrategy {
    /// Fixed pool of recycled block slots around the viewport center.
    #[default]
    Blocks,
    /// Append chunks below the rendered content; nothing is ever evicted.
    Append,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Lines per block (`B`)
    pub block_size: usize,
    /// Blocks kept on each side of the center block (`k`)
    pub look_around: usize,
    /// Upper bound on lines materialized per scheduler step
    pub max_chunk_lines: usize,
    /// Append strategy: distance from the rendered bottom that triggers the next chunk
    pub append_lookahead_px: f32,
    /// Deepest nesting accepted when flattening
    pub max_depth: usize,
    pub strategy: RenderStrategy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            block_size: 100,
            look_around: 1,
            max_chunk_lines: 100,
            append_lookahead_px: 800.0,
            max_depth: DEFAULT_MAX_DEPTH,
            strategy: RenderStrategy::Blocks,
        }
    }
}

impl ViewerConfig {
    /// Number of render slots the block strategy allocates (`2k+1`).
    pub fn slot_capacity(&self) -> usize {
        2 * self.look_around + 1
    }

    /// Returns a copy with degenerate values replaced by usable ones.
    pub fn validated(mut self) -> Self {
        if self.block_size == 0 {
            self.block_size = 1;
        }
        self.look_around = self.look_around.min(MAX_LOOK_AROUND);
        if self.max_chunk_lines == 0 {
            self.max_chunk_lines = 1;
        }
        if !self.append_lookahead_px.is_finite() || self.append_lookahead_px < 0.0 {
            self.append_lookahead_px = 0.0;
        }
        if self.max_depth == 0 {
            self.max_depth = DEFAULT_MAX_DEPTH;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.block_size, 100);
        assert_eq!(config.slot_capacity(), 3);
        assert_eq!(config.strategy, RenderStrategy::Blocks);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ViewerConfig = serde_json::from_str(r#"{"look_around": 2, "strategy": "Append"}"#).unwrap();
        assert_eq!(config.slot_capacity(), 5);
        assert_eq!(config.strategy, RenderStrategy::Append);
        assert_eq!(config.block_size, 100);
    }

    #[test]
    fn test_validated_fixes_zeroes() {
        let config = ViewerConfig {
            block_size: 0,
            max_chunk_lines: 0,
            append_lookahead_px: f32::NAN,
            max_depth: 0,
            ..ViewerConfig::default()
        }
        .validated();
        assert_eq!(config.block_size, 1);
        assert_eq!(config.max_chunk_lines, 1);
        assert_eq!(config.append_lookahead_px, 0.0);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_validated_clamps_look_around() {
        let stored: ViewerConfig = serde_json::from_str(&format!(r#"{{"look_around": {}}}"#, usize::MAX)).unwrap();
        let config = stored.validated();
        assert_eq!(config.look_around, MAX_LOOK_AROUND);
        assert_eq!(config.slot_capacity(), 2 * MAX_LOOK_AROUND + 1);

        let small = ViewerConfig { look_around: 3, ..ViewerConfig::default() }.validated();
        assert_eq!(small.look_around, 3);
    }
}
