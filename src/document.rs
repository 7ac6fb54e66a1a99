//! The flattened document held by a viewer session.

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::error::{FlattenError, ViewerError};
use crate::flatten::flatten_with_limit;
use crate::line::Line;
use crate::metrics::{LineMetrics, TextMeasurer};

/// Ordered, read-only line sequence for one loaded file.
///
/// Metrics are measured on first request and cached for the lifetime of the
/// document.
#[derive(Debug, Default)]
pub struct Document {
    lines: Vec<Line>,
    metrics: OnceCell<LineMetrics>,
}

impl Document {
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self {
            lines,
            metrics: OnceCell::new(),
        }
    }

    /// Flattens a parsed value.
    pub fn from_value(value: &Value, max_depth: usize) -> Result<Self, FlattenError> {
        Ok(Self::from_lines(flatten_with_limit(value, max_depth)?))
    }

    /// Parses `text` as JSON and flattens the result.
    pub fn parse(text: &str, max_depth: usize) -> Result<Self, ViewerError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value, max_depth)?)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of blocks of `block_size` lines, the last one possibly partial.
    pub fn block_count(&self, block_size: usize) -> usize {
        if block_size == 0 {
            return 0;
        }
        self.lines.len().div_ceil(block_size)
    }

    /// Returns the cached metrics, measuring them on first call.
    pub fn metrics(&self, measurer: &mut dyn TextMeasurer) -> LineMetrics {
        *self.metrics.get_or_init(|| {
            let started = std::time::Instant::now();
            let metrics = LineMetrics::measure(&self.lines, measurer);
            log::debug!(
                "measured {} lines in {:?}: line height {:.1}px, widest {:.1}px",
                self.lines.len(),
                started.elapsed(),
                metrics.line_height,
                metrics.max_line_width
            );
            metrics
        })
    }

    /// Metrics if they have already been measured.
    pub fn cached_metrics(&self) -> Option<LineMetrics> {
        self.metrics.get().copied()
    }
}
