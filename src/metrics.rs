//! Line metrics used to size the virtual scroll track.
//!
//! Metrics are measured once per document through a [`TextMeasurer`], which the
//! host backs with real font metrics. Nothing here runs per scroll tick.

use crate::line::{Line, INDENT, KEY_SEPARATOR};

/// Font capability supplied by the host.
pub trait TextMeasurer {
    /// Pixel width of `text` laid out on a single row.
    fn text_width(&mut self, text: &str) -> f32;

    /// Pixel height of one rendered line.
    fn line_height(&mut self) -> f32;
}

/// Fixed-advance measurer, for headless use and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl FixedAdvanceMeasurer {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self { char_width, line_height }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn text_width(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&mut self) -> f32 {
        self.line_height
    }
}

/// Pixel dimensions of a document's lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Height of one rendered line
    pub line_height: f32,
    /// Width of the widest formatted line
    pub max_line_width: f32,
    /// Index of the widest line, if the document has any lines
    pub widest_line: Option<usize>,
}

impl LineMetrics {
    /// Measures every line once and keeps the widest.
    pub fn measure(lines: &[Line], measurer: &mut dyn TextMeasurer) -> Self {
        let indent_width = measurer.text_width(INDENT);
        let separator_width = measurer.text_width(KEY_SEPARATOR);

        let mut max_line_width = 0.0_f32;
        let mut widest_line = None;
        for (index, line) in lines.iter().enumerate() {
            let width = measure_line(line, indent_width, separator_width, measurer);
            if widest_line.is_none() || width > max_line_width {
                max_line_width = width;
                widest_line = Some(index);
            }
        }

        Self {
            line_height: measurer.line_height(),
            max_line_width: max_line_width.ceil(),
            widest_line,
        }
    }

    /// Height of the whole scroll track for `line_count` lines.
    pub fn total_height(&self, line_count: usize) -> f32 {
        self.line_height * line_count as f32
    }

    /// Height of one block of `block_size` lines.
    pub fn block_height(&self, block_size: usize) -> f32 {
        self.line_height * block_size as f32
    }
}

fn measure_line(line: &Line, indent_width: f32, separator_width: f32, measurer: &mut dyn TextMeasurer) -> f32 {
    let mut width = indent_width * line.depth() as f32;
    if let Some(key) = line.key() {
        width += measurer.text_width(key) + separator_width;
    }
    if let Some(value) = line.value() {
        width += measurer.text_width(value);
    }
    if let Some(bracket) = line.bracket_glyph() {
        width += measurer.text_width(bracket.as_str());
    }
    width
}
