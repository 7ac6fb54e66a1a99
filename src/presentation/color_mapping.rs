//! Color mapping for JSON syntax.
//!
//! Maps presenter spans to the active theme's syntax colors. Kept apart from
//! the rendering code so a palette can be swapped into existing containers.

use egui::Color32;
use rjview::{Span, ThemeColors, ValueKind};

/// The subset of a theme used to color document lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntaxPalette {
    pub key: Color32,
    pub array_index: Color32,
    pub string: Color32,
    pub number: Color32,
    pub literal: Color32,
    pub bracket: Color32,
    pub indent_guide: Color32,
}

impl SyntaxPalette {
    /// Returns the text color for a span.
    pub fn span_color(&self, span: &Span<'_>) -> Color32 {
        match span {
            Span::Indent => self.indent_guide,
            Span::Key { array_index: true, .. } => self.array_index,
            Span::Key { .. } => self.key,
            Span::Value { kind, .. } => match kind {
                ValueKind::String => self.string,
                ValueKind::Number => self.number,
                ValueKind::Literal => self.literal,
            },
            Span::Bracket(_) => self.bracket,
        }
    }
}

/// Extracts the syntax palette from a theme's colors.
pub fn syntax_palette(colors: &ThemeColors) -> SyntaxPalette {
    SyntaxPalette {
        key: colors.key,
        array_index: colors.array_index,
        string: colors.string,
        number: colors.number,
        literal: colors.literal,
        bracket: colors.bracket,
        indent_guide: colors.indent_guide,
    }
}
