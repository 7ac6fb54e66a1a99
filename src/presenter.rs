//! Presenter: turns a [`Line`] into styled spans inside a container.
//!
//! The presenter holds no state. Each call writes one line into the target
//! container, so lines may be presented repeatedly, into different
//! containers, and in any order.

use crate::line::{Bracket, Line, INDENT, KEY_SEPARATOR};

/// Syntax class of a scalar value, derived from its formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    /// `true`, `false` or `null`
    Literal,
}

impl ValueKind {
    pub fn classify(text: &str) -> Self {
        if text.starts_with('"') {
            ValueKind::String
        } else if matches!(text, "true" | "false" | "null") {
            ValueKind::Literal
        } else {
            ValueKind::Number
        }
    }
}

/// One styled piece of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Indent,
    Key { text: &'a str, array_index: bool },
    Value { text: &'a str, kind: ValueKind },
    Bracket(Bracket),
}

impl Span<'_> {
    /// The text the span displays, separators included.
    pub fn text(&self) -> String {
        match self {
            Span::Indent => INDENT.to_string(),
            Span::Key { text, .. } => format!("{}{}", text, KEY_SEPARATOR),
            Span::Value { text, .. } => (*text).to_string(),
            Span::Bracket(bracket) => bracket.as_str().to_string(),
        }
    }
}

/// Opaque container capability the presenter writes into.
pub trait LineContainer {
    /// Drops every line currently held.
    fn clear(&mut self);

    /// Starts a new line for document line `index`.
    fn begin_line(&mut self, index: usize);

    /// Appends a span to the line most recently begun.
    fn append(&mut self, span: Span<'_>);

    /// Number of lines currently held.
    fn line_count(&self) -> usize;
}

/// Writes `line` into `container` as document line `index`.
pub fn present(line: &Line, index: usize, container: &mut dyn LineContainer) {
    container.begin_line(index);
    for _ in 0..line.depth() {
        container.append(Span::Indent);
    }
    if let Some(key) = line.key() {
        container.append(Span::Key {
            text: key,
            array_index: line.is_array_element(),
        });
    }
    if let Some(value) = line.value() {
        container.append(Span::Value {
            text: value,
            kind: ValueKind::classify(value),
        });
    }
    if let Some(bracket) = line.bracket_glyph() {
        container.append(Span::Bracket(bracket));
    }
}

/// Role of an owned span in a [`TextBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanRole {
    Indent,
    Key,
    ArrayIndex,
    Value(ValueKind),
    Bracket,
}

/// A line held by a [`TextBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLine {
    pub index: usize,
    pub spans: Vec<(SpanRole, String)>,
}

impl TextLine {
    pub fn text(&self) -> String {
        self.spans.iter().map(|(_, t)| t.as_str()).collect()
    }
}

/// Plain owned container: lines as lists of role-tagged strings.
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    lines: Vec<TextLine>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }
}

impl LineContainer for TextBlock {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn begin_line(&mut self, index: usize) {
        self.lines.push(TextLine {
            index,
            spans: Vec::new(),
        });
    }

    fn append(&mut self, span: Span<'_>) {
        let role = match span {
            Span::Indent => SpanRole::Indent,
            Span::Key { array_index: true, .. } => SpanRole::ArrayIndex,
            Span::Key { .. } => SpanRole::Key,
            Span::Value { kind, .. } => SpanRole::Value(kind),
            Span::Bracket(_) => SpanRole::Bracket,
        };
        let text = span.text();
        if let Some(line) = self.lines.last_mut() {
            line.spans.push((role, text));
        }
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}
