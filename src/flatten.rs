//! Line model builder.
//!
//! Recursively walks a parsed JSON value and emits the flat, ordered sequence of
//! [`Line`]s the viewer displays. Root arrays are wrapped in bracket lines; root
//! objects are not. Nested arrays get a key line carrying `[` and a matching `]`
//! line after their elements, nested objects only get the key line.

use serde_json::{Map, Value};

use crate::error::FlattenError;
use crate::line::{Bracket, Line};

/// Nesting depth accepted by [`flatten`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Flattens `value` with the default depth guard.
pub fn flatten(value: &Value) -> Result<Vec<Line>, FlattenError> {
    flatten_with_limit(value, DEFAULT_MAX_DEPTH)
}

/// Flattens `value`, failing with [`FlattenError::TooDeep`] once a line would
/// sit deeper than `max_depth`.
pub fn flatten_with_limit(value: &Value, max_depth: usize) -> Result<Vec<Line>, FlattenError> {
    let mut builder = LineBuilder {
        lines: Vec::new(),
        max_depth,
    };

    match value {
        Value::Array(items) => {
            builder.lines.push(Line::bracket(0, Bracket::OpenArray, true));
            builder.push_array(items, 1)?;
            builder.lines.push(Line::bracket(0, Bracket::CloseArray, true));
        }
        Value::Object(members) => builder.push_object(members, 0)?,
        scalar => builder.lines.push(Line::bare_value(format_scalar(scalar))),
    }

    Ok(builder.lines)
}

/// Formats a scalar the way it is displayed: strings inside double quotes,
/// `null` literally, numbers and booleans in canonical form.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_display(s),
        // Containers never reach here through the builder.
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Wraps `s` in double quotes as-is. Control characters are escaped so a
/// value always stays on one display line.
fn quote_display(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out.push('"');
    out
}

struct LineBuilder {
    lines: Vec<Line>,
    max_depth: usize,
}

impl LineBuilder {
    fn push_array(&mut self, items: &[Value], depth: usize) -> Result<(), FlattenError> {
        self.guard(depth)?;
        for (index, item) in items.iter().enumerate() {
            self.push_member(index.to_string(), item, depth, true)?;
        }
        Ok(())
    }

    fn push_object(&mut self, members: &Map<String, Value>, depth: usize) -> Result<(), FlattenError> {
        self.guard(depth)?;
        for (key, member) in members {
            self.push_member(key.clone(), member, depth, false)?;
        }
        Ok(())
    }

    fn push_member(
        &mut self,
        key: String,
        value: &Value,
        depth: usize,
        is_array_element: bool,
    ) -> Result<(), FlattenError> {
        match value {
            Value::Array(items) => {
                self.lines.push(Line::container_key(depth, key, is_array_element, Some(Bracket::OpenArray)));
                self.push_array(items, depth + 1)?;
                self.lines.push(Line::bracket(depth, Bracket::CloseArray, is_array_element));
            }
            Value::Object(members) => {
                self.lines.push(Line::container_key(depth, key, is_array_element, None));
                self.push_object(members, depth + 1)?;
            }
            scalar => {
                self.lines.push(Line::scalar(depth, key, format_scalar(scalar), is_array_element));
            }
        }
        Ok(())
    }

    fn guard(&self, depth: usize) -> Result<(), FlattenError> {
        if depth > self.max_depth {
            Err(FlattenError::TooDeep { limit: self.max_depth })
        } else {
            Ok(())
        }
    }
}
