//! Display line records produced by flattening a JSON value.
//!
//! A [`Line`] is the unit of display: one indented row of the viewer. Lines are
//! built once, in document order, and never mutated afterwards.

use std::fmt;

/// Text inserted once per nesting level.
pub const INDENT: &str = "    ";

/// Separator placed between a key and whatever follows it.
pub const KEY_SEPARATOR: &str = ": ";

/// Structural glyph carried by lines that open or close a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    OpenArray,
    CloseArray,
    OpenObject,
    CloseObject,
}

impl Bracket {
    /// The single-character glyph for this bracket.
    pub fn glyph(self) -> char {
        match self {
            Bracket::OpenArray => '[',
            Bracket::CloseArray => ']',
            Bracket::OpenObject => '{',
            Bracket::CloseObject => '}',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bracket::OpenArray => "[",
            Bracket::CloseArray => "]",
            Bracket::OpenObject => "{",
            Bracket::CloseObject => "}",
        }
    }

    pub fn is_opening(self) -> bool {
        matches!(self, Bracket::OpenArray | Bracket::OpenObject)
    }

    pub fn is_closing(self) -> bool {
        !self.is_opening()
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flattened display record derived from the JSON tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    depth: usize,
    key: Option<String>,
    value: Option<String>,
    is_array_element: bool,
    bracket: Option<Bracket>,
}

impl Line {
    /// A member whose value is a scalar: `key: value`.
    pub fn scalar(depth: usize, key: impl Into<String>, value: impl Into<String>, is_array_element: bool) -> Self {
        Self::checked(Self {
            depth,
            key: Some(key.into()),
            value: Some(value.into()),
            is_array_element,
            bracket: None,
        })
    }

    /// A member whose value is a nested container. Arrays carry their opening bracket.
    pub fn container_key(depth: usize, key: impl Into<String>, is_array_element: bool, bracket: Option<Bracket>) -> Self {
        Self::checked(Self {
            depth,
            key: Some(key.into()),
            value: None,
            is_array_element,
            bracket,
        })
    }

    /// A bare structural line such as the wrapper `[` of a root array.
    pub fn bracket(depth: usize, bracket: Bracket, is_array_element: bool) -> Self {
        Self::checked(Self {
            depth,
            key: None,
            value: None,
            is_array_element,
            bracket: Some(bracket),
        })
    }

    /// The degenerate single line of a scalar document root.
    pub fn bare_value(value: impl Into<String>) -> Self {
        Self::checked(Self {
            depth: 0,
            key: None,
            value: Some(value.into()),
            is_array_element: false,
            bracket: None,
        })
    }

    fn checked(line: Self) -> Self {
        debug_assert!(line.is_well_formed(), "malformed line: {:?}", line);
        line
    }

    /// Checks the structural invariants every emitted line must satisfy.
    ///
    /// A line carries a value or a bracket, or is a key line opening a nested
    /// object (which has no bracket of its own). Closing brackets stand alone.
    pub fn is_well_formed(&self) -> bool {
        match (&self.key, &self.value, self.bracket) {
            (_, Some(_), Some(_)) => false,
            (Some(_), _, Some(b)) if b.is_closing() => false,
            (None, None, None) => false,
            _ => true,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_array_element(&self) -> bool {
        self.is_array_element
    }

    pub fn bracket_glyph(&self) -> Option<Bracket> {
        self.bracket
    }

    /// Number of characters in the fully formatted line, indentation included.
    pub fn char_len(&self) -> usize {
        let mut len = self.depth * INDENT.len();
        if let Some(key) = &self.key {
            len += key.chars().count() + KEY_SEPARATOR.len();
        }
        if let Some(value) = &self.value {
            len += value.chars().count();
        }
        if self.bracket.is_some() {
            len += 1;
        }
        len
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT)?;
        }
        if let Some(key) = &self.key {
            write!(f, "{}{}", key, KEY_SEPARATOR)?;
        }
        if let Some(value) = &self.value {
            f.write_str(value)?;
        }
        if let Some(bracket) = self.bracket {
            write!(f, "{}", bracket)?;
        }
        Ok(())
    }
}
