//! Error types for document loading and flattening.

use thiserror::Error;

/// Errors raised while turning a JSON value into display lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// The value nests containers deeper than the configured limit.
    #[error("document is too deeply nested (limit {limit})")]
    TooDeep { limit: usize },
}

/// Errors raised while acquiring, parsing or flattening a document.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Flatten(#[from] FlattenError),
}

impl ViewerError {
    /// True when the failure came from the JSON parser rather than I/O.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, ViewerError::Parse(_))
    }
}
