//! Loaded document state management.
//!
//! This module owns the viewer session for the loaded document together with
//! where that document came from.

use std::fmt;
use std::path::PathBuf;

use rjview::{Document, ViewerSession};

use crate::rendering::line_renderer::LayoutBlock;

/// Where the loaded document came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// A local file, plain or Brotli-compressed
    File(PathBuf),
    /// The generated sample document
    Sample { seed: u64 },
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Sample { seed } => write!(f, "Sample Document | Seed: {}", seed),
        }
    }
}

/// State related to the loaded document.
///
/// Responsibilities:
/// - Owning the session (document, metrics and render containers)
/// - Tracking the document source for display
#[derive(Default)]
pub struct DocumentState {
    session: Option<ViewerSession<LayoutBlock>>,
    source: Option<DocumentSource>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly built session.
    pub fn load_session(&mut self, session: ViewerSession<LayoutBlock>, source: DocumentSource) {
        self.session = Some(session);
        self.source = Some(source);
    }

    /// Removes the session, handing back its document and source for a rebuild.
    pub fn take_document(&mut self) -> Option<(Document, DocumentSource)> {
        let session = self.session.take()?;
        let source = self.source.take()?;
        Some((session.into_document(), source))
    }

    pub fn clear(&mut self) {
        self.session = None;
        self.source = None;
    }

    pub fn session(&self) -> Option<&ViewerSession<LayoutBlock>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ViewerSession<LayoutBlock>> {
        self.session.as_mut()
    }

    pub fn source(&self) -> Option<&DocumentSource> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels() {
        assert_eq!(DocumentSource::File(PathBuf::from("data.json")).to_string(), "data.json");
        assert_eq!(
            DocumentSource::Sample { seed: 42 }.to_string(),
            "Sample Document | Seed: 42"
        );
    }

    #[test]
    fn test_empty_state() {
        let mut state = DocumentState::new();
        assert!(state.session().is_none());
        assert!(state.take_document().is_none());
    }
}
