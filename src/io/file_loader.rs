//! Asynchronous loading state management.

/// Holds the state of an async loading operation.
///
/// Only these flags are shared; results come through a channel.
/// Wrapped in an `Arc<Mutex<>>` and shared with the loading thread.
pub struct LoadingState {
    /// True while a document is being read, parsed or flattened
    pub in_progress: bool,
    /// Bumped by every load; only the latest load may clear `in_progress`
    pub generation: u64,
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            in_progress: false,
            generation: 0,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
