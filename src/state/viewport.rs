//! Scroll viewport state management.
//!
//! Tracks the last scroll offset and viewport height handed to the session so
//! the session is only re-evaluated when one of them actually changes.

use rjview::{ChunkOutcome, LineContainer, ViewerSession};

/// State of the document scroll viewport.
#[derive(Debug, Clone)]
pub struct ViewportState {
    scroll_y: f32,
    height: f32,
    /// False until the session has seen the current viewport
    reported: bool,
    /// Scroll back to the top on the next frame
    scroll_reset: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self {
            scroll_y: 0.0,
            height: 0.0,
            reported: false,
            scroll_reset: false,
        }
    }

    /// Resets for a newly loaded document.
    pub fn reset(&mut self) {
        *self = Self::new();
        self.scroll_reset = true;
    }

    /// Forces the next [`observe`](Self::observe) to report a change.
    pub fn invalidate(&mut self) {
        self.reported = false;
    }

    /// Records the viewport seen this frame. Returns true if the session
    /// needs to be told about it.
    pub fn observe(&mut self, scroll_y: f32, height: f32) -> bool {
        let changed = !self.reported || scroll_y != self.scroll_y || height != self.height;
        self.scroll_y = scroll_y;
        self.height = height;
        self.reported = true;
        changed
    }

    /// Runs one frame of session work for the visible viewport.
    ///
    /// A frame that moves the viewport only materializes the anchor block; the
    /// look-around chunks start on the following frames. Returns true while
    /// another frame is needed.
    pub fn drive<C: LineContainer>(&mut self, session: &mut ViewerSession<C>, scroll_y: f32, height: f32) -> bool {
        if self.observe(scroll_y, height) {
            session.on_viewport_change(scroll_y, height);
            return true;
        }
        session.materialize_next_chunk() == ChunkOutcome::Pending
    }

    /// Returns true once after a reset.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}
