//! Incremental-append materialization.
//!
//! A simpler alternative to block recycling: lines are appended to a single
//! container in chunks whenever the viewport bottom comes within a look-ahead
//! distance of the rendered bottom. Nothing is ever evicted, so this only suits
//! modestly sized documents.

use crate::document::Document;
use crate::presenter::{present, LineContainer};
use crate::scheduler::ChunkOutcome;

#[derive(Debug)]
pub struct AppendScheduler<C> {
    container: C,
    rendered: usize,
    max_chunk_lines: usize,
    lookahead_px: f32,
    line_height_px: f32,
    viewport_bottom_px: f32,
}

impl<C: LineContainer> AppendScheduler<C> {
    pub fn new(container: C, max_chunk_lines: usize, lookahead_px: f32) -> Self {
        Self {
            container,
            rendered: 0,
            max_chunk_lines: max_chunk_lines.max(1),
            lookahead_px: lookahead_px.max(0.0),
            line_height_px: 0.0,
            viewport_bottom_px: 0.0,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Lines appended so far; they always form the prefix `0..rendered`.
    pub fn rendered_lines(&self) -> usize {
        self.rendered
    }

    /// Records the latest viewport; appending resumes on the next step if needed.
    pub fn on_viewport_change(&mut self, scroll_offset_px: f32, viewport_height_px: f32, line_height_px: f32) {
        self.viewport_bottom_px = scroll_offset_px.max(0.0) + viewport_height_px.max(0.0);
        self.line_height_px = line_height_px;
    }

    fn wants_more(&self, document: &Document) -> bool {
        if self.rendered >= document.len() {
            return false;
        }
        let rendered_bottom = self.rendered as f32 * self.line_height_px;
        self.viewport_bottom_px + self.lookahead_px >= rendered_bottom
    }

    /// Appends the next chunk if the viewport is close enough to the bottom.
    pub fn materialize_next_chunk(&mut self, document: &Document) -> ChunkOutcome {
        if !self.wants_more(document) {
            return ChunkOutcome::Done;
        }

        let start = self.rendered;
        let end = (start + self.max_chunk_lines).min(document.len());
        for (offset, line) in document.lines()[start..end].iter().enumerate() {
            present(line, start + offset, &mut self.container);
        }
        self.rendered = end;
        log::trace!("appended lines {}..{}", start, end);

        if self.wants_more(document) {
            ChunkOutcome::Pending
        } else {
            ChunkOutcome::Done
        }
    }

    pub fn reset(&mut self) {
        self.container.clear();
        self.rendered = 0;
    }

    pub fn restyle(&mut self, mut f: impl FnMut(&mut C)) {
        f(&mut self.container);
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;
    use crate::presenter::TextBlock;

    fn document(count: usize) -> Document {
        Document::from_lines((0..count).map(|i| Line::scalar(0, i.to_string(), "0", false)).collect())
    }

    #[test]
    fn test_appends_until_lookahead_satisfied() {
        let doc = document(1_000);
        let mut scheduler = AppendScheduler::new(TextBlock::new(), 50, 200.0);
        scheduler.on_viewport_change(0.0, 300.0, 10.0);

        // Needs rendered bottom beyond 300 + 200 = 500px, i.e. more than 50 lines.
        assert_eq!(scheduler.materialize_next_chunk(&doc), ChunkOutcome::Pending);
        assert_eq!(scheduler.materialize_next_chunk(&doc), ChunkOutcome::Done);
        assert_eq!(scheduler.rendered_lines(), 100);
        assert_eq!(scheduler.container().line_count(), 100);
    }

    #[test]
    fn test_stops_at_document_end() {
        let doc = document(120);
        let mut scheduler = AppendScheduler::new(TextBlock::new(), 50, 10_000.0);
        scheduler.on_viewport_change(0.0, 300.0, 10.0);
        let mut steps = 0;
        while scheduler.materialize_next_chunk(&doc) == ChunkOutcome::Pending {
            steps += 1;
        }
        assert_eq!(steps, 2);
        assert_eq!(scheduler.rendered_lines(), 120);
        assert_eq!(scheduler.materialize_next_chunk(&doc), ChunkOutcome::Done);
    }

    #[test]
    fn test_scrolling_back_up_stops_appending() {
        let doc = document(1_000);
        let mut scheduler = AppendScheduler::new(TextBlock::new(), 100, 0.0);
        scheduler.on_viewport_change(4_000.0, 500.0, 10.0);
        scheduler.materialize_next_chunk(&doc);
        let rendered = scheduler.rendered_lines();

        scheduler.on_viewport_change(0.0, 500.0, 10.0);
        assert_eq!(scheduler.materialize_next_chunk(&doc), ChunkOutcome::Done);
        assert_eq!(scheduler.rendered_lines(), rendered);
    }
}
