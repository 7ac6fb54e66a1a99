//! Cooperative materialization scheduler.
//!
//! The host calls [`BlockScheduler::on_viewport_change`] whenever the scroll
//! position or viewport size changes, then [`BlockScheduler::materialize_next_chunk`]
//! once per idle tick until it reports [`ChunkOutcome::Done`]. The anchor block
//! is materialized synchronously inside `on_viewport_change`; look-around
//! blocks are deferred to the chunk steps. No timers live here.

use std::collections::VecDeque;

use crate::document::Document;
use crate::presenter::LineContainer;
use crate::window::{center_block, BlockIndex, Evaluation, WindowManager};

/// Result of one scheduler step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// More work is queued; call again on the next tick.
    Pending,
    /// Everything targeted by the latest viewport is materialized.
    Done,
}

impl ChunkOutcome {
    pub fn is_done(self) -> bool {
        self == ChunkOutcome::Done
    }
}

/// Drives a [`WindowManager`] in bounded chunks.
#[derive(Debug)]
pub struct BlockScheduler<C> {
    window: WindowManager<C>,
    queue: VecDeque<usize>,
    max_chunk_lines: usize,
}

impl<C: LineContainer> BlockScheduler<C> {
    pub fn new(block_size: usize, look_around: usize, max_chunk_lines: usize, make_container: impl FnMut() -> C) -> Self {
        Self {
            window: WindowManager::new(block_size, look_around, make_container),
            queue: VecDeque::new(),
            max_chunk_lines: max_chunk_lines.max(1),
        }
    }

    pub fn window(&self) -> &WindowManager<C> {
        &self.window
    }

    /// True when no deferred work is queued.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Re-evaluates the window for a new scroll center.
    ///
    /// Work queued for an earlier viewport is dropped and recomputed from the
    /// current slot assignments, so stale targets are never appended to.
    pub fn on_viewport_change(&mut self, document: &Document, scroll_center_px: f32, block_height_px: f32) -> Evaluation {
        let center = center_block(scroll_center_px, block_height_px);
        let evaluation = self.window.evaluate(center, document.len());

        self.window.materialize(evaluation.anchor, document.lines(), usize::MAX);
        self.rebuild_queue(center, evaluation.anchor);
        evaluation
    }

    fn rebuild_queue(&mut self, center: BlockIndex, anchor: usize) {
        let mut pending: Vec<(BlockIndex, usize)> = self
            .window
            .slots()
            .iter()
            .enumerate()
            .filter(|(i, s)| *i != anchor && !s.is_complete())
            .filter_map(|(i, s)| s.block().map(|b| ((b - center).abs(), i)))
            .collect();
        pending.sort();

        let dropped = self.queue.len();
        self.queue = pending.into_iter().map(|(_, slot)| slot).collect();
        if dropped > 0 {
            log::trace!("dropped {} queued slot(s), requeued {}", dropped, self.queue.len());
        }
    }

    /// Materializes at most `max_chunk_lines` queued lines.
    pub fn materialize_next_chunk(&mut self, document: &Document) -> ChunkOutcome {
        let mut budget = self.max_chunk_lines;
        while budget > 0 {
            let Some(&slot) = self.queue.front() else {
                break;
            };
            let presented = self.window.materialize(slot, document.lines(), budget);
            budget -= presented.min(budget);
            if presented == 0 || self.window.slots()[slot].is_complete() {
                self.queue.pop_front();
            }
        }

        if self.queue.is_empty() {
            ChunkOutcome::Done
        } else {
            ChunkOutcome::Pending
        }
    }

    /// Drops all assignments and queued work, e.g. after restyling.
    pub fn reset(&mut self) {
        self.window.reset();
        self.queue.clear();
    }

    pub fn restyle(&mut self, f: impl FnMut(&mut C)) {
        self.window.restyle(f);
        self.queue.clear();
    }
}
