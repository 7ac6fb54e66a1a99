//! Block-recycling window manager.
//!
//! The document is split into blocks of `B` lines. A fixed pool of `2k+1`
//! render slots holds the block at the viewport center and `k` blocks on each
//! side. When the center moves, only slots whose block left the `±k` window are
//! reassigned; slots that still hold a wanted block keep their content.
//!
//! Slots assigned a block outside `[0, block_count)` hold an empty range. The
//! manager reports where each slot belongs (`block × block_height`) but never
//! positions anything itself.

use std::cmp::Reverse;
use std::ops::Range;

use crate::line::Line;
use crate::presenter::{present, LineContainer};

/// Signed block index; negative or past-the-end blocks are valid but empty.
pub type BlockIndex = i64;

/// Maps a scroll center in pixels to the block under it.
pub fn center_block(scroll_center_px: f32, block_height_px: f32) -> BlockIndex {
    if block_height_px <= 0.0 || !scroll_center_px.is_finite() {
        return 0;
    }
    (scroll_center_px / block_height_px).floor() as BlockIndex
}

/// A reusable materialization unit.
#[derive(Debug)]
pub struct RenderSlot<C> {
    block: Option<BlockIndex>,
    range: Range<usize>,
    materialized: usize,
    container: C,
}

impl<C> RenderSlot<C> {
    fn new(container: C) -> Self {
        Self {
            block: None,
            range: 0..0,
            materialized: 0,
            container,
        }
    }

    /// Block currently assigned, `None` before the first evaluation.
    pub fn block(&self) -> Option<BlockIndex> {
        self.block
    }

    /// Half-open line range the slot displays, `None` when unassigned.
    pub fn assigned_range(&self) -> Option<Range<usize>> {
        self.block.map(|_| self.range.clone())
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Lines of the assigned range already written into the container.
    pub fn materialized_lines(&self) -> usize {
        self.materialized
    }

    /// True once every line of the assigned range has been presented.
    pub fn is_complete(&self) -> bool {
        self.materialized >= self.range.len()
    }
}

/// Result of one window evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub center: BlockIndex,
    /// Slot holding the center block
    pub anchor: usize,
    /// Slots whose block changed during this evaluation
    pub reassigned: Vec<usize>,
}

/// Where a slot's content belongs on the scroll track.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPlacement {
    pub slot: usize,
    pub block: BlockIndex,
    pub top_px: f32,
    pub range: Range<usize>,
}

/// Owns the slot pool and decides which block each slot displays.
#[derive(Debug)]
pub struct WindowManager<C> {
    slots: Vec<RenderSlot<C>>,
    block_size: usize,
    look_around: usize,
    center: Option<BlockIndex>,
    anchor: usize,
    total_reassignments: u64,
}

impl<C: LineContainer> WindowManager<C> {
    /// Creates the pool of `2 * look_around + 1` slots.
    pub fn new(block_size: usize, look_around: usize, mut make_container: impl FnMut() -> C) -> Self {
        let capacity = 2 * look_around + 1;
        let slots = (0..capacity).map(|_| RenderSlot::new(make_container())).collect();
        Self {
            slots,
            block_size: block_size.max(1),
            look_around,
            center: None,
            anchor: look_around,
            total_reassignments: 0,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[RenderSlot<C>] {
        &self.slots
    }

    pub fn center(&self) -> Option<BlockIndex> {
        self.center
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Number of slot reassignments since creation.
    pub fn total_reassignments(&self) -> u64 {
        self.total_reassignments
    }

    /// Nominal middle slot, used as anchor when no slot holds the center yet.
    fn middle_slot(&self) -> usize {
        self.look_around
    }

    /// Re-targets the pool at `center` for a document of `line_count` lines.
    ///
    /// Slots already holding a block within `center ± k` are left untouched.
    /// An unchanged center reassigns nothing.
    pub fn evaluate(&mut self, center: BlockIndex, line_count: usize) -> Evaluation {
        if self.center == Some(center) {
            return Evaluation {
                center,
                anchor: self.anchor,
                reassigned: Vec::new(),
            };
        }

        let k = self.look_around as BlockIndex;
        let in_window = |block: BlockIndex| (block - center).abs() <= k;

        let mut missing: Vec<BlockIndex> = (center - k..=center + k)
            .filter(|&block| !self.slots.iter().any(|s| s.block == Some(block)))
            .collect();
        // The center block is placed first so it can claim the middle slot.
        missing.sort_by_key(|&block| ((block - center).abs(), block));

        let mut eligible: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.block.map_or(true, |b| !in_window(b)))
            .map(|(i, _)| i)
            .collect();
        // Farthest from the new center first; unassigned slots count as farthest.
        eligible.sort_by_key(|&i| {
            let distance = self.slots[i].block.map_or(BlockIndex::MAX, |b| (b - center).abs());
            (Reverse(distance), i)
        });

        let middle = self.middle_slot();
        let mut reassigned = Vec::with_capacity(missing.len());
        for block in missing {
            let slot = if block == center {
                match eligible.iter().position(|&i| i == middle) {
                    Some(pos) => Some(eligible.remove(pos)),
                    None if !eligible.is_empty() => Some(eligible.remove(0)),
                    // Nothing evictable: force the middle slot so the center is always shown.
                    None => Some(middle),
                }
            } else if eligible.is_empty() {
                None
            } else {
                Some(eligible.remove(0))
            };

            if let Some(slot) = slot {
                self.assign(slot, block, line_count);
                reassigned.push(slot);
            }
        }

        self.center = Some(center);
        self.anchor = self
            .slots
            .iter()
            .position(|s| s.block == Some(center))
            .unwrap_or(middle);
        self.total_reassignments += reassigned.len() as u64;

        log::debug!(
            "window center -> block {} (anchor slot {}, reassigned {:?})",
            center,
            self.anchor,
            reassigned
        );

        Evaluation {
            center,
            anchor: self.anchor,
            reassigned,
        }
    }

    fn assign(&mut self, slot: usize, block: BlockIndex, line_count: usize) {
        let range = block_range(block, self.block_size, line_count);
        let target = &mut self.slots[slot];
        target.block = Some(block);
        target.range = range;
        target.materialized = 0;
        target.container.clear();
    }

    /// Presents up to `max_lines` not-yet-materialized lines of `slot`.
    ///
    /// Returns the number of lines presented.
    pub fn materialize(&mut self, slot: usize, lines: &[Line], max_lines: usize) -> usize {
        let Some(target) = self.slots.get_mut(slot) else {
            return 0;
        };
        let start = target.range.start + target.materialized;
        let end = target.range.end.min(start.saturating_add(max_lines)).min(lines.len());
        if start >= end {
            return 0;
        }

        for (index, line) in lines[start..end].iter().enumerate() {
            present(line, start + index, &mut target.container);
        }
        target.materialized += end - start;
        log::trace!("slot {} materialized lines {}..{}", slot, start, end);
        end - start
    }

    /// Forgets every assignment and clears all containers.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.block = None;
            slot.range = 0..0;
            slot.materialized = 0;
            slot.container.clear();
        }
        self.center = None;
        self.anchor = self.middle_slot();
    }

    /// Applies `f` to every container, then forgets all assignments so the next
    /// evaluation re-materializes everything.
    pub fn restyle(&mut self, mut f: impl FnMut(&mut C)) {
        for slot in &mut self.slots {
            f(&mut slot.container);
        }
        self.reset();
    }

    /// Non-empty line ranges currently assigned, one per slot at most.
    pub fn materialized_ranges(&self) -> Vec<Range<usize>> {
        self.slots
            .iter()
            .filter(|s| s.block.is_some() && !s.range.is_empty())
            .map(|s| s.range.clone())
            .collect()
    }

    /// Total lines currently presented across all slots.
    pub fn materialized_line_count(&self) -> usize {
        self.slots.iter().map(|s| s.materialized).sum()
    }

    /// Where each assigned slot belongs, ordered top to bottom.
    pub fn placements(&self, block_height_px: f32) -> Vec<SlotPlacement> {
        let mut placements: Vec<SlotPlacement> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(slot, s)| {
                s.block.map(|block| SlotPlacement {
                    slot,
                    block,
                    top_px: block as f32 * block_height_px,
                    range: s.range.clone(),
                })
            })
            .collect();
        placements.sort_by_key(|p| p.block);
        placements
    }
}

/// Line range of `block`, empty when the block lies outside the document.
pub fn block_range(block: BlockIndex, block_size: usize, line_count: usize) -> Range<usize> {
    if block < 0 {
        return 0..0;
    }
    let start = (block as usize).saturating_mul(block_size);
    if start >= line_count {
        return 0..0;
    }
    start..(start + block_size).min(line_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::TextBlock;

    fn numbered_lines(count: usize) -> Vec<Line> {
        (0..count).map(|i| Line::scalar(1, i.to_string(), i.to_string(), true)).collect()
    }

    fn manager(block_size: usize, look_around: usize) -> WindowManager<TextBlock> {
        WindowManager::new(block_size, look_around, TextBlock::new)
    }

    fn materialize_all(window: &mut WindowManager<TextBlock>, lines: &[Line]) {
        for slot in 0..window.capacity() {
            window.materialize(slot, lines, usize::MAX);
        }
    }

    fn assert_disjoint(window: &WindowManager<TextBlock>) {
        let mut ranges = window.materialized_ranges();
        ranges.sort_by_key(|r| r.start);
        for pair in ranges.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlapping ranges {:?}", ranges);
        }
    }

    #[test]
    fn test_center_block() {
        assert_eq!(center_block(0.0, 100.0), 0);
        assert_eq!(center_block(99.9, 100.0), 0);
        assert_eq!(center_block(250.0, 100.0), 2);
        assert_eq!(center_block(-1.0, 100.0), -1);
        assert_eq!(center_block(10.0, 0.0), 0);
    }

    #[test]
    fn test_block_range() {
        assert_eq!(block_range(0, 100, 250), 0..100);
        assert_eq!(block_range(2, 100, 250), 200..250);
        assert_eq!(block_range(3, 100, 250), 0..0);
        assert_eq!(block_range(-1, 100, 250), 0..0);
    }

    #[test]
    fn test_midpoint_materializes_three_blocks() {
        let lines = numbered_lines(10_000);
        let mut window = manager(100, 1);

        let eval = window.evaluate(50, lines.len());
        assert_eq!(eval.reassigned.len(), 3);
        materialize_all(&mut window, &lines);

        assert_eq!(window.materialized_ranges().len(), 3);
        assert_eq!(window.materialized_line_count(), 300);
        let mut blocks: Vec<_> = window.slots().iter().filter_map(|s| s.block()).collect();
        blocks.sort();
        assert_eq!(blocks, vec![49, 50, 51]);
        assert_eq!(window.slots()[eval.anchor].block(), Some(50));
    }

    #[test]
    fn test_one_block_further_reassigns_one_slot() {
        let lines = numbered_lines(10_000);
        let mut window = manager(100, 1);
        window.evaluate(50, lines.len());
        materialize_all(&mut window, &lines);

        let eval = window.evaluate(51, lines.len());
        assert_eq!(eval.reassigned.len(), 1);
        let slot = &window.slots()[eval.reassigned[0]];
        assert_eq!(slot.block(), Some(52));
        assert_eq!(slot.materialized_lines(), 0);

        materialize_all(&mut window, &lines);
        assert_eq!(window.materialized_line_count(), 300);
        assert_eq!(window.slots()[eval.anchor].block(), Some(51));
        assert_disjoint(&window);
    }

    #[test]
    fn test_unchanged_center_reassigns_nothing() {
        let lines = numbered_lines(1_000);
        let mut window = manager(100, 1);
        window.evaluate(3, lines.len());
        materialize_all(&mut window, &lines);

        let eval = window.evaluate(3, lines.len());
        assert!(eval.reassigned.is_empty());
        assert_eq!(window.total_reassignments(), 3);
        assert_eq!(window.materialized_line_count(), 300);
    }

    #[test]
    fn test_untouched_slots_keep_content() {
        let lines = numbered_lines(1_000);
        let mut window = manager(10, 2);
        window.evaluate(5, lines.len());
        materialize_all(&mut window, &lines);
        let before: Vec<_> = window.slots().iter().map(|s| (s.block(), s.container().lines().to_vec())).collect();

        let eval = window.evaluate(6, lines.len());
        for (i, slot) in window.slots().iter().enumerate() {
            if !eval.reassigned.contains(&i) {
                assert_eq!((slot.block(), slot.container().lines().to_vec()), before[i]);
            }
        }
    }

    #[test]
    fn test_document_edges_are_empty() {
        let lines = numbered_lines(250);
        let mut window = manager(100, 1);

        window.evaluate(0, lines.len());
        materialize_all(&mut window, &lines);
        let before = window.slots().iter().find(|s| s.block() == Some(-1)).unwrap();
        assert_eq!(before.assigned_range(), Some(0..0));
        assert_eq!(before.container().line_count(), 0);
        assert_eq!(window.materialized_line_count(), 200);

        window.evaluate(3, lines.len());
        materialize_all(&mut window, &lines);
        assert_eq!(window.materialized_ranges(), vec![200..250]);
        assert_eq!(window.materialized_line_count(), 50);
    }

    #[test]
    fn test_far_jump_reassigns_every_slot() {
        let lines = numbered_lines(100_000);
        let mut window = manager(100, 2);
        window.evaluate(10, lines.len());
        let eval = window.evaluate(500, lines.len());
        assert_eq!(eval.reassigned.len(), 5);
        assert_eq!(window.slots()[window.middle_slot()].block(), Some(500));
        assert_disjoint(&window);
    }

    #[test]
    fn test_capacity_never_exceeded_while_scrolling() {
        let lines = numbered_lines(5_000);
        let mut window = manager(50, 1);
        for center in [0, 1, 2, 7, 6, 6, 5, 99, 100, 42, -3] {
            window.evaluate(center, lines.len());
            materialize_all(&mut window, &lines);
            assert!(window.materialized_ranges().len() <= window.capacity());
            assert!(window.materialized_line_count() <= window.capacity() * window.block_size());
            assert_disjoint(&window);
        }
    }

    #[test]
    fn test_partial_materialization() {
        let lines = numbered_lines(1_000);
        let mut window = manager(100, 0);
        window.evaluate(2, lines.len());
        assert_eq!(window.materialize(0, &lines, 30), 30);
        assert!(!window.slots()[0].is_complete());
        assert_eq!(window.materialize(0, &lines, 100), 70);
        assert!(window.slots()[0].is_complete());
        assert_eq!(window.materialize(0, &lines, 100), 0);

        let first = &window.slots()[0].container().lines()[0];
        assert_eq!(first.index, 200);
    }

    #[test]
    fn test_placements_follow_block_height() {
        let lines = numbered_lines(1_000);
        let mut window = manager(100, 1);
        window.evaluate(4, lines.len());
        let placements = window.placements(1_600.0);
        let tops: Vec<_> = placements.iter().map(|p| p.top_px).collect();
        assert_eq!(tops, vec![4_800.0, 6_400.0, 8_000.0]);
    }

    #[test]
    fn test_reset_and_restyle() {
        let lines = numbered_lines(300);
        let mut window = manager(100, 1);
        window.evaluate(1, lines.len());
        materialize_all(&mut window, &lines);

        let mut touched = 0;
        window.restyle(|_| touched += 1);
        assert_eq!(touched, 3);
        assert_eq!(window.center(), None);
        assert_eq!(window.materialized_line_count(), 0);
        assert!(window.slots().iter().all(|s| s.block().is_none()));
    }
}
