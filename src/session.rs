//! Viewer session: one document plus the machinery that materializes it.
//!
//! The host drives a session through two entry points:
//! [`ViewerSession::on_viewport_change`] with every new scroll offset or
//! viewport size, and [`ViewerSession::materialize_next_chunk`] once per idle
//! tick until it returns [`ChunkOutcome::Done`].

use std::ops::Range;

use crate::append::AppendScheduler;
use crate::config::{RenderStrategy, ViewerConfig};
use crate::document::Document;
use crate::metrics::{LineMetrics, TextMeasurer};
use crate::presenter::LineContainer;
use crate::scheduler::{BlockScheduler, ChunkOutcome};

/// A materialized container and where it belongs on the scroll track.
#[derive(Debug)]
pub struct Placement<'a, C> {
    pub top_px: f32,
    pub range: Range<usize>,
    pub container: &'a C,
}

#[derive(Debug)]
enum Renderer<C> {
    Blocks(BlockScheduler<C>),
    Append(AppendScheduler<C>),
}

#[derive(Debug)]
pub struct ViewerSession<C> {
    document: Document,
    config: ViewerConfig,
    metrics: LineMetrics,
    renderer: Renderer<C>,
}

impl<C: LineContainer> ViewerSession<C> {
    /// Builds a session, measuring the document once with `measurer`.
    ///
    /// Containers are created here and only reassigned afterwards.
    pub fn new(
        document: Document,
        config: ViewerConfig,
        measurer: &mut dyn TextMeasurer,
        mut make_container: impl FnMut() -> C,
    ) -> Self {
        let config = config.validated();
        let metrics = document.metrics(measurer);
        let renderer = match config.strategy {
            RenderStrategy::Blocks => Renderer::Blocks(BlockScheduler::new(
                config.block_size,
                config.look_around,
                config.max_chunk_lines,
                make_container,
            )),
            RenderStrategy::Append => Renderer::Append(AppendScheduler::new(
                make_container(),
                config.max_chunk_lines,
                config.append_lookahead_px,
            )),
        };

        log::info!(
            "session ready: {} lines, {:?} strategy, track {:.0}x{:.0}px",
            document.len(),
            config.strategy,
            metrics.max_line_width,
            metrics.total_height(document.len())
        );

        Self {
            document,
            config,
            metrics,
            renderer,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Gives the document back, dropping every container.
    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn metrics(&self) -> LineMetrics {
        self.metrics
    }

    /// Height of the scroll track: one line height per line.
    pub fn track_height(&self) -> f32 {
        self.metrics.total_height(self.document.len())
    }

    /// Minimum width the viewport needs to show the widest line.
    pub fn min_line_width(&self) -> f32 {
        self.metrics.max_line_width
    }

    pub fn block_height(&self) -> f32 {
        self.metrics.block_height(self.config.block_size)
    }

    /// Entry point for every scroll or resize.
    pub fn on_viewport_change(&mut self, scroll_offset_px: f32, viewport_height_px: f32) {
        match &mut self.renderer {
            Renderer::Blocks(scheduler) => {
                let center = scroll_offset_px + viewport_height_px / 2.0;
                let block_height = self.metrics.block_height(self.config.block_size);
                scheduler.on_viewport_change(&self.document, center, block_height);
            }
            Renderer::Append(scheduler) => {
                scheduler.on_viewport_change(scroll_offset_px, viewport_height_px, self.metrics.line_height);
            }
        }
    }

    /// Performs one bounded chunk of deferred materialization.
    pub fn materialize_next_chunk(&mut self) -> ChunkOutcome {
        match &mut self.renderer {
            Renderer::Blocks(scheduler) => scheduler.materialize_next_chunk(&self.document),
            Renderer::Append(scheduler) => scheduler.materialize_next_chunk(&self.document),
        }
    }

    /// Materialized containers, top to bottom.
    pub fn placements(&self) -> Vec<Placement<'_, C>> {
        match &self.renderer {
            Renderer::Blocks(scheduler) => {
                let window = scheduler.window();
                window
                    .placements(self.block_height())
                    .into_iter()
                    .filter(|p| !p.range.is_empty())
                    .map(|p| Placement {
                        top_px: p.top_px,
                        range: p.range,
                        container: window.slots()[p.slot].container(),
                    })
                    .collect()
            }
            Renderer::Append(scheduler) => vec![Placement {
                top_px: 0.0,
                range: 0..scheduler.rendered_lines(),
                container: scheduler.container(),
            }],
        }
    }

    /// Lines currently presented into containers.
    pub fn materialized_line_count(&self) -> usize {
        match &self.renderer {
            Renderer::Blocks(scheduler) => scheduler.window().materialized_line_count(),
            Renderer::Append(scheduler) => scheduler.rendered_lines(),
        }
    }

    /// Applies `f` to every container and forces full re-materialization on
    /// the next viewport change, e.g. after a palette change.
    pub fn restyle(&mut self, f: impl FnMut(&mut C)) {
        match &mut self.renderer {
            Renderer::Blocks(scheduler) => scheduler.restyle(f),
            Renderer::Append(scheduler) => scheduler.restyle(f),
        }
    }
}
