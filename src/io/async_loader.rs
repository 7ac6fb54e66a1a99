//! Asynchronous document loading.
//!
//! Reading, decoding, parsing and flattening run on a background thread so
//! the GUI keeps painting while large files load.

use anyhow::Context;
use eframe::egui;
use rjview::{Document, DocumentReader, JsonFileReader, SampleDocumentReader};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

use crate::io::LoadingState;
use crate::state::DocumentSource;

/// Result of a completed loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        document: Document,
        source: DocumentSource,
    },
    /// Loading failed; the message is ready for display
    Error(String),
    /// No loading operation finished since the last check
    None,
}

/// Manages asynchronous loading of documents.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Document, String>>>,

    /// Source of the document currently being loaded
    pending_source: Option<DocumentSource>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_source: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a JSON file. Call `check_completion()` once per frame
    /// for the result.
    pub fn start_file_load(&mut self, path: PathBuf, max_depth: usize, ctx: &egui::Context) {
        let source = DocumentSource::File(path.clone());
        self.start_load(Box::new(JsonFileReader::new()), path, source, max_depth, ctx);
    }

    /// Starts generating the sample document.
    pub fn start_sample_load(&mut self, max_depth: usize, ctx: &egui::Context) {
        let reader = SampleDocumentReader::new();
        let source = DocumentSource::Sample { seed: reader.seed() };
        self.start_load(Box::new(reader), PathBuf::new(), source, max_depth, ctx);
    }

    fn start_load(
        &mut self,
        reader: Box<dyn DocumentReader>,
        path: PathBuf,
        source: DocumentSource,
        max_depth: usize,
        ctx: &egui::Context,
    ) {
        // A newer request supersedes any result still in flight
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        let generation = {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
            state.generation += 1;
            state.generation
        };

        log::info!("loading {}", source);
        let label = source.to_string();
        self.pending_source = Some(source);

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let started = Instant::now();
            let result = reader
                .read(&path, max_depth)
                .with_context(|| format!("failed to load {}", label));

            let result = match result {
                Ok(document) => {
                    log::info!(
                        "loaded {}: {} lines in {:.2?}",
                        label,
                        document.len(),
                        started.elapsed()
                    );
                    Ok(document)
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                    Err(format!("{:#}", e))
                }
            };

            // The receiver is gone if a newer load replaced this one
            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                if state.generation == generation {
                    state.in_progress = false;
                }
            }

            ctx_handle.request_repaint();
        });
    }

    /// Returns the result of the latest load if it has arrived.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(document) => match self.pending_source.take() {
                        Some(source) => LoadResult::Success { document, source },
                        None => LoadResult::None,
                    },
                    Err(error_msg) => {
                        self.pending_source = None;
                        LoadResult::Error(error_msg)
                    }
                };

                self.loading_receiver = None;
                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
