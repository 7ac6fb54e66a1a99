pub mod error;
pub mod line;
pub mod flatten;
pub mod metrics;
pub mod document;
pub mod presenter;
pub mod window;
pub mod scheduler;
pub mod append;
pub mod config;
pub mod session;
pub mod source;
pub mod sample;
pub mod theme;

// Export the line model
pub use line::{Bracket, Line, INDENT};
pub use flatten::{flatten, flatten_with_limit, format_scalar, DEFAULT_MAX_DEPTH};
pub use document::Document;
pub use error::{FlattenError, ViewerError};

// Export rendering engine
pub use metrics::{FixedAdvanceMeasurer, LineMetrics, TextMeasurer};
pub use presenter::{present, LineContainer, Span, SpanRole, TextBlock, TextLine, ValueKind};
pub use window::{center_block, BlockIndex, Evaluation, RenderSlot, SlotPlacement, WindowManager};
pub use scheduler::{BlockScheduler, ChunkOutcome};
pub use append::AppendScheduler;
pub use session::{Placement, ViewerSession};
pub use config::{RenderStrategy, ViewerConfig, MAX_LOOK_AROUND};

// Export document sources
pub use source::{read_text, DocumentReader, JsonFileReader};
pub use sample::SampleDocumentReader;

// Export theme support
pub use theme::{hex_to_color32, Theme, ThemeColors, ThemeManager, DEFAULT_THEME};
