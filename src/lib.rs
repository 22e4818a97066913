//! Letter grid generation for keyboard-driven pointer navigation.
//!
//! A user describes two nested layouts (Level 1 and Level 2) and a standalone
//! subgrid as whitespace-separated letter blocks plus dimensions. The
//! [`layout`] module tiles each layout into a letter grid and composes the two
//! levels into a grid of unique two-letter codes. The remaining modules wrap
//! that pure core in an editor: reactive recomputation, persistence, terminal
//! rendering, logging and metrics.

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod storage;

pub use config::EditorConfig;
pub use editor::{EditorField, GridEditor};
pub use error::{EditorError, Result};
pub use geometry::GridShape;
pub use layout::{
    CompositeGrid, DuplicateLetter, Grid, GridError, GridErrorKind, GridLevels, LayoutSlot,
    LetterGrid, LetterSpecification, Pair, compose, compose_grids, tile,
};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{EditorMetrics, MetricSnapshot};
pub use render::{GridRenderer, RendererSettings, display_width};
pub use storage::{
    DEFAULT_STORAGE_KEY, FileStore, LevelStore, MemoryStore, StorageError, load_or_default,
    save_logged,
};
