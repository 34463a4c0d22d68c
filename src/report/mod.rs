//! Report assembly for forecast evaluation runs.
//!
//! `builder` accumulates markdown cells and derives a table of contents on
//! finalization; `plots` produces the cumulative-event-count figures that get
//! embedded into the report by file path.
pub mod builder;
pub mod plots;

pub use builder::{Body, FigurePaths, ReportBuilder, TocEntry};
