//! quakeval-report: reporting utilities for seismicity forecast evaluation.
//!
//! This crate assembles multi-section evaluation reports as Jupyter-notebook
//! documents (markdown cells with a derived table of contents), and provides
//! the plotting and catalog-IO helpers the report content is built from.
//!
//! The design favors small, testable modules: the report builder itself is an
//! in-memory accumulator finalized exactly once, while plotting and IO live in
//! their own modules so they can be used without building a report.
pub mod datasets;
pub mod error;
pub mod io;
pub mod notebook;
pub mod report;
pub mod time;

pub use error::ReportError;
pub use report::builder::{Body, FigurePaths, ReportBuilder};
