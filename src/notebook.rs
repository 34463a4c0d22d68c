//! Minimal Jupyter notebook (nbformat v4) document model.
//!
//! Only the subset needed for report output is modeled: an ordered list of
//! markdown cells plus the schema version fields. The serialized form must be
//! loadable by any standard notebook client, so field names and version
//! numbers follow the nbformat v4 schema exactly.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ReportError;

const NBFORMAT: u32 = 4;
const NBFORMAT_MINOR: u32 = 4;

/// One notebook cell. Reports only ever emit markdown cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: String,
    pub metadata: Map<String, Value>,
    pub source: String,
}

impl Cell {
    /// Create a markdown cell from already-rendered markdown text.
    pub fn markdown<S: Into<String>>(source: S) -> Self {
        Self {
            cell_type: "markdown".to_string(),
            metadata: Map::new(),
            source: source.into(),
        }
    }
}

/// An in-memory notebook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: Map::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Serialize the document as pretty-printed notebook JSON and write it to
    /// `path` in a single blocking call. Not atomic; a failed write may leave
    /// a partial file behind.
    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path).map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        writer.flush().map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}
