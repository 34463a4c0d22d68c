use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Custom error type for report assembly failures
#[derive(Debug)]
pub enum ReportError {
    /// A required introduction field was not supplied
    MissingField(String),
    /// Table rendering was asked to render zero rows
    EmptyTable,
    /// The finalized document could not be written
    Write {
        path: PathBuf,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::MissingField(key) => {
                write!(f, "Missing required introduction field '{}'", key)
            }
            ReportError::EmptyTable => write!(f, "Cannot render a table with no rows"),
            ReportError::Write { path, source } => {
                write!(f, "Failed to write report to {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::Write { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
