use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by ingestion, split, and workflow functions.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Underlying I/O error (e.g. unwritable artifacts directory, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input dataset does not exist at the resolved path.
    ///
    /// Raised before any read attempt, so no artifact side effects have occurred.
    #[error("input dataset not found at {}", path.display())]
    MissingInput { path: PathBuf },

    /// The requested test fraction is outside the open interval (0, 1).
    #[error("invalid test fraction {fraction}: must be strictly between 0 and 1")]
    InvalidTestFraction { fraction: f64 },
}

/// An error annotated with the source location where it was wrapped.
///
/// Constructed at the point of failure via [`LocatedError::wrap`] (or
/// [`LocatedError::msg`] for message-only errors). The location is captured with
/// `#[track_caller]`, so it names the wrapping call site, not this module. The
/// original error remains reachable through [`std::error::Error::source`].
#[derive(Debug)]
pub struct LocatedError {
    message: String,
    file: &'static str,
    line: u32,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl LocatedError {
    /// Wrap an error, recording the caller's file and line and keeping the
    /// error as the cause.
    #[track_caller]
    pub fn wrap<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let location = Location::caller();
        Self {
            message: error.to_string(),
            file: location.file(),
            line: location.line(),
            source: Some(Box::new(error)),
        }
    }

    /// Create a location-annotated error from a plain message, with no cause.
    #[track_caller]
    pub fn msg(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            message: message.into(),
            file: location.file(),
            line: location.line(),
            source: None,
        }
    }

    /// Source file of the wrapping call site.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Line number of the wrapping call site.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The original error message, without location decoration.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LocatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error occurred in file [{}] line [{}] message [{}]",
            self.file, self.line, self.message
        )
    }
}

impl std::error::Error for LocatedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}
