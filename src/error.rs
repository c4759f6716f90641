//! Error types for fixture-builder
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{DataStoreError, FsError};

/// Result type alias for fixture-builder operations
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Opaque error raised by a caller-supplied generation procedure
pub type GenerationError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for fixture-builder operations
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A tracked file, the fingerprint store or a fixture file could not be accessed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fingerprint store or a settings file exists but cannot be parsed
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Blank name, absent record or malformed SQL template
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The same record was named twice within one build pass
    #[error("cannot set name for ({collection}, {identifier}) twice: already named '{existing}'")]
    DuplicateName {
        collection: String,
        identifier: i64,
        existing: String,
    },

    /// The data store adapter reported a failure
    #[error("data store error: {0}")]
    DataStore(#[from] DataStoreError),

    /// The caller's generation procedure failed
    #[error("fixture generation failed: {0}")]
    Generation(#[source] GenerationError),

    /// The advisory lock on the fingerprint store could not be taken
    #[error("failed to lock {}: {message}", path.display())]
    Lock { path: PathBuf, message: String },
}

impl FixtureError {
    /// Wrap an arbitrary error from user code as a generation failure.
    pub fn generation(err: impl Into<GenerationError>) -> Self {
        FixtureError::Generation(err.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn from_fs(path: impl Into<PathBuf>, err: FsError) -> Self {
        let path = path.into();
        match err {
            FsError::Io(source) => FixtureError::Io { path, source },
            FsError::NotFound(_) => FixtureError::Io {
                path,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            },
            FsError::PermissionDenied(_) => FixtureError::Io {
                path,
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "permission denied",
                ),
            },
            FsError::Other(message) => FixtureError::Io {
                path,
                source: std::io::Error::other(message),
            },
        }
    }
}
