use std::path::PathBuf;
use thiserror::Error;

/// Result type for archive indexing operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Error types for archive indexing operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// A directory in the archive could not be listed
    #[error("Failed to read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry name is not valid UTF-8
    #[error("Entry name is not valid UTF-8: {}", .0.display())]
    InvalidName(PathBuf),

    /// A volume filename does not encode `<patient_id>_<study_id>`
    #[error("Cannot derive subject key from filename: {0}")]
    InvalidSubjectKey(String),

    /// Modality tag not recognised
    #[error("Unknown modality: {0}")]
    UnknownModality(String),

    /// Manifest could not be written
    #[error("Failed to write manifest {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ArchiveError {
    pub(crate) fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::DirectoryAccess {
            path: path.into(),
            source,
        }
    }
}
