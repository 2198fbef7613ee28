use std::path::PathBuf;

use thiserror::Error;

/// The underlying cause of a storage failure.
#[derive(Error, Debug)]
pub enum StorageFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by settings load/save.
///
/// Only I/O-level failures exist here. Semantically invalid content
/// (bad enum value, missing sub-document, inconsistent derived flag)
/// is healed during validity enforcement and never reported, so a
/// caller cannot tell a repaired document from a clean one.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read sheet settings from {}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },

    #[error("failed to write sheet settings to {}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },
}

impl SettingsError {
    pub(crate) fn read(path: &std::path::Path, source: impl Into<StorageFailure>) -> Self {
        Self::StorageRead {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: &std::path::Path, source: impl Into<StorageFailure>) -> Self {
        Self::StorageWrite {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Convenience type alias for Results with SettingsError
pub type Result<T> = std::result::Result<T, SettingsError>;
