//! Error types
//!
//! Every failure aborts the whole run before the manifest is written.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while generating the method manifest
#[derive(Debug, Error)]
pub enum GenError {
    /// A class in the resource table (or one of its bases) is not in the SDK
    #[error("cannot import `{class}` from the SDK: {reason}")]
    ImportResolution { class: String, reason: String },

    /// Reading a snapshot or writing the manifest failed
    #[error("file system error at {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest could not be serialized
    #[error("failed to serialize resource methods: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An SDK snapshot file is not valid snapshot JSON
    #[error("invalid SDK snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GenError {
    pub fn import(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImportResolution {
            class: class.into(),
            reason: reason.into(),
        }
    }

    pub fn fs(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
