//! Configuration
//!
//! Resolves where the manifest goes and which SDK snapshot it is built from.

use std::path::{Path, PathBuf};

/// Default manifest location, relative to the web app root
pub const DEFAULT_OUTPUT: &str = "src/lib/resource_methods.json";

/// Where SDK class definitions come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource<'a> {
    /// Snapshot compiled into the binary
    Embedded,
    /// Snapshot file on disk
    File(&'a Path),
}

/// Run configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Manifest path override
    pub output: Option<PathBuf>,
    /// SDK snapshot file override
    pub sdk_snapshot: Option<PathBuf>,
}

impl Config {
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_sdk_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.sdk_snapshot = Some(path.into());
        self
    }

    /// Get effective output path (CLI > default)
    pub fn effective_output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Get effective snapshot source (CLI > embedded)
    pub fn snapshot_source(&self) -> SnapshotSource<'_> {
        match self.sdk_snapshot.as_deref() {
            Some(path) => SnapshotSource::File(path),
            None => SnapshotSource::Embedded,
        }
    }
}
