//! Resource method manifest generator
//!
//! Lists the public methods of the robot SDK classes behind each resource
//! API and writes them to `src/lib/resource_methods.json`.
//!
//! # Module Structure
//!
//! - [`sdk`] - SDK class definitions (embedded snapshot or file)
//! - [`manifest`] - Resource class table, method policy, and manifest output
//! - [`config`] - Output path and snapshot source
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod manifest;
pub mod sdk;

pub use config::{Config, SnapshotSource};
pub use error::{GenError, Result};

use sdk::SdkSnapshot;
use std::path::PathBuf;

/// Generate the manifest for the built-in resource table and write it.
///
/// Returns the path that was written.
pub fn run(config: &Config) -> Result<PathBuf> {
    let loaded;
    let snapshot = match config.snapshot_source() {
        SnapshotSource::Embedded => SdkSnapshot::embedded(),
        SnapshotSource::File(path) => {
            loaded = SdkSnapshot::load(path)?;
            &loaded
        }
    };

    let map = manifest::generate(snapshot, manifest::RESOURCE_CLASSES)?;

    let output = config.effective_output();
    manifest::write_manifest(&map, &output)?;

    Ok(output)
}
