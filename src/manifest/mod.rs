//! Resource method manifest
//!
//! Builds the JSON document that maps every resource API to the public
//! methods its SDK class exposes.
//!
//! # Architecture
//!
//! - [`registry`] - Static table of resource APIs and their SDK classes
//! - [`generator`] - Method filtering policy and the resource method map
//! - [`writer`] - All-or-nothing write of the rendered manifest
//!
//! # Example
//!
//! ```ignore
//! use rdk_methods::manifest::{generate, write_manifest, RESOURCE_CLASSES};
//! use rdk_methods::sdk::SdkSnapshot;
//!
//! fn regenerate() -> rdk_methods::Result<()> {
//!     let map = generate(SdkSnapshot::embedded(), RESOURCE_CLASSES)?;
//!     write_manifest(&map, "src/lib/resource_methods.json".as_ref())
//! }
//! ```

mod generator;
mod registry;
mod writer;

pub use generator::{
    generate, is_public_method, public_methods, ResourceMethodMap, EXCLUDED_METHODS,
    FORCED_METHOD,
};
pub use registry::{ResourceClass, RESOURCE_CLASSES};
pub use writer::write_manifest;
