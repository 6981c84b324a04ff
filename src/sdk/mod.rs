//! Robot SDK surface
//!
//! The manifest is built from SDK class definitions rather than live
//! reflection. Class definitions come from a snapshot:
//!
//! - [`snapshot`] - Snapshot model, loading, and member enumeration
//!
//! The Viam Python SDK snapshot lives in `src/sdk/viam.json` and is compiled
//! into the binary.

mod snapshot;

pub use snapshot::{MemberDef, MemberKind, SdkClass, SdkSnapshot};
