//! SDK Snapshot - Class definitions of the robot SDK
//!
//! A snapshot records, for every SDK class the manifest cares about, its
//! qualified path, its base classes and the members it declares. The
//! snapshot of the Viam Python SDK is embedded into the binary; another one
//! can be loaded from disk when the SDK surface changes.

use crate::error::{GenError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Embedded snapshot (compiled into the binary)
const EMBEDDED_SNAPSHOT: &str = include_str!("viam.json");

/// How a member is bound on its class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Plain function defined in the class body
    #[default]
    Function,
    /// Function wrapped in `staticmethod`
    StaticMethod,
    /// Function bound to the class object
    ClassMethod,
    /// Computed attribute
    Property,
    /// Class variable or nested type
    Attribute,
}

impl MemberKind {
    /// Whether the member looks like a plain function when read off the class
    pub fn is_function(self) -> bool {
        matches!(self, Self::Function | Self::StaticMethod)
    }
}

/// Member declared directly on a class
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberDef {
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
}

/// Class definition from the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SdkClass {
    /// Qualified path, e.g. `viam.components.arm.Arm`
    pub path: String,
    /// Base classes in declaration order
    #[serde(default)]
    pub bases: Vec<String>,
    /// Members declared on this class (not inherited ones)
    #[serde(default)]
    pub members: Vec<MemberDef>,
}

impl SdkClass {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            bases: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.bases.push(base.to_string());
        self
    }

    pub fn with_member(mut self, name: &str, kind: MemberKind) -> Self {
        self.members.push(MemberDef {
            name: name.to_string(),
            kind,
        });
        self
    }

    /// Shorthand for a plain function member
    pub fn with_function(self, name: &str) -> Self {
        self.with_member(name, MemberKind::Function)
    }
}

/// Root structure of an SDK snapshot file
#[derive(Debug, Clone, Deserialize)]
pub struct SdkSnapshot {
    /// SDK distribution name
    pub sdk: String,
    /// SDK version the snapshot was taken from
    pub version: String,
    /// Classes outside the snapshot that contribute no members (`abc.ABC`, ...)
    #[serde(default)]
    pub opaque: Vec<String>,
    pub classes: Vec<SdkClass>,
}

static EMBEDDED: OnceLock<SdkSnapshot> = OnceLock::new();

impl SdkSnapshot {
    pub fn new(sdk: &str, version: &str, classes: Vec<SdkClass>) -> Self {
        Self {
            sdk: sdk.to_string(),
            version: version.to_string(),
            opaque: Vec::new(),
            classes,
        }
    }

    /// Get the embedded snapshot (parsed on first access)
    pub fn embedded() -> &'static SdkSnapshot {
        EMBEDDED.get_or_init(|| {
            serde_json::from_str(EMBEDDED_SNAPSHOT)
                .unwrap_or_else(|e| panic!("Failed to parse embedded SDK snapshot: {}", e))
        })
    }

    /// Load a snapshot from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::fs(path, e))?;
        let snapshot: Self =
            serde_json::from_str(&content).map_err(|source| GenError::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            "Loaded SDK snapshot {} {} ({} classes) from {:?}",
            snapshot.sdk,
            snapshot.version,
            snapshot.classes.len(),
            path
        );

        Ok(snapshot)
    }

    fn find(&self, path: &str) -> Option<&SdkClass> {
        self.classes.iter().find(|c| c.path == path)
    }

    fn is_opaque(&self, path: &str) -> bool {
        self.opaque.iter().any(|p| p == path)
    }

    /// Resolve a class by qualified path
    pub fn class(&self, path: &str) -> Result<&SdkClass> {
        self.find(path)
            .ok_or_else(|| GenError::import(path, "class not found in SDK snapshot"))
    }

    /// Method resolution order of a class: the class itself, then its bases
    /// linearized with C3, the same order Python looks attributes up in.
    ///
    /// Fails when a base is missing, the bases form a cycle, or no
    /// consistent order exists (e.g. `class Z(X, Y)` with `X(A, B)` and
    /// `Y(B, A)`).
    pub fn mro(&self, path: &str) -> Result<Vec<&str>> {
        let class = self.class(path)?;
        let root = class.path.as_str();
        self.linearize(root, root, &mut Vec::new())
    }

    fn linearize<'a>(
        &'a self,
        root: &'a str,
        path: &'a str,
        chain: &mut Vec<&'a str>,
    ) -> Result<Vec<&'a str>> {
        if chain.contains(&path) {
            return Err(GenError::import(
                root,
                format!("inheritance cycle through `{}`", path),
            ));
        }
        if self.is_opaque(path) {
            return Ok(vec![path]);
        }

        let Some(class) = self.find(path) else {
            return Err(GenError::import(
                root,
                format!("base class `{}` not found in SDK snapshot", path),
            ));
        };

        chain.push(path);
        let mut sequences = Vec::with_capacity(class.bases.len() + 1);
        for base in &class.bases {
            sequences.push(self.linearize(root, base.as_str(), chain)?);
        }
        chain.pop();
        sequences.push(class.bases.iter().map(String::as_str).collect());

        let Some(tail) = c3_merge(sequences) else {
            return Err(GenError::import(
                root,
                format!("cannot create a consistent method resolution order for `{}`", path),
            ));
        };

        let mut order = Vec::with_capacity(tail.len() + 1);
        order.push(path);
        order.extend(tail);
        Ok(order)
    }

    /// Names of the function members visible on a class, own members first,
    /// then inherited ones in method resolution order.
    ///
    /// The first class in the order that defines a name decides its kind, so
    /// a subclass that redefines a base function as a property hides it.
    pub fn callable_members(&self, path: &str) -> Result<Vec<&str>> {
        let mut seen = HashSet::new();
        let mut functions = Vec::new();

        for class_path in self.mro(path)? {
            let Some(class) = self.find(class_path) else {
                continue;
            };
            for member in &class.members {
                if seen.insert(member.name.as_str()) && member.kind.is_function() {
                    functions.push(member.name.as_str());
                }
            }
        }

        Ok(functions)
    }
}

/// C3 merge: repeatedly take the first head that appears in no other tail
fn c3_merge(mut sequences: Vec<Vec<&str>>) -> Option<Vec<&str>> {
    let mut merged = Vec::new();

    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            return Some(merged);
        }

        let head = sequences
            .iter()
            .map(|seq| seq[0])
            .find(|candidate| sequences.iter().all(|seq| !seq[1..].contains(candidate)))?;

        for seq in sequences.iter_mut() {
            if seq[0] == head {
                seq.remove(0);
            }
        }
        merged.push(head);
    }
}
