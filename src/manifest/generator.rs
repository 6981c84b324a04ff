//! Manifest Generator
//!
//! Turns SDK class members into the per-resource public method lists.

use super::registry::ResourceClass;
use crate::error::Result;
use crate::sdk::SdkSnapshot;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Methods every resource inherits from the SDK base classes that are not
/// part of the resource API
pub const EXCLUDED_METHODS: &[&str] = &["__init__", "close", "get_operation"];

/// Method present in every resource's list, discovered or not
pub const FORCED_METHOD: &str = "do_command";

/// Check whether a method name belongs in the manifest
pub fn is_public_method(name: &str) -> bool {
    !name.starts_with('_') && !EXCLUDED_METHODS.contains(&name)
}

/// Filter, deduplicate and sort method names, always adding [`FORCED_METHOD`]
pub fn public_methods<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut methods: BTreeSet<&str> = names
        .into_iter()
        .filter(|name| is_public_method(name))
        .collect();
    methods.insert(FORCED_METHOD);

    methods.into_iter().map(str::to_string).collect()
}

/// Resource API -> sorted public method names, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceMethodMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ResourceMethodMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the methods of a resource, replacing any previous list
    pub fn insert(&mut self, api: &str, methods: Vec<String>) {
        match self.entries.iter_mut().find(|(key, _)| key == api) {
            Some((_, existing)) => *existing = methods,
            None => self.entries.push((api.to_string(), methods)),
        }
    }

    pub fn get(&self, api: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == api)
            .map(|(_, methods)| methods.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a JSON object with 2-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for ResourceMethodMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, methods)| (key, methods)))
    }
}

/// Build the method map for every entry of a resource class table
pub fn generate(snapshot: &SdkSnapshot, table: &[ResourceClass]) -> Result<ResourceMethodMap> {
    tracing::info!(
        "Generating resource methods from {} {} ({} resources)",
        snapshot.sdk,
        snapshot.version,
        table.len()
    );

    let mut map = ResourceMethodMap::new();
    for entry in table {
        let members = snapshot.callable_members(entry.class)?;
        let methods = public_methods(members);
        tracing::debug!("{} -> {}: {:?}", entry.api, entry.class, methods);
        map.insert(entry.api, methods);
    }

    if map.is_empty() {
        tracing::warn!("Resource class table is empty, manifest will be `{{}}`");
    }

    Ok(map)
}
