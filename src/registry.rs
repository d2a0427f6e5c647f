//! Accumulating key-to-speaker mapping built over a whole run.
//!
//! Every extraction rule, for every scanned file, writes into one shared
//! registry. The write policy is last-write-wins: a later association for
//! an existing key replaces the earlier value, never errors. The registry
//! is only read back once the run is complete, when the annotation writer
//! walks it to pick a comment for each localization line.

use indexmap::IndexMap;
use serde::Serialize;

/// Sentinel speaker name used for generic UI `message` matches,
/// which carry no character of their own.
pub const MESSAGE_NAME: &str = "message";

/// Mapping from placeholder key (the `KEY` in `{{i18n:KEY}}`) to the
/// resolved speaker or context name.
///
/// Iteration order is first-association order: overwriting an existing
/// key updates its value but keeps its original position. The annotation
/// writer relies on this to pick a deterministic winner when several keys
/// are substrings of the same line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyNameRegistry {
    entries: IndexMap<String, String>,
}

impl KeyNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `key` with `name`, unconditionally replacing any
    /// earlier association for the same key.
    pub fn set(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(key.into(), name.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries in first-association order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON rendering of the mapping for the end-of-run log dump.
    pub fn dump(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }
}
