// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment object trait definition.
//!
//! Bundlers and frameworks often hand applications a key/value bag of build-time
//! variables. `EnvObject` abstracts over the shapes such a bag can take so the
//! environment-object adapter can scan it for recognized keys.

use std::collections::{BTreeMap, HashMap};

/// A key/value bag of environment-like variables.
///
/// `lookup` returns `Some` only for values that are strings; whether the string
/// is empty is left to the caller.
pub trait EnvObject {
    /// Returns the string value stored under `key`.
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl EnvObject for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl EnvObject for HashMap<&str, &str> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

impl EnvObject for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Any YAML value can be offered as an environment object. Only mappings yield
/// values, and only for string entries; scalars and sequences behave as an
/// empty bag.
#[cfg(feature = "yaml")]
impl EnvObject for serde_yaml::Value {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.as_mapping()?.get(key)?.as_str()
    }
}
