// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime override store shared by all users of a resolver.

use crate::domain::{BaseUrlMap, ServiceName};
use std::collections::HashMap;
use std::sync::RwLock;

/// Runtime overrides keyed by service name.
///
/// Every holder of the owning resolver sees every `set`. Values are normalized
/// on insert. A poisoned lock reads as an empty store and ignores writes.
#[derive(Debug, Default)]
pub struct OverrideStore {
    entries: RwLock<BaseUrlMap>,
}

impl OverrideStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override for `name`, or removes it when `url` is empty or absent.
    pub fn set(&self, name: &ServiceName, url: Option<&str>) {
        match self.entries.write() {
            Ok(mut entries) => {
                if entries.set(name, url) {
                    tracing::debug!("Override for '{}' set", name);
                } else {
                    tracing::debug!("Override for '{}' cleared", name);
                }
            }
            Err(_) => tracing::warn!("Override store lock poisoned; ignoring set for '{}'", name),
        }
    }

    /// Returns the normalized override for `name`.
    pub fn get(&self, name: &ServiceName) -> Option<String> {
        let entries = self.entries.read().ok()?;
        entries.get(name).map(|url| url.as_str().to_string())
    }

    /// Removes every override.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Copies the current overrides into a plain map.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .read()
            .map(|entries| entries.to_string_map())
            .unwrap_or_default()
    }
}
