// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory base URL table.

use crate::domain::ServiceName;
use crate::ports::BaseUrlTable;
use std::collections::HashMap;

/// A base URL table held in memory and injected into a resolver explicitly.
///
/// # Examples
///
/// ```rust
/// use baseurl::adapters::StaticTableAdapter;
/// use baseurl::domain::ServiceName;
/// use baseurl::ports::BaseUrlTable;
///
/// let table = StaticTableAdapter::new().with_entry("default", "https://g.com/");
/// assert_eq!(table.get(&ServiceName::default()).as_deref(), Some("https://g.com/"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTableAdapter {
    values: HashMap<String, String>,
}

impl StaticTableAdapter {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from existing values.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Adds an entry.
    pub fn with_entry(mut self, service: impl Into<String>, url: impl Into<String>) -> Self {
        self.values.insert(service.into(), url.into());
        self
    }
}

impl BaseUrlTable for StaticTableAdapter {
    fn name(&self) -> &str {
        "static-table"
    }

    fn get(&self, service: &ServiceName) -> Option<String> {
        self.values
            .get(service.as_str())
            .filter(|v| !v.is_empty())
            .cloned()
    }

    fn services(&self) -> Vec<ServiceName> {
        self.values
            .keys()
            .map(|k| ServiceName::from(k.as_str()))
            .collect()
    }
}
