// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base URL table trait definition.
//!
//! A hosting application may publish a table of service base URLs before any
//! resolution happens. The resolver reads it through this port and never
//! writes to it.

use crate::domain::ServiceName;

/// A read-only table of base URLs keyed by service name.
///
/// Implementations return `Some` only for non-empty values. Values are raw;
/// the resolver normalizes them.
///
/// # Examples
///
/// ```rust
/// use baseurl::ports::BaseUrlTable;
/// use baseurl::domain::ServiceName;
///
/// struct OneEntry;
///
/// impl BaseUrlTable for OneEntry {
///     fn name(&self) -> &str {
///         "one-entry"
///     }
///
///     fn get(&self, service: &ServiceName) -> Option<String> {
///         service.is_default().then(|| "https://g.com/".to_string())
///     }
/// }
///
/// let table = OneEntry;
/// assert!(table.get(&ServiceName::default()).is_some());
/// assert!(table.get(&ServiceName::from("content")).is_none());
/// ```
pub trait BaseUrlTable: Send + Sync {
    /// Returns a short identifier used in log messages.
    fn name(&self) -> &str;

    /// Returns the raw, non-empty entry for `service`, if any.
    fn get(&self, service: &ServiceName) -> Option<String>;

    /// Returns the service names present in the table.
    ///
    /// Defaults to an empty list for tables that cannot enumerate.
    fn services(&self) -> Vec<ServiceName> {
        Vec::new()
    }
}

/// A table with no entries, used when a resolver has no host table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTable;

impl BaseUrlTable for EmptyTable {
    fn name(&self) -> &str {
        "empty"
    }

    fn get(&self, _service: &ServiceName) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapTable(HashMap<String, String>);

    impl BaseUrlTable for MapTable {
        fn name(&self) -> &str {
            "map"
        }

        fn get(&self, service: &ServiceName) -> Option<String> {
            self.0
                .get(service.as_str())
                .filter(|v| !v.is_empty())
                .cloned()
        }

        fn services(&self) -> Vec<ServiceName> {
            self.0.keys().map(|k| ServiceName::from(k.as_str())).collect()
        }
    }

    #[test]
    fn test_empty_table() {
        let table = EmptyTable;
        assert_eq!(table.name(), "empty");
        assert!(table.get(&ServiceName::default()).is_none());
        assert!(table.services().is_empty());
    }

    #[test]
    fn test_map_table_skips_empty_values() {
        let mut values = HashMap::new();
        values.insert("default".to_string(), "https://g.com".to_string());
        values.insert("content".to_string(), String::new());
        let table = MapTable(values);

        assert_eq!(
            table.get(&ServiceName::default()),
            Some("https://g.com".to_string())
        );
        assert_eq!(table.get(&ServiceName::from("content")), None);
        assert_eq!(table.services().len(), 2);
    }
}
