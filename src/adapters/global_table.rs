// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide host table.
//!
//! A hosting application may publish one table of service base URLs for the
//! whole process, typically once at startup. The standard resolver reads it
//! through [`GlobalTableAdapter`]. Nothing in this crate writes to it except the
//! host-facing [`publish_host_table`] and [`clear_host_table`].

use crate::domain::ServiceName;
use crate::ports::BaseUrlTable;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

/// The host-published table; `None` until a host publishes one.
static HOST_TABLE: Lazy<RwLock<Option<HashMap<String, String>>>> = Lazy::new(|| RwLock::new(None));

/// Publishes the process-wide host table, replacing any previous one.
///
/// # Examples
///
/// ```rust
/// use baseurl::adapters::global_table::{clear_host_table, publish_host_table};
/// use std::collections::HashMap;
///
/// let mut table = HashMap::new();
/// table.insert("default".to_string(), "https://g.com/".to_string());
/// publish_host_table(table);
/// # clear_host_table();
/// ```
pub fn publish_host_table(table: HashMap<String, String>) {
    match HOST_TABLE.write() {
        Ok(mut guard) => {
            tracing::debug!("Host base URL table published with {} entries", table.len());
            *guard = Some(table);
        }
        Err(_) => tracing::warn!("Host table lock poisoned; publish ignored"),
    }
}

/// Withdraws the process-wide host table.
pub fn clear_host_table() {
    if let Ok(mut guard) = HOST_TABLE.write() {
        *guard = None;
    }
}

/// Table adapter reading the process-wide host table.
///
/// A missing table, a missing entry, an empty value, or a poisoned lock all
/// read as "no value".
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalTableAdapter;

impl BaseUrlTable for GlobalTableAdapter {
    fn name(&self) -> &str {
        "host-table"
    }

    fn get(&self, service: &ServiceName) -> Option<String> {
        let guard = HOST_TABLE.read().ok()?;
        guard
            .as_ref()?
            .get(service.as_str())
            .filter(|v| !v.is_empty())
            .cloned()
    }

    fn services(&self) -> Vec<ServiceName> {
        match HOST_TABLE.read() {
            Ok(guard) => guard
                .as_ref()
                .map(|t| t.keys().map(|k| ServiceName::from(k.as_str())).collect())
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}
