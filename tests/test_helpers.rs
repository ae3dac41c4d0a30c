// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides helper functions and mock implementations
//! that can be used across different test files.

use baseurl::adapters::StaticTableAdapter;
use baseurl::domain::{BaseUrlError, Result};
use baseurl::ports::EnvSource;
use baseurl::service::BaseUrlResolver;
use std::collections::HashMap;

/// A mock environment source for testing.
///
/// This allows tests to create a source with predefined values and to
/// simulate an unavailable or failing runtime.
#[derive(Debug, Clone)]
pub struct MockEnvSource {
    name: String,
    values: HashMap<String, String>,
    available: bool,
    should_fail: bool,
}

impl MockEnvSource {
    /// Creates a new mock source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
            available: true,
            should_fail: false,
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Marks the source as unavailable.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sets whether every lookup should fail.
    pub fn with_failing_lookups(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }
}

impl EnvSource for MockEnvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.should_fail {
            return Err(BaseUrlError::SourceError {
                source_name: self.name.clone(),
                message: "Mock permission failure".to_string(),
                source: None,
            });
        }
        Ok(self.values.get(key).cloned())
    }
}

/// Builds a resolver with every layer populated for the `"default"` service:
/// a table entry, an environment value, and an override.
pub fn create_layered_resolver() -> BaseUrlResolver {
    let resolver = BaseUrlResolver::builder()
        .with_table(Box::new(
            StaticTableAdapter::new().with_entry("default", "https://table.example.com/"),
        ))
        .with_env_source(Box::new(
            MockEnvSource::new("mock").with_value("KAZVIZIAN_BASE_URL", "https://env.example.com/"),
        ))
        .build();
    resolver.set_base_url(Some("https://override.example.com/"));
    resolver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_basic() {
        let source = MockEnvSource::new("test").with_value("KEY", "value");

        assert_eq!(source.name(), "test");
        assert!(source.is_available());
        assert_eq!(source.get("KEY").unwrap().as_deref(), Some("value"));
        assert_eq!(source.get("MISSING").unwrap(), None);
    }

    #[test]
    fn test_mock_source_failure() {
        let source = MockEnvSource::new("test").with_failing_lookups(true);
        assert!(source.get("KEY").is_err());
    }

    #[test]
    fn test_layered_resolver() {
        let resolver = create_layered_resolver();
        assert_eq!(resolver.get_base_url(None), "https://override.example.com");
    }
}
