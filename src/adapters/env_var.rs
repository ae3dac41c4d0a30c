// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment variable source adapter.
//!
//! This module provides an adapter that reads base URL variables from the
//! process environment, or from a fixed set of values standing in for it.

use crate::domain::{BaseUrlError, Result};
use crate::ports::EnvSource;
use std::collections::HashMap;
use std::env::{self, VarError};

/// Environment source adapter for process environment variables.
///
/// Variables are read live on every lookup, so changes made after the adapter
/// is created are visible. Keys and values of any length are passed through
/// unchanged.
///
/// A variable whose value is not valid Unicode is reported as an error, which
/// the environment reader treats as a miss.
///
/// # Examples
///
/// ```rust
/// use baseurl::adapters::EnvVarAdapter;
/// use baseurl::ports::EnvSource;
///
/// let adapter = EnvVarAdapter::new();
/// assert_eq!(adapter.name(), "process-env");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Fixed values used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter reading the process environment.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for testing and for
    /// embedding; the process environment is never consulted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baseurl::adapters::EnvVarAdapter;
    /// use baseurl::ports::EnvSource;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("BASE_URL".to_string(), "https://a.com".to_string());
    ///
    /// let adapter = EnvVarAdapter::with_values(values);
    /// assert_eq!(adapter.get("BASE_URL").unwrap().as_deref(), Some("https://a.com"));
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Reads one variable from the process environment.
    fn read_process(key: &str) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e @ VarError::NotUnicode(_)) => Err(BaseUrlError::SourceError {
                source_name: "process-env".to_string(),
                message: format!("Variable '{}' is not valid unicode", key),
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl EnvSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "process-env"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.values {
            Some(values) => Ok(values.get(key).cloned()),
            None => Self::read_process(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_env_adapter_name() {
        let adapter = EnvVarAdapter::new();
        assert_eq!(adapter.name(), "process-env");
        assert!(adapter.is_available());
    }

    #[test]
    fn test_env_adapter_get() {
        let mut guard = EnvGuard::new();
        guard.set("BASEURL_ADAPTER_TEST_GET", "https://a.com/");

        let adapter = EnvVarAdapter::new();
        let value = adapter.get("BASEURL_ADAPTER_TEST_GET").unwrap();

        assert_eq!(value.as_deref(), Some("https://a.com/"));
    }

    #[test]
    fn test_env_adapter_get_nonexistent() {
        let adapter = EnvVarAdapter::new();
        let value = adapter.get("BASEURL_ADAPTER_NONEXISTENT_12345").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_env_adapter_reads_live() {
        let mut guard = EnvGuard::new();
        let adapter = EnvVarAdapter::new();

        assert!(adapter.get("BASEURL_ADAPTER_TEST_LIVE").unwrap().is_none());

        guard.set("BASEURL_ADAPTER_TEST_LIVE", "https://later.com");
        assert_eq!(
            adapter.get("BASEURL_ADAPTER_TEST_LIVE").unwrap().as_deref(),
            Some("https://later.com")
        );
    }

    #[test]
    fn test_env_adapter_with_values_ignores_process_env() {
        let mut guard = EnvGuard::new();
        guard.set("BASEURL_ADAPTER_TEST_FIXED", "https://process.com");

        let adapter = EnvVarAdapter::with_values(HashMap::new());
        assert!(adapter.get("BASEURL_ADAPTER_TEST_FIXED").unwrap().is_none());
    }

    #[test]
    fn test_env_adapter_long_key() {
        let mut guard = EnvGuard::new();
        let key = format!("BASEURL_{}_BASE_URL", "L".repeat(600));
        guard.set(&key, "https://long.example.com/");

        let adapter = EnvVarAdapter::new();
        assert_eq!(
            adapter.get(&key).unwrap().as_deref(),
            Some("https://long.example.com/")
        );
    }

    #[test]
    fn test_env_adapter_large_value() {
        let url = format!("https://large.example.com/{}", "p".repeat(1_048_576));
        let mut values = HashMap::new();
        values.insert("BASE_URL".to_string(), url.clone());

        let adapter = EnvVarAdapter::with_values(values);
        assert_eq!(adapter.get("BASE_URL").unwrap(), Some(url));
    }

    #[test]
    #[cfg(unix)]
    fn test_env_adapter_non_unicode_is_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "BASEURL_ADAPTER_TEST_NON_UNICODE";
        env::set_var(key, OsStr::from_bytes(&[0x66, 0x6f, 0x80, 0x6f]));

        let adapter = EnvVarAdapter::new();
        let result = adapter.get(key);
        env::remove_var(key);

        assert!(matches!(result, Err(BaseUrlError::SourceError { .. })));
    }
}
