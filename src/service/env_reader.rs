// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort environment variable reader over an ordered list of sources.

use crate::ports::EnvSource;

/// Reads a variable from the first source that has a non-empty value for it.
///
/// Unavailable sources are skipped. A source that fails is logged and treated
/// as a miss, so a broken source never stops the next one from being tried.
///
/// # Examples
///
/// ```rust
/// use baseurl::adapters::EnvVarAdapter;
/// use baseurl::service::EnvReader;
/// use std::collections::HashMap;
///
/// let mut values = HashMap::new();
/// values.insert("BASE_URL".to_string(), "https://a.com".to_string());
///
/// let reader = EnvReader::new().with_source(Box::new(EnvVarAdapter::with_values(values)));
/// assert_eq!(reader.get("BASE_URL").as_deref(), Some("https://a.com"));
/// assert_eq!(reader.get("OTHER"), None);
/// ```
#[derive(Default)]
pub struct EnvReader {
    sources: Vec<Box<dyn EnvSource>>,
}

impl EnvReader {
    /// Creates a reader with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates the standard reader. See [`EnvReader::with_standard_sources`].
    pub fn standard() -> Self {
        Self::new().with_standard_sources()
    }

    /// Appends the standard sources: the process environment, then the
    /// runtime-injected variables.
    ///
    /// Without the `env` feature this adds nothing.
    pub fn with_standard_sources(self) -> Self {
        #[cfg(feature = "env")]
        {
            use crate::adapters::{EnvVarAdapter, RuntimeEnvAdapter};
            self.with_source(Box::new(EnvVarAdapter::new()))
                .with_source(Box::new(RuntimeEnvAdapter))
        }
        #[cfg(not(feature = "env"))]
        {
            self
        }
    }

    /// Appends a source; sources are probed in the order they were added.
    pub fn with_source(mut self, source: Box<dyn EnvSource>) -> Self {
        self.add_source(source);
        self
    }

    /// Appends a source in place.
    pub fn add_source(&mut self, source: Box<dyn EnvSource>) {
        self.sources.push(source);
    }

    /// Returns the names of the configured sources, in probe order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Returns the first non-empty value for `key`, or `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        for source in &self.sources {
            if !source.is_available() {
                tracing::trace!("Environment source '{}' unavailable", source.name());
                continue;
            }

            match source.get(key) {
                Ok(Some(value)) if !value.is_empty() => return Some(value),
                Ok(_) => continue,
                Err(e) => {
                    tracing::debug!(
                        "Error querying environment source '{}' for '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for EnvReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvReader")
            .field("sources", &self.source_names())
            .finish()
    }
}
