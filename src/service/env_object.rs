// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-object adapter.
//!
//! Scans a bundler-style key/value bag for a recognized base URL variable and
//! stores the first match as a runtime override.

use crate::domain::ServiceName;
use crate::ports::EnvObject;
use crate::service::BaseUrlResolver;

/// Keys recognized by default, in scan order.
pub const DEFAULT_ENV_OBJECT_KEYS: [&str; 4] = [
    "KAZVIZIAN_BASE_URL",
    "VITE_BASE_URL",
    "NEXT_PUBLIC_BASE_URL",
    "BASE_URL",
];

/// Options for [`apply_from_env_object`].
///
/// # Examples
///
/// ```rust
/// use baseurl::service::EnvObjectOptions;
///
/// let options = EnvObjectOptions::new()
///     .name("content")
///     .keys(["VITE_CONTENT_URL"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvObjectOptions {
    /// Service to write the override for; `"default"` when unset
    pub name: Option<String>,
    /// Keys to scan, in order; [`DEFAULT_ENV_OBJECT_KEYS`] when unset or empty
    pub keys: Option<Vec<String>>,
}

impl EnvObjectOptions {
    /// Creates options using the default service and keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target service name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the keys to scan.
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    fn service(&self) -> ServiceName {
        self.name
            .as_deref()
            .map(ServiceName::from)
            .unwrap_or_default()
    }

    fn scan_keys(&self) -> Vec<&str> {
        match &self.keys {
            Some(keys) if !keys.is_empty() => keys.iter().map(String::as_str).collect(),
            _ => DEFAULT_ENV_OBJECT_KEYS.to_vec(),
        }
    }
}

/// Stores the first recognized value from `env` as an override on `resolver`.
///
/// Keys are scanned in order and scanning stops at the first key holding a
/// non-empty string. Returns that key, or `None` when nothing was applied
/// (no object, no match, or an object that is not a mapping).
///
/// # Examples
///
/// ```rust
/// use baseurl::service::{apply_from_env_object, BaseUrlResolver, EnvObjectOptions};
/// use std::collections::HashMap;
///
/// let resolver = BaseUrlResolver::new();
/// let mut env = HashMap::new();
/// env.insert("VITE_BASE_URL".to_string(), "https://vite.example.com/".to_string());
///
/// let applied = apply_from_env_object(&resolver, Some(&env), &EnvObjectOptions::new());
/// assert_eq!(applied.as_deref(), Some("VITE_BASE_URL"));
/// assert_eq!(resolver.get_base_url(None), "https://vite.example.com");
/// ```
pub fn apply_from_env_object<E>(
    resolver: &BaseUrlResolver,
    env: Option<&E>,
    options: &EnvObjectOptions,
) -> Option<String>
where
    E: EnvObject + ?Sized,
{
    let env = env?;
    let service = options.service();

    for key in options.scan_keys() {
        if let Some(value) = env.lookup(key).filter(|v| !v.is_empty()) {
            tracing::debug!("Applying base URL for '{}' from environment object key {}", service, key);
            resolver.overrides().set(&service, Some(value));
            return Some(key.to_string());
        }
    }

    tracing::trace!("No recognized base URL key in environment object");
    None
}
