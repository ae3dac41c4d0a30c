// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide convenience API.
//!
//! These functions are thin wrappers over one lazily constructed
//! [`BaseUrlResolver::standard`] instance. Code that needs isolation should
//! build its own resolver or use a [`BaseUrlManager`].

use crate::domain::ServiceName;
use crate::ports::EnvObject;
use crate::service::{BaseUrlManager, BaseUrlResolver, EnvObjectOptions};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static DEFAULT_RESOLVER: Lazy<Arc<BaseUrlResolver>> =
    Lazy::new(|| Arc::new(BaseUrlResolver::standard()));

/// Returns the process-wide resolver.
pub fn default_resolver() -> &'static Arc<BaseUrlResolver> {
    &DEFAULT_RESOLVER
}

/// Resolves the `"default"` service.
///
/// # Examples
///
/// ```rust
/// use baseurl::{get_base_url, set_base_url};
///
/// set_base_url(Some("https://a.com/"));
/// assert_eq!(get_base_url(None), "https://a.com");
/// assert_eq!(get_base_url(Some("https://b.com/")), "https://b.com");
/// ```
pub fn get_base_url(preferred: Option<&str>) -> String {
    DEFAULT_RESOLVER.get_base_url(preferred)
}

/// Sets or clears the process-wide `"default"` override.
pub fn set_base_url(url: Option<&str>) {
    DEFAULT_RESOLVER.set_base_url(url);
}

/// Resolves a named service.
pub fn get_base_url_for(name: &str, preferred: Option<&str>) -> String {
    DEFAULT_RESOLVER.get_base_url_for(name, preferred)
}

/// Sets or clears the process-wide override for a named service.
pub fn set_base_url_for(name: &str, url: Option<&str>) {
    DEFAULT_RESOLVER.set_base_url_for(name, url);
}

/// Creates a manager whose private map is seeded from `initial` and which
/// falls back to the process-wide resolver.
///
/// # Examples
///
/// ```rust
/// use baseurl::create_base_url_manager;
/// use std::collections::HashMap;
///
/// let mut initial = HashMap::new();
/// initial.insert("content".to_string(), "https://c.com/".to_string());
///
/// let manager = create_base_url_manager(Some(&initial));
/// assert_eq!(manager.get_base_url_for("content", None), "https://c.com");
/// ```
pub fn create_base_url_manager(initial: Option<&HashMap<String, String>>) -> BaseUrlManager {
    match initial {
        Some(initial) => {
            DEFAULT_RESOLVER.create_manager_with(initial.iter().map(|(k, v)| (k.as_str(), v)))
        }
        None => DEFAULT_RESOLVER.create_manager(),
    }
}

/// Applies a bundler-style environment object to the process-wide overrides.
///
/// Returns the key that was applied, if any.
pub fn apply_from_env_object<E>(env: Option<&E>, options: &EnvObjectOptions) -> Option<String>
where
    E: EnvObject + ?Sized,
{
    DEFAULT_RESOLVER.apply_env_object(env, options)
}

/// Returns the current normalized process-wide override for `name`
/// (`"default"` when `None`). Read-only; intended for debugging.
pub fn debug_override(name: Option<&str>) -> Option<String> {
    let name = name.map(ServiceName::from).unwrap_or_default();
    DEFAULT_RESOLVER.get_override(&name)
}
