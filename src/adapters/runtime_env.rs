// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime-injected environment variables.
//!
//! Some hosts hand configuration to a process after it starts (an embedding
//! runtime, a test harness, a plugin host) and should not mutate the real
//! process environment to do it. Variables injected here are visible to every
//! resolver using the standard environment reader, after the process
//! environment itself.

use crate::domain::{BaseUrlError, Result};
use crate::ports::EnvSource;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-wide runtime variables.
static RUNTIME_ENV: Lazy<RwLock<HashMap<String, String>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Sets a runtime variable, or removes it when `value` is `None`.
pub fn set_runtime_env(key: impl Into<String>, value: Option<&str>) {
    let key = key.into();
    match RUNTIME_ENV.write() {
        Ok(mut guard) => match value {
            Some(value) => {
                guard.insert(key, value.to_string());
            }
            None => {
                guard.remove(&key);
            }
        },
        Err(_) => tracing::warn!("Runtime environment lock poisoned; ignoring set of '{}'", key),
    }
}

/// Replaces all runtime variables.
pub fn replace_runtime_env(vars: impl IntoIterator<Item = (String, String)>) {
    let vars: HashMap<String, String> = vars.into_iter().collect();
    match RUNTIME_ENV.write() {
        Ok(mut guard) => *guard = vars,
        Err(_) => tracing::warn!("Runtime environment lock poisoned; ignoring replace"),
    }
}

/// Removes all runtime variables.
pub fn clear_runtime_env() {
    if let Ok(mut guard) = RUNTIME_ENV.write() {
        guard.clear();
    }
}

/// Environment source adapter over the runtime-injected variables.
///
/// # Examples
///
/// ```rust
/// use baseurl::adapters::runtime_env::{set_runtime_env, RuntimeEnvAdapter};
/// use baseurl::ports::EnvSource;
///
/// set_runtime_env("DOCTEST_RUNTIME_BASE_URL", Some("https://injected.com"));
///
/// let adapter = RuntimeEnvAdapter;
/// assert_eq!(
///     adapter.get("DOCTEST_RUNTIME_BASE_URL").unwrap().as_deref(),
///     Some("https://injected.com")
/// );
/// # set_runtime_env("DOCTEST_RUNTIME_BASE_URL", None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeEnvAdapter;

impl EnvSource for RuntimeEnvAdapter {
    fn name(&self) -> &str {
        "runtime-env"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = RUNTIME_ENV
            .read()
            .map_err(|_| BaseUrlError::source_error("runtime-env", "lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }
}
