// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service name newtype and environment key derivation.
//!
//! A `ServiceName` identifies one configurable backend target. The name
//! `"default"` denotes the primary service and is used whenever no name is
//! given.

use std::fmt;

/// Suffix appended to a sanitized service name to form its environment key.
pub const ENV_KEY_SUFFIX: &str = "_BASE_URL";

/// A type-safe wrapper for service names.
///
/// Names are case-sensitive as stored. They are only transformed when an
/// environment variable key is derived from them (see [`to_env_key`]).
///
/// # Examples
///
/// ```
/// use baseurl::domain::ServiceName;
///
/// let name = ServiceName::from("content");
/// assert_eq!(name.as_str(), "content");
/// assert!(!name.is_default());
/// assert!(ServiceName::default().is_default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceName(String);

impl ServiceName {
    /// The distinguished name of the primary service.
    pub const DEFAULT: &'static str = "default";

    /// Creates a new `ServiceName` from a `String`.
    pub fn new(name: String) -> Self {
        ServiceName(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the `"default"` service.
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    /// Returns the per-service environment variable key for this name.
    ///
    /// # Examples
    ///
    /// ```
    /// use baseurl::domain::ServiceName;
    ///
    /// assert_eq!(ServiceName::from("content").env_key(), "CONTENT_BASE_URL");
    /// ```
    pub fn env_key(&self) -> String {
        to_env_key(&self.0)
    }

    /// Converts the `ServiceName` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ServiceName {
    fn default() -> Self {
        ServiceName(Self::DEFAULT.to_string())
    }
}

impl From<String> for ServiceName {
    fn from(s: String) -> Self {
        ServiceName(s)
    }
}

impl From<&str> for ServiceName {
    fn from(s: &str) -> Self {
        ServiceName(s.to_string())
    }
}

impl From<&ServiceName> for ServiceName {
    fn from(name: &ServiceName) -> Self {
        name.clone()
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the environment variable key for a service name.
///
/// The name is trimmed, every character that is not an ASCII letter or digit
/// becomes `_`, runs of `_` collapse into one, leading and trailing `_` are
/// stripped, the result is uppercased, and `_BASE_URL` is appended.
///
/// # Examples
///
/// ```
/// use baseurl::domain::to_env_key;
///
/// assert_eq!(to_env_key("my service!!"), "MY_SERVICE_BASE_URL");
/// assert_eq!(to_env_key("  api-v2.internal "), "API_V2_INTERNAL_BASE_URL");
/// ```
pub fn to_env_key(name: &str) -> String {
    let mut token = String::with_capacity(name.len() + ENV_KEY_SUFFIX.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            token.push(c.to_ascii_uppercase());
        } else if !token.ends_with('_') {
            token.push('_');
        }
    }

    let token = token.trim_matches('_');
    format!("{}{}", token, ENV_KEY_SUFFIX)
}
