// SPDX-License-Identifier: MIT OR Apache-2.0

//! Normalized base URL type and path joining.
//!
//! Normalization only removes redundant trailing `/` characters. A value that is
//! exactly a protocol root such as `https://` is kept intact, since stripping it
//! would produce the invalid form `https:/`. No other URL parsing or validation
//! happens here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns `true` if `url` is exactly `<scheme>://` and nothing else.
///
/// The scheme starts with an ASCII letter followed by ASCII letters, digits,
/// `+`, `.` or `-`.
///
/// # Examples
///
/// ```
/// use baseurl::domain::base_url::is_scheme_root;
///
/// assert!(is_scheme_root("https://"));
/// assert!(is_scheme_root("git+ssh://"));
/// assert!(!is_scheme_root("https://a.com"));
/// assert!(!is_scheme_root("://"));
/// ```
pub fn is_scheme_root(url: &str) -> bool {
    let Some(scheme) = url.strip_suffix("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}

/// Normalizes a base URL by stripping trailing `/` characters.
///
/// Empty input yields an empty string, and a bare `scheme://` is returned
/// unchanged. The function is total and idempotent.
///
/// # Examples
///
/// ```
/// use baseurl::domain::normalize;
///
/// assert_eq!(normalize(""), "");
/// assert_eq!(normalize("https://"), "https://");
/// assert_eq!(normalize("https://a.com///"), "https://a.com");
/// assert_eq!(normalize("https://a.com/api/"), "https://a.com/api");
/// ```
pub fn normalize(url: &str) -> String {
    if url.is_empty() || is_scheme_root(url) {
        return url.to_string();
    }
    url.trim_end_matches('/').to_string()
}

/// Joins a base URL with path segments.
///
/// The base is normalized, empty parts are dropped, each remaining part has
/// its leading and trailing `/` removed, and parts that become empty are
/// dropped too. With an empty base the parts are joined on their own; with a
/// bare `scheme://` base the parts are appended directly.
///
/// # Examples
///
/// ```
/// use baseurl::domain::build_url;
///
/// assert_eq!(build_url("https://a.com/", &["/x/", "y"]), "https://a.com/x/y");
/// assert_eq!(build_url("", &["a", "/b/"]), "a/b");
/// assert_eq!(build_url("https://", &["a"]), "https://a");
/// ```
pub fn build_url<S: AsRef<str>>(base: &str, parts: &[S]) -> String {
    let base = normalize(base);
    let cleaned: Vec<&str> = parts
        .iter()
        .map(|p| p.as_ref().trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect();
    let path = cleaned.join("/");

    if base.is_empty() {
        path
    } else if is_scheme_root(&base) {
        base + &path
    } else if path.is_empty() {
        base
    } else {
        format!("{}/{}", base, path)
    }
}

/// A normalized base URL.
///
/// Construction always normalizes, so a `BaseUrl` never ends in `/` unless it
/// is exactly `scheme://`. It serializes as a plain string and normalizes again
/// when deserialized.
///
/// # Examples
///
/// ```
/// use baseurl::domain::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com//");
/// assert_eq!(url.as_str(), "https://api.example.com");
/// assert_eq!(url.join(&["v1", "users/"]), "https://api.example.com/v1/users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a normalized `BaseUrl`.
    pub fn new(url: impl AsRef<str>) -> Self {
        BaseUrl(normalize(url.as_ref()))
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the normalized URL is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the URL is a bare protocol root such as `https://`.
    pub fn is_scheme_root(&self) -> bool {
        is_scheme_root(&self.0)
    }

    /// Joins path segments onto this base URL (see [`build_url`]).
    pub fn join<S: AsRef<str>>(&self, parts: &[S]) -> String {
        build_url(&self.0, parts)
    }

    /// Converts the `BaseUrl` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        BaseUrl::new(s)
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        BaseUrl::new(s)
    }
}

impl From<BaseUrl> for String {
    fn from(url: BaseUrl) -> Self {
        url.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
