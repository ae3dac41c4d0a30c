// SPDX-License-Identifier: MIT OR Apache-2.0

//! The outcome of resolving a base URL, including the layer it came from.

use crate::domain::BaseUrl;
use std::fmt;

/// The resolution layer that produced a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The caller passed a preferred value.
    Preferred,
    /// A runtime override (resolver store or manager-private map).
    Override,
    /// A host-published base URL table.
    Table,
    /// An environment variable.
    Env {
        /// The variable that matched
        key: String,
    },
    /// Nothing matched; the URL is empty.
    Unresolved,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Preferred => write!(f, "preferred"),
            Origin::Override => write!(f, "override"),
            Origin::Table => write!(f, "table"),
            Origin::Env { key } => write!(f, "env:{}", key),
            Origin::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// A resolved base URL together with its [`Origin`].
///
/// # Examples
///
/// ```
/// use baseurl::domain::{Origin, Resolution};
///
/// let resolution = Resolution::new("https://a.com/", Origin::Preferred);
/// assert_eq!(resolution.as_str(), "https://a.com");
/// assert!(resolution.is_resolved());
/// assert!(!Resolution::unresolved().is_resolved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The normalized URL
    pub url: BaseUrl,
    /// Where the URL came from
    pub origin: Origin,
}

impl Resolution {
    /// Creates a resolution, normalizing `url`.
    pub fn new(url: impl AsRef<str>, origin: Origin) -> Self {
        Self {
            url: BaseUrl::new(url),
            origin,
        }
    }

    /// The empty resolution returned when no layer matched.
    pub fn unresolved() -> Self {
        Self {
            url: BaseUrl::new(""),
            origin: Origin::Unresolved,
        }
    }

    /// Returns `true` unless no layer matched.
    pub fn is_resolved(&self) -> bool {
        self.origin != Origin::Unresolved
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Converts the resolution into the URL string.
    pub fn into_string(self) -> String {
        self.url.into_string()
    }
}
