// SPDX-License-Identifier: MIT OR Apache-2.0

//! Map from service names to normalized base URLs.

use crate::domain::{BaseUrl, ServiceName};
use std::collections::HashMap;

/// A mapping from [`ServiceName`] to normalized [`BaseUrl`].
///
/// Values are normalized on insert and copied, never shared. Setting an empty
/// or absent value removes the entry, and so does a value that normalizes to
/// the empty string (such as `"/"`), so a stored entry is never empty.
///
/// # Examples
///
/// ```
/// use baseurl::domain::{BaseUrlMap, ServiceName};
///
/// let mut map = BaseUrlMap::new();
/// map.set(ServiceName::from("content"), Some("https://c.com/"));
/// assert_eq!(map.get_str("content"), Some("https://c.com"));
///
/// map.set(ServiceName::from("content"), None);
/// assert!(map.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseUrlMap {
    entries: HashMap<ServiceName, BaseUrl>,
}

impl BaseUrlMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the entry for `name`.
    ///
    /// Returns `true` if a value is stored afterwards.
    pub fn set(&mut self, name: impl Into<ServiceName>, url: Option<&str>) -> bool {
        let name = name.into();
        let url = url.filter(|u| !u.is_empty()).map(BaseUrl::new);

        match url {
            Some(url) if !url.is_empty() => {
                self.entries.insert(name, url);
                true
            }
            _ => {
                self.entries.remove(&name);
                false
            }
        }
    }

    /// Returns the entry for `name`.
    pub fn get(&self, name: &ServiceName) -> Option<&BaseUrl> {
        self.entries.get(name)
    }

    /// Returns the entry for `name` as a string slice.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&ServiceName::from(name))
            .map(BaseUrl::as_str)
    }

    /// Removes the entry for `name`, returning it if present.
    pub fn remove(&mut self, name: &ServiceName) -> Option<BaseUrl> {
        self.entries.remove(name)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ServiceName, &BaseUrl)> {
        self.entries.iter()
    }

    /// Copies the entries into a plain string map.
    pub fn to_string_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.as_str().to_string()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for BaseUrlMap
where
    K: Into<ServiceName>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BaseUrlMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for BaseUrlMap
where
    K: Into<ServiceName>,
    V: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, url) in iter {
            self.set(name, Some(url.as_ref()));
        }
    }
}
