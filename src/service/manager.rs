// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instance manager with a private override layer.

use crate::domain::{BaseUrlMap, Origin, Resolution, ServiceName};
use crate::service::BaseUrlResolver;
use std::sync::Arc;

/// An isolated base URL manager.
///
/// The manager keeps its own map of overrides. Lookups check a non-empty
/// preferred value first, then the private map, and only then fall back to the
/// shared resolver, so a manager without a private value still benefits from
/// host table and environment configuration.
///
/// Changes to the resolver's overrides never affect the private map, and the
/// manager's `set` calls are never visible to the resolver or to other
/// managers.
///
/// # Examples
///
/// ```rust
/// use baseurl::service::BaseUrlResolver;
/// use std::sync::Arc;
///
/// let resolver = Arc::new(BaseUrlResolver::new());
/// let mut manager = resolver.create_manager_with([("content", "https://c.com/")]);
///
/// resolver.set_base_url_for("content", Some("https://x.com/"));
/// assert_eq!(manager.get_base_url_for("content", None), "https://c.com");
///
/// manager.set_base_url_for("content", None);
/// assert_eq!(manager.get_base_url_for("content", None), "https://x.com");
/// ```
#[derive(Debug, Clone)]
pub struct BaseUrlManager {
    local: BaseUrlMap,
    resolver: Arc<BaseUrlResolver>,
}

impl BaseUrlManager {
    /// Creates a manager with an empty private map.
    pub fn new(resolver: Arc<BaseUrlResolver>) -> Self {
        Self::with_initial(resolver, BaseUrlMap::new())
    }

    /// Creates a manager seeded with `initial`.
    pub fn with_initial(resolver: Arc<BaseUrlResolver>, initial: BaseUrlMap) -> Self {
        Self {
            local: initial,
            resolver,
        }
    }

    /// Resolves `name` through the preferred value, the private map, then the
    /// shared resolver, reporting which layer matched.
    pub fn resolve_with_origin(&self, name: &ServiceName, preferred: Option<&str>) -> Resolution {
        if let Some(preferred) = preferred.filter(|p| !p.is_empty()) {
            return Resolution::new(preferred, Origin::Preferred);
        }
        if let Some(url) = self.local.get(name) {
            return Resolution::new(url, Origin::Override);
        }
        self.resolver.resolve_with_origin(name, None)
    }

    /// Resolves `name`.
    pub fn resolve(&self, name: &ServiceName, preferred: Option<&str>) -> String {
        self.resolve_with_origin(name, preferred).into_string()
    }

    /// Resolves the `"default"` service.
    pub fn get_base_url(&self, preferred: Option<&str>) -> String {
        self.resolve(&ServiceName::default(), preferred)
    }

    /// Sets or clears the private `"default"` entry.
    pub fn set_base_url(&mut self, url: Option<&str>) {
        self.local.set(ServiceName::default(), url);
    }

    /// Resolves a named service.
    pub fn get_base_url_for(&self, name: &str, preferred: Option<&str>) -> String {
        self.resolve(&ServiceName::from(name), preferred)
    }

    /// Sets or clears the private entry for a named service.
    pub fn set_base_url_for(&mut self, name: &str, url: Option<&str>) {
        self.local.set(name, url);
    }

    /// Returns the private entries.
    pub fn local(&self) -> &BaseUrlMap {
        &self.local
    }

    /// Returns the resolver this manager falls back to.
    pub fn resolver(&self) -> &Arc<BaseUrlResolver> {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticTableAdapter;

    fn shared() -> Arc<BaseUrlResolver> {
        Arc::new(
            BaseUrlResolver::builder()
                .with_table(Box::new(
                    StaticTableAdapter::new().with_entry("default", "https://table.com/"),
                ))
                .build(),
        )
    }

    #[test]
    fn test_empty_manager_falls_back() {
        let manager = BaseUrlManager::new(shared());
        assert_eq!(manager.get_base_url(None), "https://table.com");
        assert_eq!(manager.get_base_url_for("content", None), "");
    }

    #[test]
    fn test_seeded_values_are_normalized() {
        let initial: BaseUrlMap = vec![("content", "https://c.com///")].into_iter().collect();
        let manager = BaseUrlManager::with_initial(shared(), initial);
        assert_eq!(manager.local().get_str("content"), Some("https://c.com"));
    }

    #[test]
    fn test_preferred_wins_over_private() {
        let mut manager = BaseUrlManager::new(shared());
        manager.set_base_url(Some("https://private.com"));
        assert_eq!(manager.get_base_url(Some("https://p.com/")), "https://p.com");
        assert_eq!(manager.get_base_url(None), "https://private.com");
    }

    #[test]
    fn test_private_wins_over_resolver_override() {
        let resolver = shared();
        resolver.set_base_url(Some("https://global-override.com"));

        let mut manager = resolver.create_manager();
        assert_eq!(manager.get_base_url(None), "https://global-override.com");

        manager.set_base_url(Some("https://private.com/"));
        let r = manager.resolve_with_origin(&ServiceName::default(), None);
        assert_eq!(r.as_str(), "https://private.com");
        assert_eq!(r.origin, Origin::Override);
    }

    #[test]
    fn test_isolation_both_ways() {
        let resolver = shared();
        let mut manager = resolver.create_manager_with([("content", "https://c.com/")]);

        resolver.set_base_url_for("content", Some("https://x.com/"));
        assert_eq!(manager.get_base_url_for("content", None), "https://c.com");

        manager.set_base_url_for("media", Some("https://m.com"));
        assert_eq!(resolver.get_base_url_for("media", None), "");
    }

    #[test]
    fn test_managers_are_independent() {
        let resolver = shared();
        let mut a = resolver.create_manager();
        let b = resolver.create_manager();

        a.set_base_url(Some("https://a.com"));
        assert_eq!(a.get_base_url(None), "https://a.com");
        assert_eq!(b.get_base_url(None), "https://table.com");
    }

    #[test]
    fn test_clear_private_entry() {
        let mut manager = BaseUrlManager::new(shared());
        manager.set_base_url(Some("https://private.com"));
        manager.set_base_url(Some(""));
        assert_eq!(manager.get_base_url(None), "https://table.com");
        assert!(manager.local().is_empty());
    }

    #[test]
    fn test_cloned_manager_has_own_map() {
        let mut original = BaseUrlManager::new(shared());
        original.set_base_url(Some("https://one.com"));

        let mut copy = original.clone();
        copy.set_base_url(Some("https://two.com"));

        assert_eq!(original.get_base_url(None), "https://one.com");
        assert_eq!(copy.get_base_url(None), "https://two.com");
        assert!(Arc::ptr_eq(original.resolver(), copy.resolver()));
    }
}
