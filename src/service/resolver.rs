// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base URL resolver and its builder.
//!
//! The resolver applies the precedence chain for a named service:
//!
//! 1. a non-empty preferred value supplied by the caller
//! 2. the runtime override for the service
//! 3. the host table entry for the service
//! 4. environment variables: `<SERVICE>_BASE_URL` (named services only), then
//!    `KAZVIZIAN_BASE_URL`, then `BASE_URL`
//!
//! The first match wins and is normalized. When nothing matches the result is
//! the empty string.

use crate::domain::{BaseUrlMap, Origin, Resolution, ServiceName};
use crate::ports::{BaseUrlTable, EmptyTable, EnvObject, EnvSource};
use crate::service::env_object::{self, EnvObjectOptions};
use crate::service::{BaseUrlManager, EnvReader, OverrideStore};
use std::collections::HashMap;
use std::sync::Arc;

/// Project-wide environment variable consulted for every service.
pub const PROJECT_ENV_KEY: &str = "KAZVIZIAN_BASE_URL";

/// Generic environment variable consulted last for every service.
pub const GENERIC_ENV_KEY: &str = "BASE_URL";

/// The fallback environment keys tried after the per-service key.
pub const DEFAULT_FALLBACK_ENV_KEYS: [&str; 2] = [PROJECT_ENV_KEY, GENERIC_ENV_KEY];

/// Resolves base URLs for named services.
///
/// A resolver owns its override store, so two resolvers never see each other's
/// overrides. The crate-root functions use one process-wide resolver built with
/// [`BaseUrlResolver::standard`].
///
/// # Examples
///
/// ```rust
/// use baseurl::adapters::{EnvVarAdapter, StaticTableAdapter};
/// use baseurl::service::BaseUrlResolver;
/// use std::collections::HashMap;
///
/// let mut env = HashMap::new();
/// env.insert("CONTENT_BASE_URL".to_string(), "https://content.example.com/".to_string());
///
/// let resolver = BaseUrlResolver::builder()
///     .with_table(Box::new(StaticTableAdapter::new().with_entry("default", "https://g.com/")))
///     .with_env_source(Box::new(EnvVarAdapter::with_values(env)))
///     .build();
///
/// assert_eq!(resolver.get_base_url(None), "https://g.com");
/// assert_eq!(resolver.get_base_url_for("content", None), "https://content.example.com");
///
/// resolver.set_base_url(Some("https://a.com/"));
/// assert_eq!(resolver.get_base_url(None), "https://a.com");
/// assert_eq!(resolver.get_base_url(Some("https://b.com/")), "https://b.com");
/// ```
pub struct BaseUrlResolver {
    overrides: OverrideStore,
    table: Box<dyn BaseUrlTable>,
    env: EnvReader,
    fallback_env_keys: Vec<String>,
}

impl BaseUrlResolver {
    /// Creates a resolver with no table and no environment sources.
    ///
    /// Only preferred values and overrides resolve.
    pub fn new() -> Self {
        Self {
            overrides: OverrideStore::new(),
            table: Box::new(EmptyTable),
            env: EnvReader::new(),
            fallback_env_keys: default_fallback_keys(),
        }
    }

    /// Creates a new resolver builder.
    pub fn builder() -> BaseUrlResolverBuilder {
        BaseUrlResolverBuilder::new()
    }

    /// Creates the standard resolver: the process-wide host table and the
    /// standard environment reader.
    pub fn standard() -> Self {
        Self::builder()
            .with_host_table()
            .with_standard_env()
            .build()
    }

    /// Resolves the base URL for `name`.
    ///
    /// Never fails; returns `""` when nothing is configured.
    pub fn resolve(&self, name: &ServiceName, preferred: Option<&str>) -> String {
        self.resolve_with_origin(name, preferred).into_string()
    }

    /// Resolves the base URL for `name` and reports which layer produced it.
    pub fn resolve_with_origin(&self, name: &ServiceName, preferred: Option<&str>) -> Resolution {
        if let Some(preferred) = preferred.filter(|p| !p.is_empty()) {
            tracing::trace!("Base URL for '{}' from preferred value", name);
            return Resolution::new(preferred, Origin::Preferred);
        }

        if let Some(url) = self.overrides.get(name) {
            tracing::trace!("Base URL for '{}' from override", name);
            return Resolution::new(url, Origin::Override);
        }

        if let Some(url) = self.table.get(name) {
            tracing::trace!("Base URL for '{}' from table '{}'", name, self.table.name());
            return Resolution::new(url, Origin::Table);
        }

        for key in self.env_keys(name) {
            if let Some(url) = self.env.get(&key) {
                tracing::trace!("Base URL for '{}' from environment variable {}", name, key);
                return Resolution::new(url, Origin::Env { key });
            }
        }

        tracing::debug!("No base URL configured for '{}'", name);
        Resolution::unresolved()
    }

    /// Returns the environment keys tried for `name`, in order.
    pub fn env_keys(&self, name: &ServiceName) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.fallback_env_keys.len() + 1);
        if !name.is_default() {
            keys.push(name.env_key());
        }
        keys.extend(self.fallback_env_keys.iter().cloned());
        keys
    }

    /// Resolves the `"default"` service.
    pub fn get_base_url(&self, preferred: Option<&str>) -> String {
        self.resolve(&ServiceName::default(), preferred)
    }

    /// Sets or clears the `"default"` override.
    pub fn set_base_url(&self, url: Option<&str>) {
        self.overrides.set(&ServiceName::default(), url);
    }

    /// Resolves a named service.
    pub fn get_base_url_for(&self, name: &str, preferred: Option<&str>) -> String {
        self.resolve(&ServiceName::from(name), preferred)
    }

    /// Sets or clears the override for a named service.
    pub fn set_base_url_for(&self, name: &str, url: Option<&str>) {
        self.overrides.set(&ServiceName::from(name), url);
    }

    /// Returns the current normalized override for `name`, if any.
    pub fn get_override(&self, name: &ServiceName) -> Option<String> {
        self.overrides.get(name)
    }

    /// Returns the override store.
    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// Scans an environment object for a recognized key and stores the first
    /// match as an override. See [`env_object::apply_from_env_object`].
    pub fn apply_env_object<E>(&self, env: Option<&E>, options: &EnvObjectOptions) -> Option<String>
    where
        E: EnvObject + ?Sized,
    {
        env_object::apply_from_env_object(self, env, options)
    }

    /// Creates an instance manager that falls back to this resolver.
    pub fn create_manager(self: &Arc<Self>) -> BaseUrlManager {
        BaseUrlManager::new(Arc::clone(self))
    }

    /// Creates an instance manager seeded with `initial`.
    pub fn create_manager_with<I, K, V>(self: &Arc<Self>, initial: I) -> BaseUrlManager
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ServiceName>,
        V: AsRef<str>,
    {
        BaseUrlManager::with_initial(Arc::clone(self), initial.into_iter().collect::<BaseUrlMap>())
    }

    /// Lists the services with an override or a table entry.
    pub fn known_services(&self) -> Vec<ServiceName> {
        let mut services: Vec<ServiceName> = self
            .overrides
            .snapshot()
            .into_keys()
            .map(ServiceName::from)
            .chain(self.table.services())
            .collect();
        services.sort();
        services.dedup();
        services
    }

    /// Resolves every known service.
    pub fn resolve_all(&self) -> HashMap<String, Resolution> {
        self.known_services()
            .into_iter()
            .map(|name| {
                let resolution = self.resolve_with_origin(&name, None);
                (name.into_string(), resolution)
            })
            .collect()
    }
}

impl Default for BaseUrlResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BaseUrlResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseUrlResolver")
            .field("overrides", &self.overrides)
            .field("table", &self.table.name())
            .field("env", &self.env)
            .field("fallback_env_keys", &self.fallback_env_keys)
            .finish()
    }
}

fn default_fallback_keys() -> Vec<String> {
    DEFAULT_FALLBACK_ENV_KEYS.iter().map(|k| k.to_string()).collect()
}

/// Builder for constructing a `BaseUrlResolver`.
///
/// # Examples
///
/// ```rust
/// use baseurl::service::BaseUrlResolverBuilder;
///
/// let resolver = BaseUrlResolverBuilder::new()
///     .with_standard_env()
///     .with_fallback_env_keys(["MYAPP_BASE_URL", "BASE_URL"])
///     .build();
/// ```
pub struct BaseUrlResolverBuilder {
    table: Option<Box<dyn BaseUrlTable>>,
    env: EnvReader,
    fallback_env_keys: Vec<String>,
}

impl BaseUrlResolverBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            table: None,
            env: EnvReader::new(),
            fallback_env_keys: default_fallback_keys(),
        }
    }

    /// Sets the base URL table, replacing any previous one.
    pub fn with_table(mut self, table: Box<dyn BaseUrlTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Uses the process-wide host table.
    pub fn with_host_table(self) -> Self {
        use crate::adapters::GlobalTableAdapter;
        self.with_table(Box::new(GlobalTableAdapter))
    }

    /// Appends an environment source.
    pub fn with_env_source(mut self, source: Box<dyn EnvSource>) -> Self {
        self.env.add_source(source);
        self
    }

    /// Appends the standard environment sources. See
    /// [`EnvReader::with_standard_sources`].
    pub fn with_standard_env(mut self) -> Self {
        self.env = self.env.with_standard_sources();
        self
    }

    /// Replaces the fallback keys tried after the per-service key.
    pub fn with_fallback_env_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_env_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the resolver.
    pub fn build(self) -> BaseUrlResolver {
        BaseUrlResolver {
            overrides: OverrideStore::new(),
            table: self.table.unwrap_or_else(|| Box::new(EmptyTable)),
            env: self.env,
            fallback_env_keys: self.fallback_env_keys,
        }
    }
}

impl Default for BaseUrlResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
