// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-source base URL resolution for named services.
//!
//! This crate answers one question for client code: which base URL should
//! requests to a given service go to? The answer is looked up, in order, from
//! an explicitly preferred value, a runtime override, a host-published table,
//! and environment variables. Whatever matches first is normalized (trailing
//! `/` removed, bare `scheme://` kept intact) and returned. When nothing matches
//! the result is the empty string; resolution never fails.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and pure logic (`ServiceName`, `BaseUrl`,
//!   `BaseUrlMap`, normalization, URL building, errors)
//! - **Ports**: Trait definitions for where values come from (`EnvSource`,
//!   `BaseUrlTable`, `EnvObject`)
//! - **Adapters**: Process environment, runtime-injected variables, the
//!   process-wide host table, in-memory and YAML tables
//! - **Service**: The resolver, override store, instance manager, and the
//!   environment-object adapter
//!
//! The free functions at the crate root operate on one process-wide resolver.
//!
//! # Feature Flags
//!
//! - `env`: Enable environment variable sources (default)
//! - `yaml`: Enable YAML base URL tables (default)
//! - `cli`: Build the `baseurl` command-line tool
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use baseurl::{build_url, get_base_url_for, set_base_url_for};
//!
//! set_base_url_for("content", Some("https://content.example.com/"));
//!
//! let base = get_base_url_for("content", None);
//! assert_eq!(base, "https://content.example.com");
//! assert_eq!(
//!     build_url(&base, &["/v1/", "articles"]),
//!     "https://content.example.com/v1/articles"
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
mod api;
pub mod domain;
pub mod ports;
pub mod service;

pub use api::{
    apply_from_env_object, create_base_url_manager, debug_override, default_resolver,
    get_base_url, get_base_url_for, set_base_url, set_base_url_for,
};
pub use domain::{build_url, normalize, to_env_key};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        build_url, normalize, to_env_key, BaseUrl, BaseUrlError, BaseUrlMap, Origin, Resolution,
        Result, ServiceName,
    };
    pub use crate::ports::{BaseUrlTable, EnvObject, EnvSource};
    pub use crate::service::{
        BaseUrlManager, BaseUrlResolver, BaseUrlResolverBuilder, EnvObjectOptions, EnvReader,
    };

    pub use crate::adapters::{GlobalTableAdapter, StaticTableAdapter};
    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::{EnvVarAdapter, RuntimeEnvAdapter};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlTableAdapter;
}
