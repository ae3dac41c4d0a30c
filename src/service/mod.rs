// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing resolution logic.
//!
//! The resolver applies the precedence chain, the override store holds runtime
//! overrides, the manager layers a private map over a shared resolver, and the
//! environment-object adapter feeds bundler-style variables into overrides.

pub mod env_object;
pub mod env_reader;
pub mod manager;
pub mod override_store;
pub mod resolver;

// Re-export commonly used types
pub use env_object::{apply_from_env_object, EnvObjectOptions, DEFAULT_ENV_OBJECT_KEYS};
pub use env_reader::EnvReader;
pub use manager::BaseUrlManager;
pub use override_store::OverrideStore;
pub use resolver::{BaseUrlResolver, BaseUrlResolverBuilder};
