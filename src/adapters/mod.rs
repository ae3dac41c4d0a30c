// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing source and table implementations.
//!
//! Concrete implementations of the traits in the ports layer: environment
//! sources and base URL tables.

#[cfg(feature = "env")]
pub mod env_var;
pub mod global_table;
#[cfg(feature = "env")]
pub mod runtime_env;
pub mod static_table;
#[cfg(feature = "yaml")]
pub mod yaml_table;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use global_table::{clear_host_table, publish_host_table, GlobalTableAdapter};
#[cfg(feature = "env")]
pub use runtime_env::RuntimeEnvAdapter;
pub use static_table::StaticTableAdapter;
#[cfg(feature = "yaml")]
pub use yaml_table::YamlTableAdapter;
