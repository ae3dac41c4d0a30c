// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and pure logic.
//!
//! Service names, normalized base URLs, the name-to-URL map, and resolution
//! outcomes. Nothing here touches the environment or global state.

pub mod base_url;
pub mod base_url_map;
pub mod errors;
pub mod resolution;
pub mod service_name;

// Re-export commonly used types
pub use base_url::{build_url, normalize, BaseUrl};
pub use base_url_map::BaseUrlMap;
pub use errors::{BaseUrlError, Result};
pub use resolution::{Origin, Resolution};
pub use service_name::{to_env_key, ServiceName};
