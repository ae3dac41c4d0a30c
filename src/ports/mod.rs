// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits define the seams between resolution logic and the places base
//! URLs come from. Adapters in the adapters layer implement them.

pub mod env_object;
pub mod env_source;
pub mod table;

// Re-export commonly used types
pub use env_object::EnvObject;
pub use env_source::EnvSource;
pub use table::{BaseUrlTable, EmptyTable};
