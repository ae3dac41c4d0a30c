// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the base URL crate.
//!
//! This example demonstrates:
//! - Resolving the default service and a named service
//! - Runtime overrides and preferred values
//! - Applying a bundler-style environment object
//! - Isolated instance managers
//! - Building request URLs
//!
//! To run this example:
//! ```bash
//! # Optionally configure the environment
//! export KAZVIZIAN_BASE_URL="https://api.example.com/"
//! export CONTENT_BASE_URL="https://content.example.com/"
//!
//! cargo run --example basic_usage
//! ```

use baseurl::prelude::*;
use baseurl::{
    apply_from_env_object, create_base_url_manager, debug_override, get_base_url,
    get_base_url_for, set_base_url_for,
};
use std::collections::HashMap;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Base URL Resolution: Basic Usage ===\n");

    println!("--- Example 1: Environment ---");
    println!("default: {:?}", get_base_url(None));
    println!("content: {:?}", get_base_url_for("content", None));

    println!("\n--- Example 2: Runtime Overrides ---");
    set_base_url_for("content", Some("https://cdn.example.com//"));
    println!("content override: {:?}", debug_override(Some("content")));
    println!("content: {}", get_base_url_for("content", None));
    println!(
        "content (preferred): {}",
        get_base_url_for("content", Some("https://staging.example.com/"))
    );

    println!("\n--- Example 3: Environment Object ---");
    let mut injected = HashMap::new();
    injected.insert(
        "VITE_BASE_URL".to_string(),
        "https://vite.example.com/".to_string(),
    );
    match apply_from_env_object(Some(&injected), &EnvObjectOptions::new()) {
        Some(key) => println!("applied {} -> {}", key, get_base_url(None)),
        None => println!("no recognized key"),
    }

    println!("\n--- Example 4: Instance Manager ---");
    let mut initial = HashMap::new();
    initial.insert("content".to_string(), "https://isolated.example.com/".to_string());
    let mut manager = create_base_url_manager(Some(&initial));
    set_base_url_for("content", Some("https://changed.example.com"));
    println!("manager content: {}", manager.get_base_url_for("content", None));
    manager.set_base_url_for("content", None);
    println!(
        "manager content after clear: {}",
        manager.get_base_url_for("content", None)
    );

    println!("\n--- Example 5: Building URLs ---");
    let base = get_base_url_for("content", None);
    println!("{}", build_url(&base, &["/v1/", "articles", "42"]));
    println!("{}", build_url("https://", &["localhost:8080", "health"]));
}
