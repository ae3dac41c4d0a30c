// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for isolated resolvers.
//!
//! These tests build their own resolvers instead of touching the process-wide
//! one, so they can run in parallel.

#![cfg(all(feature = "env", feature = "yaml"))]

use baseurl::adapters::{EnvVarAdapter, StaticTableAdapter, YamlTableAdapter};
use baseurl::domain::{Origin, ServiceName};
use baseurl::service::{BaseUrlResolver, EnvObjectOptions};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn env_values(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn resolver_with_env(entries: &[(&str, &str)]) -> BaseUrlResolver {
    BaseUrlResolver::builder()
        .with_env_source(Box::new(EnvVarAdapter::with_values(env_values(entries))))
        .build()
}

#[test]
fn test_empty_resolver() {
    let resolver = BaseUrlResolver::new();
    assert_eq!(resolver.get_base_url(None), "");

    let resolution = resolver.resolve_with_origin(&ServiceName::from("content"), None);
    assert!(!resolution.is_resolved());
    assert_eq!(resolution.origin, Origin::Unresolved);
}

#[test]
fn test_env_origin_reports_key() {
    let resolver = resolver_with_env(&[("CONTENT_BASE_URL", "https://content.example.com/")]);

    let resolution = resolver.resolve_with_origin(&ServiceName::from("content"), None);
    assert_eq!(resolution.as_str(), "https://content.example.com");
    assert_eq!(
        resolution.origin,
        Origin::Env {
            key: "CONTENT_BASE_URL".to_string()
        }
    );
    assert_eq!(resolution.origin.to_string(), "env:CONTENT_BASE_URL");
}

#[test]
fn test_env_key_sanitization() {
    let resolver = resolver_with_env(&[("MY_SERVICE_BASE_URL", "https://svc.example.com")]);
    assert_eq!(
        resolver.get_base_url_for("my service!!", None),
        "https://svc.example.com"
    );
    assert_eq!(
        resolver.get_base_url_for("  my-service ", None),
        "https://svc.example.com"
    );
}

#[test]
fn test_default_ignores_per_service_key() {
    let resolver = resolver_with_env(&[("DEFAULT_BASE_URL", "https://nope.example.com")]);
    assert_eq!(resolver.get_base_url(None), "");
}

#[test]
fn test_custom_fallback_keys() {
    let resolver = BaseUrlResolver::builder()
        .with_env_source(Box::new(EnvVarAdapter::with_values(env_values(&[(
            "API_ROOT",
            "https://root.example.com/",
        )]))))
        .with_fallback_env_keys(["API_ROOT"])
        .build();

    assert_eq!(
        resolver.env_keys(&ServiceName::from("content")),
        vec!["CONTENT_BASE_URL".to_string(), "API_ROOT".to_string()]
    );
    assert_eq!(resolver.get_base_url(None), "https://root.example.com");
}

#[test]
fn test_scheme_root_preserved_through_resolution() {
    let resolver = BaseUrlResolver::new();
    resolver.set_base_url(Some("https://"));
    assert_eq!(resolver.get_base_url(None), "https://");
}

#[test]
fn test_resolve_all() {
    let resolver = BaseUrlResolver::builder()
        .with_table(Box::new(
            StaticTableAdapter::new()
                .with_entry("content", "https://content.example.com/")
                .with_entry("media", "https://media.example.com"),
        ))
        .build();
    resolver.set_base_url_for("auth", Some("https://auth.example.com/"));
    resolver.set_base_url_for("media", Some("https://media-override.example.com"));

    let names: Vec<String> = resolver
        .known_services()
        .into_iter()
        .map(ServiceName::into_string)
        .collect();
    assert_eq!(names, vec!["auth", "content", "media"]);

    let all = resolver.resolve_all();
    assert_eq!(all["auth"].origin, Origin::Override);
    assert_eq!(all["content"].origin, Origin::Table);
    assert_eq!(all["media"].as_str(), "https://media-override.example.com");
}

#[test]
fn test_managers_are_independent() {
    let resolver = Arc::new(BaseUrlResolver::new());
    let mut first = resolver.create_manager_with([("content", "https://one.example.com/")]);
    let mut second = resolver.create_manager();

    second.set_base_url_for("content", Some("https://two.example.com"));
    resolver.set_base_url_for("content", Some("https://shared.example.com"));

    assert_eq!(first.get_base_url_for("content", None), "https://one.example.com");
    assert_eq!(second.get_base_url_for("content", None), "https://two.example.com");

    first.set_base_url_for("content", None);
    assert_eq!(
        first.get_base_url_for("content", None),
        "https://shared.example.com"
    );
    assert_eq!(
        first.get_base_url_for("content", Some("https://preferred.example.com")),
        "https://preferred.example.com"
    );
}

#[test]
fn test_manager_seed_empty_values_skipped() {
    let resolver = Arc::new(resolver_with_env(&[("BASE_URL", "https://env.example.com")]));
    let manager = resolver.create_manager_with([("default", "")]);

    assert!(manager.local().is_empty());
    assert_eq!(manager.get_base_url(None), "https://env.example.com");
}

#[test]
fn test_manager_clones_are_independent() {
    let resolver = Arc::new(BaseUrlResolver::new());
    let mut original = resolver.create_manager_with([("default", "https://a.example.com")]);
    let copy = original.clone();

    original.set_base_url(Some("https://b.example.com"));
    assert_eq!(copy.get_base_url(None), "https://a.example.com");
    assert_eq!(original.get_base_url(None), "https://b.example.com");
}

#[test]
fn test_env_object_first_match_wins() {
    let resolver = BaseUrlResolver::new();
    let mut env = BTreeMap::new();
    env.insert("BASE_URL".to_string(), "https://generic.example.com".to_string());
    env.insert("VITE_BASE_URL".to_string(), "https://vite.example.com/".to_string());

    let applied = resolver.apply_env_object(Some(&env), &EnvObjectOptions::new());
    assert_eq!(applied.as_deref(), Some("VITE_BASE_URL"));
    assert_eq!(resolver.get_base_url(None), "https://vite.example.com");
}

#[test]
fn test_env_object_empty_values_are_skipped() {
    let resolver = BaseUrlResolver::new();
    let env = env_values(&[
        ("KAZVIZIAN_BASE_URL", ""),
        ("BASE_URL", "https://generic.example.com"),
    ]);

    let applied = resolver.apply_env_object(Some(&env), &EnvObjectOptions::new());
    assert_eq!(applied.as_deref(), Some("BASE_URL"));
}

#[test]
fn test_env_object_empty_key_list_uses_defaults() {
    let resolver = BaseUrlResolver::new();
    let env = env_values(&[("NEXT_PUBLIC_BASE_URL", "https://next.example.com")]);
    let options = EnvObjectOptions::new().keys(Vec::<String>::new());

    assert!(resolver.apply_env_object(Some(&env), &options).is_some());
    assert_eq!(resolver.get_base_url(None), "https://next.example.com");
}

#[test]
fn test_yaml_table_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "default: https://api.example.com/").unwrap();
    writeln!(file, "content: https://content.example.com//").unwrap();
    writeln!(file, "retries: 3").unwrap();
    file.flush().unwrap();

    let table = YamlTableAdapter::from_file(file.path()).unwrap();
    let resolver = BaseUrlResolver::builder()
        .with_table(Box::new(table))
        .with_env_source(Box::new(EnvVarAdapter::with_values(env_values(&[(
            "RETRIES_BASE_URL",
            "https://retries.example.com",
        )]))))
        .build();

    assert_eq!(resolver.get_base_url(None), "https://api.example.com");
    assert_eq!(
        resolver.get_base_url_for("content", None),
        "https://content.example.com"
    );
    // Non-string entries are not part of the table.
    assert_eq!(
        resolver.get_base_url_for("retries", None),
        "https://retries.example.com"
    );
}

#[test]
fn test_yaml_value_as_env_object() {
    let value: serde_yaml::Value =
        serde_yaml::from_str("BASE_URL: https://yaml.example.com/\nPORT: 8080\n").unwrap();
    let resolver = BaseUrlResolver::new();

    let applied = resolver.apply_env_object(Some(&value), &EnvObjectOptions::new().name("content"));
    assert_eq!(applied.as_deref(), Some("BASE_URL"));
    assert_eq!(
        resolver.get_override(&ServiceName::from("content")).as_deref(),
        Some("https://yaml.example.com")
    );
}
