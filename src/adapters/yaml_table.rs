// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file base URL table adapter.
//!
//! This module provides a table adapter that loads service base URLs from a
//! flat YAML mapping:
//!
//! ```yaml
//! default: https://api.example.com/
//! content: https://content.example.com
//! ```

use crate::domain::{BaseUrlError, Result, ServiceName};
use crate::ports::BaseUrlTable;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML table files (1MB)
const MAX_YAML_FILE_SIZE: u64 = 1024 * 1024;

/// File name used when loading from the default OS location.
pub const DEFAULT_TABLE_FILE: &str = "base_urls.yaml";

/// Table adapter for YAML files.
///
/// Only top-level string values are kept; other value types are ignored, the
/// same way a host table ignores non-string entries. An empty document yields
/// an empty table, while a document that is not a mapping is a parse error.
///
/// # Examples
///
/// ```rust
/// use baseurl::adapters::YamlTableAdapter;
/// use baseurl::domain::ServiceName;
/// use baseurl::ports::BaseUrlTable;
///
/// let table = YamlTableAdapter::from_str("default: https://g.com/\n").unwrap();
/// assert_eq!(table.get(&ServiceName::default()).as_deref(), Some("https://g.com/"));
/// ```
#[derive(Debug, Clone)]
pub struct YamlTableAdapter {
    /// Path to the YAML file, if loaded from disk
    file_path: Option<PathBuf>,
    /// Parsed table entries
    values: HashMap<String, String>,
}

impl YamlTableAdapter {
    /// Parses a table from YAML content.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(Self {
            file_path: None,
            values: parse_table(content)?,
        })
    }

    /// Loads a table from a specific file path.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use baseurl::adapters::YamlTableAdapter;
    ///
    /// let table = YamlTableAdapter::from_file("/etc/myapp/base_urls.yaml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let display_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
            .to_string();

        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| BaseUrlError::SourceError {
                source_name: "yaml-table".to_string(),
                message: format!("Invalid or inaccessible path: {}", display_name),
                source: Some(Box::new(e)),
            })?;

        // Check file size before reading
        let metadata = fs::metadata(&canonical_path)?;
        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(BaseUrlError::SourceError {
                source_name: "yaml-table".to_string(),
                message: format!(
                    "Base URL table too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path)?;
        let values = parse_table(&content)?;

        tracing::debug!(
            "Loaded {} base URL entries from {}",
            values.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: Some(canonical_path),
            values,
        })
    }

    /// Loads `base_urls.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use baseurl::adapters::YamlTableAdapter;
    ///
    /// let table = YamlTableAdapter::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::from_file(Self::default_location(app_name, qualifier)?)
    }

    /// Returns the path [`from_default_location`](Self::from_default_location) reads.
    pub fn default_location(app_name: &str, qualifier: &str) -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            BaseUrlError::source_error("yaml-table", "Failed to determine project directories")
        })?;

        Ok(proj_dirs.config_dir().join(DEFAULT_TABLE_FILE))
    }

    /// Returns the path the table was loaded from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the loaded entries as a plain map, e.g. for publishing as the
    /// process-wide host table.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.values.clone()
    }
}

/// Parses a flat YAML mapping into service/URL pairs.
fn parse_table(content: &str) -> Result<HashMap<String, String>> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| BaseUrlError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

    let mapping = match value {
        serde_yaml::Value::Null => return Ok(HashMap::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            return Err(BaseUrlError::ParseError {
                message: "Expected a mapping of service names to base URLs".to_string(),
                source: None,
            })
        }
    };

    let mut values = HashMap::new();
    for (key, val) in mapping {
        match (key.as_str(), val.as_str()) {
            (Some(service), Some(url)) => {
                values.insert(service.to_string(), url.to_string());
            }
            _ => tracing::debug!("Ignoring non-string base URL table entry: {:?}", key),
        }
    }
    Ok(values)
}

impl BaseUrlTable for YamlTableAdapter {
    fn name(&self) -> &str {
        "yaml-table"
    }

    fn get(&self, service: &ServiceName) -> Option<String> {
        self.values
            .get(service.as_str())
            .filter(|v| !v.is_empty())
            .cloned()
    }

    fn services(&self) -> Vec<ServiceName> {
        self.values
            .keys()
            .map(|k| ServiceName::from(k.as_str()))
            .collect()
    }
}
