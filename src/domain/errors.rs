// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the base URL crate.
//!
//! Resolution itself never fails: an unresolvable base URL is the empty string.
//! These errors are produced by individual sources (which the resolver treats
//! as misses) and by the explicit table loaders, which report to their caller.

use thiserror::Error;

/// The main error type for base URL sources and loaders.
///
/// Marked `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use baseurl::domain::errors::BaseUrlError;
///
/// fn read_source() -> Result<Option<String>, BaseUrlError> {
///     Err(BaseUrlError::SourceError {
///         source_name: "env".to_string(),
///         message: "value is not valid unicode".to_string(),
///         source: None,
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BaseUrlError {
    /// A base URL source failed while being queried.
    #[error("Base URL source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A base URL table could not be parsed.
    #[error("Failed to parse base URL table: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading a table file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BaseUrlError {
    /// Creates a `SourceError` without an underlying cause.
    pub fn source_error(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        BaseUrlError::SourceError {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for base URL operations.
pub type Result<T> = std::result::Result<T, BaseUrlError>;
