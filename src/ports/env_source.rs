// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! An `EnvSource` is one way of reading environment variables. The environment
//! reader probes an ordered list of sources and takes the first non-empty value.

use crate::domain::Result;

/// A provider of environment variable values.
///
/// Each source declares whether it is usable at all through
/// [`is_available`](EnvSource::is_available). A source that is unavailable is
/// skipped; an `Err` from [`get`](EnvSource::get) is treated as a miss by the
/// reader, which then moves on to the next source.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a resolver holding them can
/// live in a process-wide static.
///
/// # Examples
///
/// ```rust
/// use baseurl::ports::EnvSource;
/// use baseurl::domain::Result;
///
/// struct FixedSource;
///
/// impl EnvSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &str) -> Result<Option<String>> {
///         Ok((key == "BASE_URL").then(|| "https://fixed.example.com".to_string()))
///     }
/// }
///
/// let source = FixedSource;
/// assert!(source.is_available());
/// assert!(source.get("BASE_URL").unwrap().is_some());
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns a short identifier used in log messages, like `"process-env"`.
    fn name(&self) -> &str;

    /// Returns `true` if this source can be queried in the current process.
    ///
    /// Defaults to `true`.
    fn is_available(&self) -> bool {
        true
    }

    /// Looks up a variable.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The variable is set
    /// * `Ok(None)` - The variable is not set in this source
    /// * `Err(BaseUrlError)` - The source could not be read
    fn get(&self, key: &str) -> Result<Option<String>>;
}
