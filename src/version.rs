//! Release string resolution from the versioning descriptor.
//!
//! The descriptor is free-form text; only the last whitespace-delimited
//! token matters, and an optional hyphenated pre-release suffix on that
//! token is discarded. No shape validation is performed beyond that.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the versioning descriptor at the project root.
pub const VERSION_FILE: &str = "VAPOURSYNTH_VERSION";

/// Errors that can occur while resolving the release string
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Failed to read version descriptor at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the canonical release string from a versioning descriptor file.
///
/// A descriptor reading `R58 2.3.4-rc1` resolves to `2.3.4`. Malformed
/// descriptor text yields a malformed release string; only the read
/// itself can fail.
pub fn resolve(path: impl AsRef<Path>) -> Result<String, VersionError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| VersionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(canonicalize(&text))
}

/// Resolve the release string from the `VAPOURSYNTH_VERSION` file in `dir`.
pub fn resolve_in(dir: impl AsRef<Path>) -> Result<String, VersionError> {
    resolve(dir.as_ref().join(VERSION_FILE))
}

/// Derive the canonical release string from descriptor text.
///
/// Takes the last whitespace-delimited token and strips any hyphenated
/// suffix. Text with no whitespace degenerates to the whole trimmed
/// text; whitespace-only text resolves to the empty string.
///
/// # Examples
///
/// ```
/// use vspkg::version::canonicalize;
///
/// assert_eq!(canonicalize("R58 2.3.4-rc1"), "2.3.4");
/// assert_eq!(canonicalize("1.0"), "1.0");
/// ```
#[must_use]
pub fn canonicalize(text: &str) -> String {
    let token = text.split_whitespace().next_back().unwrap_or("").trim();
    token.split('-').next().unwrap_or(token).to_string()
}
