//! Install mapping for the pre-built native library.
//!
//! The native library is expected at a fixed debug-build location and is
//! packaged unconditionally. A present artifact indicates the user
//! rebuilt the library locally; an absent one is only discovered when
//! the packaging tool processes the descriptor.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Install target inside the Python prefix.
pub const SITE_PACKAGES_DIR: &str = r"Lib\site-packages";

/// File name of the native library artifact.
pub const NATIVE_LIBRARY: &str = "VapourSynth.dll";

/// One install-time mapping from a target directory to bundled files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFileEntry {
    /// Directory the files are installed into
    pub target_dir: PathBuf,

    /// Files bundled verbatim, relative to the assembly root
    pub sources: Vec<PathBuf>,
}

/// Expected path of the locally built native library.
///
/// Follows the conventional MSVC debug output layout. The path is
/// computed, never checked.
#[must_use]
pub fn native_library_path() -> PathBuf {
    Path::new("msvc_project")
        .join("x64")
        .join("Debug")
        .join(NATIVE_LIBRARY)
}

/// The single site-packages install entry for the native library.
///
/// Prints a notice naming the computed path so the packaging log shows
/// where the library is taken from.
#[must_use]
pub fn site_packages_entry() -> DataFileEntry {
    let dll_path = native_library_path();

    println!("Found {NATIVE_LIBRARY} at: {}", dll_path.display());
    crate::debug!("bundling native library from {}", dll_path.display());

    DataFileEntry {
        target_dir: PathBuf::from(SITE_PACKAGES_DIR),
        sources: vec![dll_path],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;

    #[test]
    fn library_path_follows_debug_layout() {
        let path = native_library_path();

        assert_eq!(
            path,
            Path::new("msvc_project")
                .join("x64")
                .join("Debug")
                .join("VapourSynth.dll")
        );
    }

    #[test]
    fn library_path_is_deterministic() {
        assert_eq!(native_library_path(), native_library_path());
    }

    #[test]
    fn exactly_one_source_per_entry() {
        let entry = site_packages_entry();

        assert_eq!(entry.sources.len(), 1);
        assert_eq!(entry.sources.first().unwrap(), &native_library_path());
    }

    #[test]
    fn entry_targets_site_packages() {
        let entry = site_packages_entry();

        assert_eq!(entry.target_dir, Path::new(SITE_PACKAGES_DIR));
    }

    #[test]
    fn entry_is_emitted_without_existence_check() {
        // The dll never exists in the test environment; the entry must
        // still come out identical to the computed layout.
        let entry = site_packages_entry();

        assert!(!entry.sources.first().unwrap().exists());
        assert_eq!(entry, site_packages_entry());
    }
}
