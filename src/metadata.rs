//! Package descriptor assembly.
//!
//! Combines the static descriptive fields, the resolved release string,
//! the extension specification, and the native-library install mapping
//! into the single descriptor consumed by the external packaging tool.

use crate::data_files::{self, DataFileEntry};
use crate::extension::ExtensionModule;
use crate::version::{self, VERSION_FILE};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

/// Package name as published.
pub const PACKAGE_NAME: &str = "VapourSynth";

/// One-line package description.
pub const DESCRIPTION: &str = "A frameserver for the 21st century";

/// Project home page.
pub const HOME_URL: &str = "https://www.vapoursynth.com/";

/// Source download location.
pub const DOWNLOAD_URL: &str = "https://github.com/vapoursynth/vapoursynth";

/// Author name.
pub const AUTHOR: &str = "Fredrik Mellbin";

/// Author contact address.
pub const AUTHOR_EMAIL: &str = "fredrik.mellbin@gmail.com";

/// License identifier as published.
pub const LICENSE: &str = "LGPL 2.1 or later";

/// Long-form package description.
pub const LONG_DESCRIPTION: &str = "A modern replacement for Avisynth";

/// Supported platforms field.
pub const PLATFORMS: &str = "All";

/// Tools the packaging tool needs before it can build the extension.
pub const SETUP_REQUIRES: [&str; 2] = ["setuptools>=18.0", "Cython"];

/// The complete build descriptor handed to the packaging tool.
///
/// Produced once per invocation and consumed once; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub download_url: String,
    pub author: String,
    pub author_email: String,
    pub license: String,
    pub version: String,
    pub long_description: String,
    pub platforms: String,
    pub ext_modules: Vec<ExtensionModule>,
    pub data_files: Vec<DataFileEntry>,
    pub setup_requires: Vec<String>,
    pub exclude_package_data: BTreeMap<String, Vec<String>>,
}

impl PackageMetadata {
    /// Assemble the descriptor for the project in the working directory.
    pub fn assemble() -> Result<Self> {
        let root = env::current_dir().context("Failed to determine the working directory")?;
        Self::assemble_in(&root)
    }

    /// Assemble the descriptor for the project at `root`.
    ///
    /// Pure function of the versioning descriptor's contents and the
    /// fixed tables: assembling twice over unchanged inputs yields equal
    /// values. Fails only if the versioning descriptor cannot be read.
    pub fn assemble_in(root: &Path) -> Result<Self> {
        let release = version::resolve_in(root)
            .context("Cannot determine the release to package")?;

        let extension = ExtensionModule::python_binding(&release, root);
        let data_files = vec![data_files::site_packages_entry()];

        // The versioning descriptor feeds the build but is not shipped.
        let mut exclude_package_data = BTreeMap::new();
        exclude_package_data.insert(String::new(), vec![VERSION_FILE.to_string()]);

        Ok(Self {
            name: PACKAGE_NAME.to_string(),
            description: DESCRIPTION.to_string(),
            url: HOME_URL.to_string(),
            download_url: DOWNLOAD_URL.to_string(),
            author: AUTHOR.to_string(),
            author_email: AUTHOR_EMAIL.to_string(),
            license: LICENSE.to_string(),
            version: release,
            long_description: LONG_DESCRIPTION.to_string(),
            platforms: PLATFORMS.to_string(),
            ext_modules: vec![extension],
            data_files,
            setup_requires: SETUP_REQUIRES.iter().map(ToString::to_string).collect(),
            exclude_package_data,
        })
    }

    /// Serialize the descriptor to the wire form the packaging tool reads.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize the package descriptor")
    }
}
