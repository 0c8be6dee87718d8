//! End-to-end descriptor assembly over a scratch project layout.

#![allow(clippy::indexing_slicing, reason = "Tests can panic")]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vspkg::extension::RELEASE_MACRO;
use vspkg::{PackageMetadata, VERSION_FILE, native_library_path};

fn project_with_version(text: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(VERSION_FILE), text).unwrap();
    temp
}

#[test]
fn assembles_descriptor_from_tagged_release() {
    let temp = project_with_version("v1 2.3.4-rc1\n");
    let metadata = PackageMetadata::assemble_in(temp.path()).unwrap();

    assert_eq!(metadata.version, "2.3.4");
    assert_eq!(metadata.name, "VapourSynth");
    assert_eq!(metadata.author, "Fredrik Mellbin");
    assert_eq!(metadata.platforms, "All");
}

#[test]
fn assembles_descriptor_from_plain_release() {
    let temp = project_with_version("1.0");
    let metadata = PackageMetadata::assemble_in(temp.path()).unwrap();

    assert_eq!(metadata.version, "1.0");
}

#[test]
fn missing_versioning_descriptor_produces_no_metadata() {
    let temp = TempDir::new().unwrap();

    let err = PackageMetadata::assemble_in(temp.path()).unwrap_err();
    assert!(err.to_string().contains("release"));
}

#[test]
fn extension_spec_is_wired_to_the_native_library() {
    let temp = project_with_version("7.1.0-test3");
    let metadata = PackageMetadata::assemble_in(temp.path()).unwrap();

    let module = metadata.ext_modules.first().unwrap();
    assert_eq!(module.name, "vapoursynth");
    assert_eq!(
        module.macro_named(RELEASE_MACRO).unwrap().value.as_deref(),
        Some("7.1.0")
    );
    assert_eq!(
        module.library_dirs.first().map(PathBuf::as_path),
        native_library_path().parent()
    );
    assert_eq!(
        module.include_dirs.first().map(PathBuf::as_path),
        Some(temp.path())
    );
}

#[test]
fn data_file_entry_ignores_filesystem_state() {
    // No msvc_project tree exists under the scratch root; the entry must
    // still name the conventional debug layout.
    let temp = project_with_version("1.0");
    let metadata = PackageMetadata::assemble_in(temp.path()).unwrap();

    let entry = metadata.data_files.first().unwrap();
    assert_eq!(entry.target_dir, Path::new(r"Lib\site-packages"));
    assert_eq!(entry.sources, vec![native_library_path()]);
}

#[test]
fn assembly_is_reproducible_for_unchanged_inputs() {
    let temp = project_with_version("  5.5.5  ");

    let first = PackageMetadata::assemble_in(temp.path()).unwrap();
    let second = PackageMetadata::assemble_in(temp.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn wire_form_round_trips_through_json() {
    let temp = project_with_version("R58 3.9.1-dev");
    let metadata = PackageMetadata::assemble_in(temp.path()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&metadata.to_json().unwrap()).unwrap();

    assert_eq!(json["version"], "3.9.1");
    assert_eq!(json["license"], "LGPL 2.1 or later");
    assert_eq!(json["ext_modules"].as_array().unwrap().len(), 1);
    assert_eq!(json["data_files"].as_array().unwrap().len(), 1);
    assert_eq!(
        json["exclude_package_data"][""][0],
        serde_json::Value::from(VERSION_FILE)
    );

    let requires: Vec<_> = json["setup_requires"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    assert_eq!(requires, vec!["setuptools>=18.0", "Cython"]);
}
