//! vspkg internal library code
//!
//! Assembles the build descriptor for the `VapourSynth` Python extension
//! module and hands it to the external packaging tool: the resolved
//! release string, the extension build specification, and the install
//! mapping for the pre-built native library.

pub mod data_files;
pub mod debug;
pub mod dispatch;
pub mod extension;
pub mod metadata;
pub mod version;

// Re-export common types for convenience
pub use data_files::{DataFileEntry, native_library_path, site_packages_entry};
pub use debug::{init_debug, is_debug_enabled};
pub use dispatch::{DispatchOutcome, PackagingTool};
pub use extension::{ExtensionModule, MacroDefine};
pub use metadata::PackageMetadata;
pub use version::{VERSION_FILE, VersionError};
