//! Native-extension build specification.
//!
//! Describes the compiled binding module the packaging tool is asked to
//! build: the Cython source, preprocessor macros, and link/include
//! configuration. Source paths are emitted as-is; a missing file only
//! surfaces later, when the packaging tool compiles the module.

use crate::data_files;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Name of the binding module as imported from Python.
pub const MODULE_NAME: &str = "vapoursynth";

/// Macro that carries the resolved release string into the build.
pub const RELEASE_MACRO: &str = "VS_CURRENT_RELEASE";

/// A preprocessor definition passed to the native compiler.
///
/// Unique by name within an extension module. A `None` value renders as
/// a bare `#define NAME`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroDefine {
    /// Macro name (e.g., `VS_GRAPH_API`)
    pub name: String,

    /// Macro value; `None` for valueless defines
    pub value: Option<String>,
}

impl MacroDefine {
    /// A bare `#define NAME` with no value.
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// A `#define NAME VALUE` pair.
    #[must_use]
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Build specification for one compiled extension module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionModule {
    /// Module name as seen by the scripting runtime
    pub name: String,

    /// Source files, in compile order
    pub sources: Vec<PathBuf>,

    /// Preprocessor definitions, unique by name
    pub define_macros: Vec<MacroDefine>,

    /// Libraries to link against (base names, no prefix/suffix)
    pub libraries: Vec<String>,

    /// Directories searched for the linked libraries
    pub library_dirs: Vec<PathBuf>,

    /// Directories searched for headers
    pub include_dirs: Vec<PathBuf>,
}

impl ExtensionModule {
    /// Build the specification for the Python binding module.
    ///
    /// Merges the derived release macro into the fixed macro set and
    /// points the library search path at the directory expected to hold
    /// the native library. `root` becomes the first include directory so
    /// generated headers next to the descriptor are found.
    #[must_use]
    pub fn python_binding(version: &str, root: &Path) -> Self {
        let dll_path = data_files::native_library_path();
        let library_dir = dll_path
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf);

        let mut module = Self {
            name: MODULE_NAME.to_string(),
            sources: vec![Path::new("src").join("cython").join("vapoursynth.pyx")],
            define_macros: vec![
                MacroDefine::flag("VS_USE_LATEST_API"),
                MacroDefine::flag("VS_GRAPH_API"),
            ],
            libraries: vec!["vapoursynth".to_string()],
            library_dirs: vec![library_dir],
            include_dirs: vec![
                root.to_path_buf(),
                Path::new("src").join("cython"),
                Path::new("src").join("vsscript"),
            ],
        };

        module.set_macro(MacroDefine::value(RELEASE_MACRO, version));
        module
    }

    /// Insert a macro, replacing any existing definition with the same name.
    pub fn set_macro(&mut self, define: MacroDefine) {
        self.define_macros.retain(|m| m.name != define.name);
        self.define_macros.push(define);
    }

    /// Look up a macro by name.
    #[must_use]
    pub fn macro_named(&self, name: &str) -> Option<&MacroDefine> {
        self.define_macros.iter().find(|m| m.name == name)
    }
}
