//! Delegation to the external packaging tool.
//!
//! The assembler only produces a descriptor; everything with a command
//! surface (build, install, package) lives in the packaging tool. This
//! module finds that tool, hands it the serialized descriptor through a
//! scratch file, and passes the command line through untouched.

use crate::metadata::PackageMetadata;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

/// Environment variable naming the packaging tool executable.
pub const PACKAGER_ENV: &str = "VSPKG_PACKAGER";

/// Default packaging tool executable name, looked up on PATH.
pub const PACKAGER_BIN: &str = "vspkg-packager";

/// Result of one packaging tool invocation
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Whether the tool exited successfully
    pub success: bool,

    /// Invocation duration
    pub duration: Duration,

    /// Tool output (stdout + stderr)
    pub output: String,
}

/// Handle to the external packaging tool
///
/// Locates the tool once, then forwards descriptor plus command words
/// per invocation without interpreting them.
#[derive(Debug)]
pub struct PackagingTool {
    /// Path to the packaging tool executable
    tool_path: PathBuf,
    /// Enable verbose output
    verbose: bool,
}

impl PackagingTool {
    /// Create a handle to the packaging tool.
    ///
    /// Priority order:
    /// 1. `VSPKG_PACKAGER` environment variable
    /// 2. `vspkg-packager` in PATH
    /// 3. Error if not found
    ///
    /// # Errors
    ///
    /// Returns an error if the packaging tool cannot be found.
    pub fn new(verbose: bool) -> Result<Self> {
        let tool_path = Self::find_packager().context(
            "Packaging tool not found. Set VSPKG_PACKAGER or install vspkg-packager.",
        )?;

        Ok(Self { tool_path, verbose })
    }

    /// Create a handle to a packaging tool at a known location.
    #[must_use]
    pub const fn with_tool_path(tool_path: PathBuf, verbose: bool) -> Self {
        Self { tool_path, verbose }
    }

    /// Find the packaging tool executable on the system
    fn find_packager() -> Result<PathBuf> {
        // Check VSPKG_PACKAGER environment variable
        if let Ok(packager) = std::env::var(PACKAGER_ENV) {
            let path = PathBuf::from(packager);
            if path.exists() {
                return Ok(path);
            }
        }

        // Check for vspkg-packager in PATH
        if let Ok(output) = Command::new("which").arg(PACKAGER_BIN).output()
            && output.status.success()
        {
            let path_str = String::from_utf8_lossy(&output.stdout);
            let path = PathBuf::from(path_str.trim());
            if path.exists() {
                return Ok(path);
            }
        }

        anyhow::bail!("{PACKAGER_BIN} not found in PATH or {PACKAGER_ENV} environment variable")
    }

    /// Hand the descriptor to the packaging tool.
    ///
    /// The command words in `args` are forwarded uninterpreted; the
    /// descriptor is written to a scratch file that lives for the
    /// duration of the invocation and is passed as `--descriptor`.
    pub fn dispatch(
        &self,
        metadata: &PackageMetadata,
        args: &[String],
    ) -> Result<DispatchOutcome> {
        let start_time = Instant::now();

        let mut descriptor =
            NamedTempFile::new().context("Failed to create the descriptor scratch file")?;
        descriptor
            .write_all(metadata.to_json()?.as_bytes())
            .context("Failed to write the descriptor scratch file")?;

        if self.verbose {
            println!(
                "Dispatching to {}: {}",
                self.tool_path.display(),
                args.join(" ")
            );
        }
        crate::debug!("descriptor written to {}", descriptor.path().display());

        let output = Command::new(&self.tool_path)
            .args(args)
            .arg("--descriptor")
            .arg(descriptor.path())
            .output()
            .with_context(|| format!("Failed to run {}", self.tool_path.display()))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(DispatchOutcome {
            success: output.status.success(),
            duration: start_time.elapsed(),
            output: combined,
        })
    }
}
