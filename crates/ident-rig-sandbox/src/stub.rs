// crates/ident-rig-sandbox/src/stub.rs
// ============================================================================
// Module: Executable Stub Generator
// Description: Generates small executables used to impersonate external tools.
// Purpose: Produce a fake fpscan that prints a fixed line and exits.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Stubs are plain `#!/bin/sh` scripts written to disk and marked executable
//! by adding the owner-execute bit to whatever permission bits already exist.
//! The specialized [`create_fpscan`] helper writes a stub named `fpscan` into
//! a directory expected to be on the (sandboxed) search path, so the
//! identification client under test finds it instead of a real scanner.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Name of the external fingerprint-scanning executable.
const FPSCAN_NAME: &str = "fpscan";

/// Owner-execute permission bit.
#[cfg(unix)]
const OWNER_EXECUTE: u32 = 0o100;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Stub generation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StubError {
    /// The stub file could not be written.
    #[error("failed to write stub '{path}': {source}")]
    Write {
        /// Stub path that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The stub could not be marked executable.
    #[error("failed to mark stub '{path}' executable: {source}")]
    Permissions {
        /// Stub path that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// SECTION: Stub Generators
// ============================================================================

/// Writes `content` to `path` and marks the file executable, keeping any
/// permission bits the file already had.
///
/// # Errors
///
/// Returns [`StubError`] when writing or chmodding fails.
pub fn create_executable(path: &Path, content: &str) -> Result<(), StubError> {
    fs::write(path, content).map_err(|source| StubError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    make_executable(path).map_err(|source| StubError::Permissions {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes an executable `#!/bin/sh` script that runs `commands` and then
/// terminates with `exit_status`.
///
/// # Errors
///
/// Returns [`StubError`] when the stub cannot be created.
pub fn create_shell_script(path: &Path, commands: &str, exit_status: i32) -> Result<(), StubError> {
    let content = format!("#!/bin/sh\n{commands}\nexit {exit_status}\n");
    create_executable(path, &content)
}

/// Writes a fake `fpscan` executable into `path_dir`.
///
/// The stub prints exactly one line (`output`) and exits with `exit_status`;
/// `path_dir` should be a directory on the current search path, typically the
/// sandbox's [`crate::VirtualHome::path_dir`]. Returns the stub path.
///
/// # Errors
///
/// Returns [`StubError`] when the stub cannot be created.
pub fn create_fpscan(path_dir: &Path, output: &str, exit_status: i32) -> Result<PathBuf, StubError> {
    let path = path_dir.join(FPSCAN_NAME);
    create_shell_script(&path, &format!("echo \"{output}\""), exit_status)?;
    Ok(path)
}

// ============================================================================
// SECTION: Permission Helpers
// ============================================================================

/// Adds the owner-execute bit to the file's existing permissions.
#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | OWNER_EXECUTE);
    fs::set_permissions(path, permissions)
}

/// Non-Unix targets have no execute bit to set.
#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
