// crates/ident-rig-sandbox/src/home.rs
// ============================================================================
// Module: Virtual Home Guard
// Description: Scoped redirection of HOME and PATH into temp directories.
// Purpose: Guarantee environment restoration on every exit path.
// Dependencies: tempfile, thiserror
// ============================================================================

//! ## Overview
//! [`VirtualHome`] captures the current `PATH` and `HOME` values, points both
//! variables at fresh temporary directories, and restores the captured state
//! when dropped, including the panic path. Acquisition takes a process-wide
//! lock: environment variables are shared per-process, so two live sandboxes
//! would corrupt each other's snapshots.

#![allow(unsafe_code, reason = "Sandbox mutates process env behind a process-wide lock.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use tempfile::TempDir;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Executable search path variable redirected by the sandbox.
pub const PATH_VAR: &str = "PATH";

/// Home directory variable redirected by the sandbox.
pub const HOME_VAR: &str = "HOME";

/// Serializes sandbox lifetimes across threads. A sandbox dropped during a
/// panic leaves the lock poisoned; the next acquisition recovers it because
/// the environment was still restored by the drop.
static ENV_LOCK: Mutex<()> = Mutex::new(());

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Sandbox acquisition errors.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// A temporary directory could not be created.
    #[error("failed to create sandbox directory: {0}")]
    CreateDir(#[source] std::io::Error),
}

// ============================================================================
// SECTION: Virtual Home Guard
// ============================================================================

/// Scoped virtual `HOME`/`PATH` redirection.
///
/// # Invariants
/// - At most one guard is live per process at a time (later acquisitions
///   block until the current guard drops).
/// - Dropping restores both variables to their captured values, or removes
///   them if they were previously unset.
pub struct VirtualHome {
    /// Temporary directory substituted into `PATH`.
    path_dir: TempDir,
    /// Temporary directory substituted into `HOME`.
    home_dir: TempDir,
    /// Captured previous `PATH` value (`None` when it was unset).
    saved_path: Option<OsString>,
    /// Captured previous `HOME` value (`None` when it was unset).
    saved_home: Option<OsString>,
    /// Exclusive claim on process-wide environment mutation.
    _env_claim: MutexGuard<'static, ()>,
}

impl VirtualHome {
    /// Acquires the sandbox: creates both directories, snapshots the current
    /// variable values, and redirects `PATH` and `HOME`.
    ///
    /// Blocks until any other live sandbox in the process is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError`] when a temporary directory cannot be created;
    /// the environment is left untouched in that case.
    pub fn acquire() -> Result<Self, SandboxError> {
        let claim = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let path_dir = tempfile::tempdir().map_err(SandboxError::CreateDir)?;
        let home_dir = tempfile::tempdir().map_err(SandboxError::CreateDir)?;
        let saved_path = env::var_os(PATH_VAR);
        let saved_home = env::var_os(HOME_VAR);
        set_var(PATH_VAR, path_dir.path().as_os_str());
        set_var(HOME_VAR, home_dir.path().as_os_str());
        Ok(Self {
            path_dir,
            home_dir,
            saved_path,
            saved_home,
            _env_claim: claim,
        })
    }

    /// Directory currently substituted into `PATH`. Install fake executables
    /// here.
    #[must_use]
    pub fn path_dir(&self) -> &Path {
        self.path_dir.path()
    }

    /// Directory currently substituted into `HOME`.
    #[must_use]
    pub fn home_dir(&self) -> &Path {
        self.home_dir.path()
    }
}

impl Drop for VirtualHome {
    fn drop(&mut self) {
        restore_var(PATH_VAR, self.saved_path.take());
        restore_var(HOME_VAR, self.saved_home.take());
        // The TempDir fields remove both directories afterwards; directories
        // already deleted by the test body are not an error.
    }
}

// ============================================================================
// SECTION: Environment Helpers
// ============================================================================

/// Sets an environment variable for the current process.
fn set_var(key: &str, value: &OsStr) {
    // SAFETY: Sandbox env mutation is serialized behind ENV_LOCK and intended
    // for single-threaded test harness use.
    unsafe {
        env::set_var(key, value);
    }
}

/// Removes an environment variable from the current process.
fn remove_var(key: &str) {
    // SAFETY: Sandbox env mutation is serialized behind ENV_LOCK and intended
    // for single-threaded test harness use.
    unsafe {
        env::remove_var(key);
    }
}

/// Restores a variable to its captured previous state.
fn restore_var(key: &str, previous: Option<OsString>) {
    match previous {
        Some(value) => set_var(key, &value),
        None => remove_var(key),
    }
}
