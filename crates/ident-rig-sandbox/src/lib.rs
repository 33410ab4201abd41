// crates/ident-rig-sandbox/src/lib.rs
// ============================================================================
// Module: ident-rig Sandbox
// Description: Process-environment sandboxing and executable stub generation.
// Purpose: Let tests fake an external fingerprint scanner without touching
//          real system state.
// Dependencies: tempfile, thiserror
// ============================================================================

//! ## Overview
//! This crate isolates tests from the real process environment: a scoped
//! guard redirects `HOME` and the executable search path to fresh temporary
//! directories and restores the previous values on every exit path, and stub
//! helpers generate small executables (notably a fake `fpscan`) that print a
//! fixed line and exit with a chosen status.
//! Invariants:
//! - Environment mutation is serialized behind a process-wide lock.
//! - Teardown is defensive: resources already removed by the test body are
//!   not an error.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod home;
pub mod stub;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use home::HOME_VAR;
pub use home::PATH_VAR;
pub use home::SandboxError;
pub use home::VirtualHome;
pub use stub::StubError;
pub use stub::create_executable;
pub use stub::create_fpscan;
pub use stub::create_shell_script;
