// crates/ident-rig-server/src/auth.rs
// ============================================================================
// Module: Basic Authentication Gate
// Description: HTTP Basic credential check applied before dispatch.
// Purpose: Accept exactly one hardcoded credential pair, reject all else.
// Dependencies: base64
// ============================================================================

//! ## Overview
//! Every incoming request carries an `Authorization` header that must decode
//! to the single manager credential pair before any operation is dispatched.
//! Rejections are typed so tests can assert the exact failure mode; the
//! transport collapses every rejection into one unauthorized response.

// ============================================================================
// SECTION: Imports
// ============================================================================

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Username accepted by the fake service.
pub const MANAGER_USERNAME: &str = "mgr";

/// Password accepted by the fake service.
pub const MANAGER_PASSWORD: &str = "mgrpw";

/// Authentication scheme accepted by the fake service.
const BASIC_SCHEME: &str = "Basic";

// ============================================================================
// SECTION: Rejection Reasons
// ============================================================================

/// Reasons an `Authorization` header is rejected.
///
/// # Invariants
/// - Variants are stable for programmatic handling in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization` header was sent.
    MissingHeader,
    /// The header does not use the `Basic` scheme.
    UnsupportedScheme,
    /// The credential payload is not valid base64 or not UTF-8.
    UndecodableCredentials,
    /// The decoded payload has no `:` separator.
    MalformedCredentials,
    /// The pair decoded cleanly but is not the manager pair.
    WrongCredentials,
}

// ============================================================================
// SECTION: Authorization Check
// ============================================================================

/// Checks an `Authorization` header value against the manager credentials.
///
/// The payload is split on the first `:` only, so passwords containing colons
/// compare as expected.
///
/// # Errors
///
/// Returns [`AuthRejection`] describing the first check that failed.
pub fn authorize(header: Option<&str>) -> Result<(), AuthRejection> {
    let Some(line) = header else {
        return Err(AuthRejection::MissingHeader);
    };
    let Some((scheme, encoded)) = line.split_once(' ') else {
        return Err(AuthRejection::UnsupportedScheme);
    };
    if scheme != BASIC_SCHEME {
        return Err(AuthRejection::UnsupportedScheme);
    }
    let Ok(decoded) = BASE64.decode(encoded.trim()) else {
        return Err(AuthRejection::UndecodableCredentials);
    };
    let Ok(credentials) = String::from_utf8(decoded) else {
        return Err(AuthRejection::UndecodableCredentials);
    };
    let Some((username, password)) = credentials.split_once(':') else {
        return Err(AuthRejection::MalformedCredentials);
    };
    if username == MANAGER_USERNAME && password == MANAGER_PASSWORD {
        Ok(())
    } else {
        Err(AuthRejection::WrongCredentials)
    }
}
