// crates/ident-rig-core/src/types.rs
// ============================================================================
// Module: Record Domain Types
// Description: Identifiers and payload types for the fake record service.
// Purpose: Enforce slot-range and payload-format invariants at construction.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the typed vocabulary of the record store: opaque
//! student identifiers, bounded finger-slot numbers, and fingerprint payloads
//! carrying a fixed magic marker. Range and format invariants are enforced at
//! construction boundaries so the store never holds an invalid entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Magic marker every fingerprint payload must start with.
pub const FINGERPRINT_MAGIC: &[u8; 3] = b"FP1";

/// Lowest valid finger slot number.
pub const MIN_FINGER_SLOT: u8 = 1;

/// Highest valid finger slot number.
pub const MAX_FINGER_SLOT: u8 = 10;

// ============================================================================
// SECTION: Student Identifier
// ============================================================================

/// Student identifier as issued by the records backend.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Creates a new student identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Finger Slot
// ============================================================================

/// Finger slot number identifying which finger a payload corresponds to.
///
/// # Invariants
/// - Always within `[MIN_FINGER_SLOT, MAX_FINGER_SLOT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FingerSlot(u8);

impl FingerSlot {
    /// Creates a finger slot from a raw number (returns `None` if out of range).
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw >= MIN_FINGER_SLOT && raw <= MAX_FINGER_SLOT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Parses a submission key into a finger slot.
    ///
    /// Keys are parsed leniently: a key that does not parse as an integer is
    /// treated as slot 0, which is out of range like any other rejected key.
    /// Callers skip `None` slots instead of raising an error.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let raw = key.trim().parse::<i64>().unwrap_or(0);
        u8::try_from(raw).ok().and_then(Self::from_raw)
    }

    /// Returns the raw slot number (always within range).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for FingerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Fingerprint Image
// ============================================================================

/// Raw fingerprint scan payload.
///
/// # Invariants
/// - The payload always starts with [`FINGERPRINT_MAGIC`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintImage(Vec<u8>);

impl FingerprintImage {
    /// Wraps a raw payload, checking the magic marker (returns `None` when
    /// the marker is missing).
    #[must_use]
    pub fn parse(bytes: Vec<u8>) -> Option<Self> {
        if bytes.starts_with(FINGERPRINT_MAGIC) {
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the raw payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests;
