// crates/ident-rig-core/src/service.rs
// ============================================================================
// Module: Record Service Operations
// Description: Operations exposed by the fake student-records service.
// Purpose: Validate fingerprint submissions and mutate the record store.
// Dependencies: base64, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This module implements the operation semantics behind the wire methods:
//! echo, store reset, idempotent student creation, and fingerprint
//! submission. Submission validation is two-phase: every entry is checked
//! before anything is committed, so a validation fault leaves the store
//! exactly as it was. Faults are typed [`RecordError`] values; the transport
//! layer maps them onto the protocol's invalid-parameters error with the
//! exact legacy message text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

use crate::store::RecordStore;
use crate::types::FingerSlot;
use crate::types::FingerprintImage;
use crate::types::StudentId;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Validation faults raised by record service operations.
///
/// # Invariants
/// - `Display` strings are wire contract and must not change: clients of the
///   real records backend match on them verbatim (including the stray
///   apostrophe in the mapping-type message).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The submission names a student without a record.
    #[error("No such student: '{0}'")]
    UnknownStudent(String),
    /// The fingerprints argument is not a mapping.
    #[error("Invalid fingerprint data: must be dict'")]
    NotAMapping,
    /// An in-range slot carries a value that is not a binary payload.
    #[error("Invalid fingerprint data for finger {0}")]
    InvalidPayload(FingerSlot),
    /// An in-range slot carries a payload without the magic marker.
    #[error("Invalid file format for finger {0}")]
    InvalidFormat(FingerSlot),
}

// ============================================================================
// SECTION: Record Service
// ============================================================================

/// Fake student-records service backing the wire methods.
///
/// Owns its [`RecordStore`] so independent service instances can run side by
/// side in parallel tests.
#[derive(Debug, Default)]
pub struct RecordService {
    /// Record store mutated by the operations below.
    store: RecordStore,
}

impl RecordService {
    /// Creates a service with an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    /// Returns the backing store for inspection.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Echoes an arbitrary value wrapped in a `pong` tag.
    #[must_use]
    pub fn ping(value: Value) -> Value {
        json!(["pong", value])
    }

    /// Clears the record store entirely. Always returns `true`.
    pub fn reset(&mut self) -> bool {
        self.store.clear();
        true
    }

    /// Inserts an empty record for the student if absent. Always returns
    /// `true`; creating an existing student is a no-op.
    pub fn create_student(&mut self, student_id: StudentId) -> bool {
        self.store.create(student_id);
        true
    }

    /// Validates and stores a fingerprint submission.
    ///
    /// The submission is a JSON object mapping slot-key strings to base64
    /// payload strings. Out-of-range and non-numeric keys are silently
    /// skipped. Returns `true` when at least one slot was accepted, `false`
    /// when the mapping was valid but nothing was in range.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when the student is unknown, the argument is
    /// not a mapping, or an in-range slot fails the payload checks. No store
    /// mutation happens on any error path.
    pub fn put_fingerprints(
        &mut self,
        student_id: &StudentId,
        fingerprints: &Value,
    ) -> Result<bool, RecordError> {
        if !self.store.contains(student_id) {
            return Err(RecordError::UnknownStudent(student_id.to_string()));
        }
        let Value::Object(entries) = fingerprints else {
            return Err(RecordError::NotAMapping);
        };

        let mut accepted = Vec::new();
        for (key, value) in entries {
            let Some(slot) = FingerSlot::from_key(key) else {
                continue;
            };
            let Value::String(encoded) = value else {
                return Err(RecordError::InvalidPayload(slot));
            };
            let Ok(bytes) = BASE64.decode(encoded) else {
                return Err(RecordError::InvalidPayload(slot));
            };
            let Some(image) = FingerprintImage::parse(bytes) else {
                return Err(RecordError::InvalidFormat(slot));
            };
            accepted.push((slot, image));
        }

        let any_accepted = !accepted.is_empty();
        for (slot, image) in accepted {
            self.store.put_fingerprint(student_id.clone(), slot, image);
        }
        Ok(any_accepted)
    }
}
