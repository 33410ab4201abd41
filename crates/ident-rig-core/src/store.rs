// crates/ident-rig-core/src/store.rs
// ============================================================================
// Module: Record Store
// Description: In-memory mapping standing in for the student-records backend.
// Purpose: Hold per-student fingerprint slots for the lifetime of a service.
// Dependencies: ident-rig-core types
// ============================================================================

//! ## Overview
//! The record store maps student identifiers to their per-slot fingerprint
//! payloads. It is an owned value with no interior mutability and no locking:
//! the serving loop processes one request at a time, so requests never
//! overlap. Tests that need isolation simply construct their own store.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::types::FingerSlot;
use crate::types::FingerprintImage;
use crate::types::StudentId;

// ============================================================================
// SECTION: Record Store
// ============================================================================

/// In-memory student record store.
///
/// # Invariants
/// - Every stored payload passed the magic check at construction.
/// - Creation is idempotent; creating an existing student keeps its slots.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Fingerprint slots keyed by student identifier.
    records: BTreeMap<StudentId, BTreeMap<FingerSlot, FingerprintImage>>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Removes every record from the store.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Inserts an empty record for the student if absent.
    pub fn create(&mut self, student_id: StudentId) {
        self.records.entry(student_id).or_default();
    }

    /// Returns true when the student has a record.
    #[must_use]
    pub fn contains(&self, student_id: &StudentId) -> bool {
        self.records.contains_key(student_id)
    }

    /// Stores a fingerprint payload under the student's slot, replacing any
    /// previous payload for that slot. Missing students are created first so
    /// the store never holds orphaned slots.
    pub fn put_fingerprint(
        &mut self,
        student_id: StudentId,
        slot: FingerSlot,
        image: FingerprintImage,
    ) {
        self.records.entry(student_id).or_default().insert(slot, image);
    }

    /// Returns the number of student records.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of fingerprints stored for a student, or `None`
    /// when the student has no record.
    #[must_use]
    pub fn fingerprint_count(&self, student_id: &StudentId) -> Option<usize> {
        self.records.get(student_id).map(BTreeMap::len)
    }

    /// Returns the stored payload for a student's slot, if any.
    #[must_use]
    pub fn fingerprint(
        &self,
        student_id: &StudentId,
        slot: FingerSlot,
    ) -> Option<&FingerprintImage> {
        self.records.get(student_id).and_then(|slots| slots.get(&slot))
    }
}
