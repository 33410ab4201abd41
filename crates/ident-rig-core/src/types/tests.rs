// crates/ident-rig-core/src/types/tests.rs
// ============================================================================
// Module: Record Domain Type Tests
// Description: Unit tests for slot parsing and payload format checks.
// Purpose: Validate lenient key parsing and magic-marker enforcement.
// Dependencies: ident-rig-core
// ============================================================================

//! ## Overview
//! Validates the lenient finger-slot key parser (non-numeric keys collapse to
//! slot 0 and are rejected like any out-of-range slot) and the fingerprint
//! payload magic check.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::FingerSlot;
use super::FingerprintImage;
use super::MAX_FINGER_SLOT;
use super::MIN_FINGER_SLOT;
use super::StudentId;

// ============================================================================
// SECTION: Finger Slot Tests
// ============================================================================

#[test]
fn slot_accepts_full_valid_range() {
    for raw in MIN_FINGER_SLOT ..= MAX_FINGER_SLOT {
        let slot = FingerSlot::from_raw(raw).expect("slot in range");
        assert_eq!(slot.get(), raw);
    }
}

#[test]
fn slot_rejects_zero_and_eleven() {
    assert!(FingerSlot::from_raw(0).is_none());
    assert!(FingerSlot::from_raw(11).is_none());
}

#[test]
fn slot_key_parses_numeric_strings() {
    assert_eq!(FingerSlot::from_key("1").map(FingerSlot::get), Some(1));
    assert_eq!(FingerSlot::from_key("10").map(FingerSlot::get), Some(10));
}

#[test]
fn slot_key_accepts_surrounding_whitespace_and_sign() {
    assert_eq!(FingerSlot::from_key(" 5 ").map(FingerSlot::get), Some(5));
    assert_eq!(FingerSlot::from_key("+7").map(FingerSlot::get), Some(7));
}

#[test]
fn slot_key_skips_out_of_range_values() {
    assert!(FingerSlot::from_key("0").is_none());
    assert!(FingerSlot::from_key("11").is_none());
    assert!(FingerSlot::from_key("-3").is_none());
}

#[test]
fn slot_key_treats_non_numeric_as_slot_zero() {
    assert!(FingerSlot::from_key("thumb").is_none());
    assert!(FingerSlot::from_key("").is_none());
    assert!(FingerSlot::from_key("1.5").is_none());
}

// ============================================================================
// SECTION: Fingerprint Image Tests
// ============================================================================

#[test]
fn image_accepts_magic_prefix() {
    let image = FingerprintImage::parse(b"FP1scan-data".to_vec()).expect("valid payload");
    assert_eq!(image.as_bytes(), b"FP1scan-data");
}

#[test]
fn image_accepts_bare_magic() {
    assert!(FingerprintImage::parse(b"FP1".to_vec()).is_some());
}

#[test]
fn image_rejects_missing_magic() {
    assert!(FingerprintImage::parse(b"BAD".to_vec()).is_none());
    assert!(FingerprintImage::parse(b"fp1lowercase".to_vec()).is_none());
    assert!(FingerprintImage::parse(Vec::new()).is_none());
}

// ============================================================================
// SECTION: Student Identifier Tests
// ============================================================================

#[test]
fn student_id_round_trips_through_json() {
    let id = StudentId::new("K1000000");
    let encoded = serde_json::to_string(&id).expect("serialize id");
    assert_eq!(encoded, "\"K1000000\"");
    let decoded: StudentId = serde_json::from_str(&encoded).expect("deserialize id");
    assert_eq!(decoded, id);
    assert_eq!(decoded.as_str(), "K1000000");
}
