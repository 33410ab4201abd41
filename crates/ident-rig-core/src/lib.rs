// crates/ident-rig-core/src/lib.rs
// ============================================================================
// Module: ident-rig Core
// Description: In-memory student record store and fingerprint validation.
// Purpose: Provide the fake record service's domain model, free of transport.
// Dependencies: base64, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate holds the domain model of the fake student-records service used
//! to exercise the biometric identification client in isolation: strongly
//! typed identifiers, the fingerprint payload format, the in-memory record
//! store, and the operations exposed over the wire by `ident-rig-server`.
//! The store is an owned value rather than process-global state, so tests can
//! run multiple independent service instances in parallel.
//! Invariants:
//! - Fingerprint payloads are accepted only when they carry the `FP1` magic.
//! - Validation faults never leave a partially mutated store behind.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod service;
pub mod store;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use service::RecordError;
pub use service::RecordService;
pub use store::RecordStore;
pub use types::FINGERPRINT_MAGIC;
pub use types::FingerSlot;
pub use types::FingerprintImage;
pub use types::StudentId;
