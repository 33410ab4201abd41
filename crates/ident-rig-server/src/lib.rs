// crates/ident-rig-server/src/lib.rs
// ============================================================================
// Module: ident-rig Server
// Description: Fake student-records service over JSON-RPC with Basic auth.
// Purpose: Serve the record operations so the client can be tested offline.
// Dependencies: base64, ident-rig-core, serde, serde_json, thiserror, tiny_http, toml
// ============================================================================

//! ## Overview
//! This crate exposes the fake record service over the wire: an HTTP Basic
//! authentication gate accepting a single hardcoded credential pair, JSON-RPC
//! 2.0 envelopes on a single well-known path, and a deliberately
//! single-threaded serving loop that processes one request to completion
//! before accepting the next. Operation semantics live in `ident-rig-core`;
//! this crate only translates between the wire and typed results.
//! Invariants:
//! - Authentication is checked before any body parsing or dispatch.
//! - Validation faults map to the protocol's invalid-params error with the
//!   legacy message text preserved verbatim.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod config;
pub mod rpc;
pub mod server;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use auth::AuthRejection;
pub use auth::MANAGER_PASSWORD;
pub use auth::MANAGER_USERNAME;
pub use auth::authorize;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::DEFAULT_PORT;
pub use config::RigConfig;
pub use config::default_bind;
pub use rpc::RpcError;
pub use rpc::RpcRequest;
pub use rpc::RpcResponse;
pub use server::METHOD_NAMES;
pub use server::RPC_PATH;
pub use server::RecordServer;
pub use server::ServeError;
