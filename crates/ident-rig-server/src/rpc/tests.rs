// crates/ident-rig-server/src/rpc/tests.rs
// ============================================================================
// Module: JSON-RPC Wire Type Tests
// Description: Unit tests for envelope serialization shapes.
// Purpose: Validate wire forms stay stable for the identification client.
// Dependencies: ident-rig-server, serde_json
// ============================================================================

//! ## Overview
//! Validates the exact JSON shapes of request parsing and response
//! serialization, including the absent-field behavior of success and failure
//! envelopes.

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

use serde_json::Value;
use serde_json::json;

use super::INVALID_PARAMS;
use super::INVALID_REQUEST;
use super::METHOD_NOT_FOUND;
use super::PARSE_ERROR;
use super::RpcError;
use super::RpcRequest;
use super::RpcResponse;

// ============================================================================
// SECTION: Request Parsing Tests
// ============================================================================

#[test]
fn request_parses_positional_params() {
    let raw = r#"{"jsonrpc":"2.0","id":7,"method":"ping","params":["hello"]}"#;
    let request: RpcRequest = serde_json::from_str(raw).expect("parse request");
    assert_eq!(request.jsonrpc, "2.0");
    assert_eq!(request.id, Some(json!(7)));
    assert_eq!(request.method, "ping");
    assert_eq!(request.params, Some(json!(["hello"])));
}

#[test]
fn request_allows_missing_id_and_params() {
    let raw = r#"{"jsonrpc":"2.0","method":"reset_student_db"}"#;
    let request: RpcRequest = serde_json::from_str(raw).expect("parse request");
    assert_eq!(request.id, None);
    assert_eq!(request.params, None);
}

#[test]
fn request_without_method_fails_to_parse() {
    let raw = r#"{"jsonrpc":"2.0","id":1}"#;
    assert!(serde_json::from_str::<RpcRequest>(raw).is_err());
}

// ============================================================================
// SECTION: Response Serialization Tests
// ============================================================================

#[test]
fn success_response_omits_error_field() {
    let response = RpcResponse::success(json!(1), json!(["pong", 42]));
    let encoded = serde_json::to_value(&response).expect("serialize response");
    assert_eq!(encoded, json!({"jsonrpc": "2.0", "id": 1, "result": ["pong", 42]}));
}

#[test]
fn failure_response_omits_result_field() {
    let response =
        RpcResponse::failure(json!(2), RpcError::invalid_params("No such student: 'X'"));
    let encoded = serde_json::to_value(&response).expect("serialize response");
    assert_eq!(
        encoded,
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": {"code": INVALID_PARAMS, "message": "No such student: 'X'"},
        })
    );
}

#[test]
fn error_constructors_use_standard_codes() {
    assert_eq!(RpcError::method_not_found("frobnicate").code, METHOD_NOT_FOUND);
    assert_eq!(RpcError::parse_error().code, PARSE_ERROR);
    assert_eq!(RpcError::invalid_request("bad envelope").code, INVALID_REQUEST);
}

#[test]
fn failure_response_round_trips() {
    let response = RpcResponse::failure(Value::Null, RpcError::parse_error());
    let encoded = serde_json::to_string(&response).expect("serialize response");
    let decoded: RpcResponse = serde_json::from_str(&encoded).expect("deserialize response");
    assert_eq!(decoded.error, Some(RpcError::parse_error()));
    assert_eq!(decoded.result, None);
}
