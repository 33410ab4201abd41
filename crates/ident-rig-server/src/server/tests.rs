// crates/ident-rig-server/src/server/tests.rs
// ============================================================================
// Module: Dispatch Tests
// Description: Unit tests for envelope routing and method dispatch.
// Purpose: Validate routing without sockets; transport is tested end to end.
// Dependencies: ident-rig-server, serde_json
// ============================================================================

//! ## Overview
//! Drives `route` directly with raw request bodies, covering envelope
//! failures (parse error, invalid request, unknown method), param-shape
//! rejections, and the fault mapping for fingerprint submissions. Socket
//! behavior (auth gate, paths, HTTP methods) lives in `tests/server.rs`.

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

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use ident_rig_core::RecordService;
use serde_json::Value;
use serde_json::json;

use super::METHOD_NAMES;
use super::route;
use crate::rpc::INVALID_PARAMS;
use crate::rpc::INVALID_REQUEST;
use crate::rpc::METHOD_NOT_FOUND;
use crate::rpc::PARSE_ERROR;
use crate::rpc::RpcResponse;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Routes a JSON value as a request body.
fn call(service: &mut RecordService, body: &Value) -> RpcResponse {
    route(service, &body.to_string())
}

/// Builds a request envelope with positional params.
fn envelope(method: &str, params: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params})
}

/// Extracts the error code and message from a failure response.
fn error_of(response: &RpcResponse) -> (i64, &str) {
    let error = response.error.as_ref().expect("failure response");
    (error.code, error.message.as_str())
}

// ============================================================================
// SECTION: Envelope Tests
// ============================================================================

#[test]
fn non_json_body_is_a_parse_error() {
    let mut service = RecordService::new();
    let response = route(&mut service, "this is not json");
    assert_eq!(error_of(&response).0, PARSE_ERROR);
    assert_eq!(response.id, Value::Null);
}

#[test]
fn envelope_without_method_is_invalid_request() {
    let mut service = RecordService::new();
    let response = call(&mut service, &json!({"jsonrpc": "2.0", "id": 1}));
    assert_eq!(error_of(&response).0, INVALID_REQUEST);
}

#[test]
fn wrong_protocol_version_is_invalid_request() {
    let mut service = RecordService::new();
    let response =
        call(&mut service, &json!({"jsonrpc": "1.0", "id": 1, "method": "ping", "params": [1]}));
    assert_eq!(error_of(&response).0, INVALID_REQUEST);
}

#[test]
fn unknown_method_is_method_not_found() {
    let mut service = RecordService::new();
    let response = call(&mut service, &envelope("frobnicate", json!([])));
    let (code, message) = error_of(&response);
    assert_eq!(code, METHOD_NOT_FOUND);
    assert_eq!(message, "Method not found: frobnicate");
}

#[test]
fn object_params_are_rejected() {
    let mut service = RecordService::new();
    let response = call(&mut service, &envelope("ping", json!({"x": 1})));
    let (code, message) = error_of(&response);
    assert_eq!(code, INVALID_PARAMS);
    assert_eq!(message, "params must be a positional array");
}

#[test]
fn response_echoes_request_id() {
    let mut service = RecordService::new();
    let body = json!({"jsonrpc": "2.0", "id": "req-9", "method": "reset_student_db"});
    let response = call(&mut service, &body);
    assert_eq!(response.id, json!("req-9"));
    assert_eq!(response.result, Some(json!(true)));
}

// ============================================================================
// SECTION: Method Dispatch Tests
// ============================================================================

#[test]
fn ping_wraps_the_argument() {
    let mut service = RecordService::new();
    let response = call(&mut service, &envelope("ping", json!([{"deep": [true]}])));
    assert_eq!(response.result, Some(json!(["pong", {"deep": [true]}])));
}

#[test]
fn ping_requires_exactly_one_argument() {
    let mut service = RecordService::new();
    let response = call(&mut service, &envelope("ping", json!([1, 2])));
    assert_eq!(error_of(&response).0, INVALID_PARAMS);
}

#[test]
fn reset_accepts_missing_params() {
    let mut service = RecordService::new();
    let response = call(&mut service, &json!({"jsonrpc": "2.0", "id": 2, "method": "reset_student_db"}));
    assert_eq!(response.result, Some(json!(true)));
}

#[test]
fn create_student_requires_a_string() {
    let mut service = RecordService::new();
    let response = call(&mut service, &envelope("create_student", json!([42])));
    assert_eq!(error_of(&response).0, INVALID_PARAMS);
}

#[test]
fn submission_faults_carry_legacy_messages() {
    let mut service = RecordService::new();
    let response = call(
        &mut service,
        &envelope("put_student_fingerprints", json!(["ghost", {}])),
    );
    let (code, message) = error_of(&response);
    assert_eq!(code, INVALID_PARAMS);
    assert_eq!(message, "No such student: 'ghost'");
}

#[test]
fn submission_with_non_string_identifier_is_a_missing_student() {
    let mut service = RecordService::new();
    let response = call(&mut service, &envelope("put_student_fingerprints", json!([7, {}])));
    let (code, message) = error_of(&response);
    assert_eq!(code, INVALID_PARAMS);
    assert_eq!(message, "No such student: '7'");
}

#[test]
fn submission_accepts_and_skips_through_dispatch() {
    let mut service = RecordService::new();
    let created = call(&mut service, &envelope("create_student", json!(["S1"])));
    assert_eq!(created.result, Some(json!(true)));
    let payload = BASE64.encode(b"FP1data");
    let submission = envelope(
        "put_student_fingerprints",
        json!(["S1", {"1": payload, "11": payload}]),
    );
    let response = call(&mut service, &submission);
    assert_eq!(response.result, Some(json!(true)));
}

#[test]
fn list_methods_reports_sorted_names() {
    let mut service = RecordService::new();
    let response = call(&mut service, &envelope("list_methods", json!([])));
    assert_eq!(response.result, Some(json!(METHOD_NAMES)));
    let mut sorted = METHOD_NAMES.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, METHOD_NAMES);
}
