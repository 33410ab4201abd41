// crates/ident-rig-server/src/rpc.rs
// ============================================================================
// Module: JSON-RPC Wire Types
// Description: Request, response, and error envelopes for the record service.
// Purpose: Provide stable wire forms with the standard JSON-RPC error codes.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Minimal JSON-RPC 2.0 envelopes: a request with positional params, a
//! response carrying either a result or an error, and the standard error
//! codes the fake service emits. Validation faults from the record service
//! surface as invalid-params errors so callers receive them as exceptional
//! results rather than plain return values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Protocol version string carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard code for unparseable request bodies.
pub const PARSE_ERROR: i64 = -32700;

/// Standard code for structurally invalid request envelopes.
pub const INVALID_REQUEST: i64 = -32600;

/// Standard code for unknown method names.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Standard code for invalid method parameters.
pub const INVALID_PARAMS: i64 = -32602;

// ============================================================================
// SECTION: Request Envelope
// ============================================================================

/// Incoming JSON-RPC request.
///
/// # Invariants
/// - `params`, when present, is expected to be a positional array; the
///   dispatcher rejects other shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// Protocol version; must equal [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Request identifier echoed back in the response.
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name to dispatch.
    pub method: String,
    /// Positional parameters.
    #[serde(default)]
    pub params: Option<Value>,
}

// ============================================================================
// SECTION: Error Envelope
// ============================================================================

/// JSON-RPC error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    /// Standard JSON-RPC error code.
    pub code: i64,
    /// Human-readable message identifying the exact violation.
    pub message: String,
}

impl RpcError {
    /// Builds an invalid-params error with the given message.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: message.into(),
        }
    }

    /// Builds a method-not-found error naming the unknown method.
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
        }
    }

    /// Builds a parse error for unreadable request bodies.
    #[must_use]
    pub fn parse_error() -> Self {
        Self {
            code: PARSE_ERROR,
            message: "Parse error".to_string(),
        }
    }

    /// Builds an invalid-request error with the given message.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_REQUEST,
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Response Envelope
// ============================================================================

/// Outgoing JSON-RPC response.
///
/// # Invariants
/// - Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version; always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Identifier of the request being answered (`null` when unknown).
    pub id: Value,
    /// Successful result, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error, if the call failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    /// Builds a success response.
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Builds a failure response.
    #[must_use]
    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests;
