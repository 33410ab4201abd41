// crates/ident-rig-server/src/server.rs
// ============================================================================
// Module: Record Server
// Description: Single-threaded HTTP serving loop and method dispatch.
// Purpose: Gate requests behind Basic auth and route them to the service.
// Dependencies: ident-rig-core, serde_json, thiserror, tiny_http
// ============================================================================

//! ## Overview
//! The record server accepts one request at a time on the calling thread and
//! processes it to completion before receiving the next; the record store
//! therefore needs no locking. Request handling is layered: authentication
//! first, then path and HTTP-method checks, then JSON-RPC envelope parsing,
//! then dispatch by method name. Validation faults from the record service
//! become invalid-params errors; transport-level failures (client hangups)
//! are swallowed so the loop runs until the process is terminated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Cursor;
use std::io::Read;
use std::net::SocketAddr;

use ident_rig_core::RecordService;
use ident_rig_core::StudentId;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use tiny_http::Header;
use tiny_http::Method;
use tiny_http::Request;
use tiny_http::Response;
use tiny_http::Server;

use crate::auth::authorize;
use crate::rpc::JSONRPC_VERSION;
use crate::rpc::RpcError;
use crate::rpc::RpcRequest;
use crate::rpc::RpcResponse;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Single well-known path the service answers on.
pub const RPC_PATH: &str = "/rpc";

/// Names of every registered method, sorted, as reported by `list_methods`.
pub const METHOD_NAMES: &[&str] =
    &["create_student", "list_methods", "ping", "put_student_fingerprints", "reset_student_db"];

/// Maximum accepted request body size in bytes.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Challenge sent alongside unauthorized responses.
const AUTH_CHALLENGE: &str = "Basic realm=\"ident-rig\"";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Serving loop errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listening socket could not be bound.
    #[error("failed to bind record server: {0}")]
    Bind(String),
    /// The listener failed while accepting a request.
    #[error("failed to accept request: {0}")]
    Accept(#[source] std::io::Error),
}

// ============================================================================
// SECTION: Record Server
// ============================================================================

/// Fake record service bound to a listening socket.
///
/// # Invariants
/// - Requests are processed strictly one at a time on the calling thread.
/// - The owned [`RecordService`] is the only state mutated by requests.
pub struct RecordServer {
    /// Blocking HTTP listener.
    server: Server,
    /// Record operations backing the wire methods.
    service: RecordService,
}

impl RecordServer {
    /// Binds the service to the given address.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Bind`] when the socket cannot be bound.
    pub fn bind(addr: SocketAddr) -> Result<Self, ServeError> {
        let server = Server::http(addr).map_err(|err| ServeError::Bind(err.to_string()))?;
        Ok(Self {
            server,
            service: RecordService::new(),
        })
    }

    /// Returns the bound socket address (useful after binding port 0).
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serves requests until the process is terminated externally.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError`] when the listener fails; individual client
    /// failures do not stop the loop.
    pub fn serve_forever(mut self) -> Result<(), ServeError> {
        loop {
            self.handle_next()?;
        }
    }

    /// Receives and handles exactly one request.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Accept`] when the listener fails.
    pub fn handle_next(&mut self) -> Result<(), ServeError> {
        let request = self.server.recv().map_err(ServeError::Accept)?;
        self.handle(request);
        Ok(())
    }

    /// Handles a single request: auth gate, transport checks, dispatch.
    fn handle(&mut self, mut request: Request) {
        let auth_header = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("Authorization"))
            .map(|header| header.value.as_str().to_string());
        if authorize(auth_header.as_deref()).is_err() {
            let _ = request.respond(unauthorized_response());
            return;
        }
        if request.url() != RPC_PATH {
            let _ = request.respond(plain_response(404, "Not Found"));
            return;
        }
        if *request.method() != Method::Post {
            let _ = request.respond(plain_response(405, "Method Not Allowed"));
            return;
        }

        let mut body = String::new();
        if request.as_reader().take(MAX_BODY_BYTES).read_to_string(&mut body).is_err() {
            let response = RpcResponse::failure(Value::Null, RpcError::parse_error());
            respond_json(request, &response);
            return;
        }
        let response = route(&mut self.service, &body);
        respond_json(request, &response);
    }
}

// ============================================================================
// SECTION: Routing
// ============================================================================

/// Parses a request body and dispatches it, producing the response envelope.
fn route(service: &mut RecordService, body: &str) -> RpcResponse {
    let Ok(raw) = serde_json::from_str::<Value>(body) else {
        return RpcResponse::failure(Value::Null, RpcError::parse_error());
    };
    let request: RpcRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(err) => {
            return RpcResponse::failure(Value::Null, RpcError::invalid_request(err.to_string()));
        }
    };
    let id = request.id.clone().unwrap_or(Value::Null);
    if request.jsonrpc != JSONRPC_VERSION {
        return RpcResponse::failure(
            id,
            RpcError::invalid_request("unsupported protocol version"),
        );
    }
    match dispatch(service, &request) {
        Ok(result) => RpcResponse::success(id, result),
        Err(error) => RpcResponse::failure(id, error),
    }
}

/// Dispatches a parsed request to the record service by method name.
fn dispatch(service: &mut RecordService, request: &RpcRequest) -> Result<Value, RpcError> {
    let params = positional_params(request.params.as_ref())?;
    match request.method.as_str() {
        "ping" => match params {
            [value] => Ok(RecordService::ping(value.clone())),
            _ => Err(RpcError::invalid_params("ping expects exactly one argument")),
        },
        "reset_student_db" => match params {
            [] => Ok(Value::Bool(service.reset())),
            _ => Err(RpcError::invalid_params("reset_student_db expects no arguments")),
        },
        "create_student" => match params {
            [Value::String(student_id)] => {
                Ok(Value::Bool(service.create_student(StudentId::new(student_id))))
            }
            _ => {
                Err(RpcError::invalid_params("create_student expects a string student identifier"))
            }
        },
        "put_student_fingerprints" => match params {
            [identifier, fingerprints] => {
                // A non-string identifier can never name an existing record,
                // so it surfaces as the missing-student fault.
                let Value::String(student_id) = identifier else {
                    return Err(RpcError::invalid_params(format!(
                        "No such student: '{identifier}'"
                    )));
                };
                service
                    .put_fingerprints(&StudentId::new(student_id), fingerprints)
                    .map(Value::Bool)
                    .map_err(|err| RpcError::invalid_params(err.to_string()))
            }
            _ => Err(RpcError::invalid_params(
                "put_student_fingerprints expects an identifier and a fingerprint mapping",
            )),
        },
        "list_methods" => match params {
            [] => Ok(json!(METHOD_NAMES)),
            _ => Err(RpcError::invalid_params("list_methods expects no arguments")),
        },
        other => Err(RpcError::method_not_found(other)),
    }
}

/// Normalizes the params field into a positional slice.
fn positional_params(params: Option<&Value>) -> Result<&[Value], RpcError> {
    match params {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(values)) => Ok(values),
        Some(_) => Err(RpcError::invalid_params("params must be a positional array")),
    }
}

// ============================================================================
// SECTION: Response Helpers
// ============================================================================

/// Builds a plain-text response with the given status code.
fn plain_response(status: u16, body: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(body).with_status_code(status)
}

/// Builds the 401 response carrying the Basic challenge.
fn unauthorized_response() -> Response<Cursor<Vec<u8>>> {
    let mut response = plain_response(401, "Unauthorized");
    if let Some(challenge) = header("WWW-Authenticate", AUTH_CHALLENGE) {
        response.add_header(challenge);
    }
    response
}

/// Serializes and sends a JSON-RPC response; client failures are swallowed.
fn respond_json(request: Request, response: &RpcResponse) {
    match serde_json::to_string(response) {
        Ok(body) => {
            let mut http_response = Response::from_string(body);
            if let Some(content_type) = header("Content-Type", "application/json") {
                http_response.add_header(content_type);
            }
            let _ = request.respond(http_response);
        }
        Err(_) => {
            let _ = request.respond(plain_response(500, "Internal Server Error"));
        }
    }
}

/// Builds a header, returning `None` on invalid bytes.
fn header(field: &str, value: &str) -> Option<Header> {
    Header::from_bytes(field.as_bytes(), value.as_bytes()).ok()
}

#[cfg(test)]
mod tests;
