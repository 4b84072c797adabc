//! tiny_http server adapter
//!
//! Handles routing, body parsing, response conversion and the accept loop
//! for tiny_http.

use std::io::Cursor;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use log::{debug, error, info, warn};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use super::ServerError;
use crate::api::{self, ApiError, ValidationResponse};
use crate::config::ServerConfig;

/// Path of the validation endpoint
pub const VALIDATE_PATH: &str = "/validate-password";

/// Value of `Access-Control-Allow-Headers` on every response
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Body sent when the real response cannot be serialized
const FALLBACK_BODY: &str = r#"{"valid":false,"errors":["error processing the request"]}"#;

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Transport-level outcome of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Cross-origin preflight acknowledgement (200, no body)
    Preflight,
    /// JSON body with a status code
    Json {
        /// HTTP status code
        status: u16,
        /// Response body
        body: ValidationResponse,
    },
}

impl Reply {
    fn ok(body: ValidationResponse) -> Self {
        Self::Json { status: 200, body }
    }

    fn error(error: &ApiError) -> Self {
        Self::Json {
            status: error.status_code(),
            body: ValidationResponse::error(error),
        }
    }

    /// HTTP status code of this reply
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Preflight => 200,
            Self::Json { status, .. } => *status,
        }
    }
}

/// Handle a request and return a response
///
/// Always produces exactly one response. A panic during dispatch becomes a
/// 500 with the generic message.
pub fn handle_request(request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let reply = panic::catch_unwind(AssertUnwindSafe(|| dispatch(request))).unwrap_or_else(|_| {
        error!("Panic while handling request");
        Reply::error(&ApiError::internal())
    });
    into_response(&reply)
}

/// Route a request and run the matching handler
///
/// Preflight is answered on any path. Unknown paths get a 404 before the
/// method is checked.
pub fn dispatch(request: &mut Request) -> Reply {
    let method = request.method().clone();
    let path = route_path(request.url()).to_string();
    info!("Request received: {method} {path}");

    if method == Method::Options {
        return Reply::Preflight;
    }

    if path != VALIDATE_PATH {
        return Reply::error(&ApiError::not_found());
    }

    if method != Method::Post {
        return Reply::error(&ApiError::method_not_allowed());
    }

    let body = match read_body(request) {
        Ok(body) => body,
        Err(e) => return Reply::error(&e),
    };

    match api::validate_body(&body) {
        Ok(response) => Reply::ok(response),
        Err(e) => Reply::error(&e),
    }
}

/// Strip the query string and any trailing slash
fn route_path(url: &str) -> &str {
    let path = url.split_once('?').map_or(url, |(path, _)| path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read the request body as UTF-8
///
/// A read failure is unexpected, so it maps to an internal error; the cause
/// only goes to the log.
fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body).map_err(|e| {
        error!("Failed to read request body: {e}");
        ApiError::internal()
    })?;
    debug!("Body received ({} bytes)", body.len());
    Ok(body)
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a reply into a tiny_http response with the shared headers
#[must_use]
pub fn into_response(reply: &Reply) -> Response<Cursor<Vec<u8>>> {
    match reply {
        Reply::Preflight => with_cors(Response::from_data(Vec::new())),
        Reply::Json { status, body } => json_response(body, *status),
    }
}

/// Serialize a body to a JSON response with status code
fn json_response(body: &ValidationResponse, status: u16) -> Response<Cursor<Vec<u8>>> {
    let (json, status) = match serde_json::to_vec(body) {
        Ok(json) => (json, status),
        Err(e) => {
            error!("Failed to serialize response: {e}");
            (FALLBACK_BODY.as_bytes().to_vec(), 500)
        },
    };
    with_cors(Response::from_data(json))
        .with_header(header("Content-Type", "application/json"))
        .with_status_code(StatusCode(status))
}

fn with_cors(response: Response<Cursor<Vec<u8>>>) -> Response<Cursor<Vec<u8>>> {
    response
        .with_header(header("Access-Control-Allow-Origin", "*"))
        .with_header(header("Access-Control-Allow-Headers", ALLOW_HEADERS))
}

fn header(field: &'static str, value: &'static str) -> Header {
    Header::from_bytes(field, value).expect("static header is valid ASCII")
}

// =============================================================================
// ACCEPT LOOP
// =============================================================================

/// Bind a server to the configured address
pub fn bind(config: &ServerConfig) -> Result<Server, ServerError> {
    let addr = config.bind_addr();
    Server::http(&addr).map_err(|e| ServerError::Bind {
        addr,
        message: e.to_string(),
    })
}

/// Serve requests on `workers` threads until the server shuts down
///
/// Each worker pulls requests from the shared server and handles them to
/// completion; workers share nothing else.
pub fn serve(server: Arc<Server>, workers: usize) -> Result<(), ServerError> {
    let handles = (0..workers)
        .map(|id| {
            let server = Arc::clone(&server);
            thread::Builder::new()
                .name(format!("passcheck-worker-{id}"))
                .spawn(move || worker_loop(&server, id))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(ServerError::Spawn)?;

    for handle in handles {
        handle.join().map_err(|_| ServerError::WorkerPanicked)?;
    }
    Ok(())
}

/// Address the server actually listens on
///
/// Differs from the configured address when port 0 asked for an ephemeral
/// port.
#[must_use]
pub fn local_addr(server: &Server) -> Option<String> {
    server.server_addr().to_ip().map(|addr| addr.to_string())
}

/// Bind and serve with the given configuration
///
/// `on_ready` receives the bound address once the listener is up, before
/// any worker starts.
pub fn run(config: &ServerConfig, on_ready: impl FnOnce(&str)) -> Result<(), ServerError> {
    let server = bind(config)?;
    let addr = local_addr(&server).unwrap_or_else(|| config.bind_addr());
    info!("Listening on http://{addr}{VALIDATE_PATH} with {} worker(s)", config.workers);
    on_ready(&addr);
    serve(Arc::new(server), config.workers)
}

fn worker_loop(server: &Server, id: usize) {
    debug!("Worker {id} started");
    for mut request in server.incoming_requests() {
        let response = handle_request(&mut request);
        if let Err(e) = request.respond(response) {
            warn!("Failed to send response: {e}");
        }
    }
    debug!("Worker {id} stopped");
}
