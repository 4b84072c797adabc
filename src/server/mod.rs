//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight threaded HTTP server

use thiserror::Error;

pub mod tiny_http;

pub use self::tiny_http::{
    ALLOW_HEADERS, Reply, VALIDATE_PATH, bind, dispatch, handle_request, into_response, local_addr,
    run, serve,
};

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Listener could not be bound
    #[error("failed to start server on {addr}: {message}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Reason reported by the listener
        message: String,
    },

    /// A worker thread could not be started
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// A worker thread panicked outside request handling
    #[error("worker thread panicked")]
    WorkerPanicked,
}
