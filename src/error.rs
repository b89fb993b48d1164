//! Unified error type.

use std::net::SocketAddr;

use http::Method;
use thiserror::Error;

/// The error type returned by corehttp's fallible operations.
///
/// Request-level failures (401, 404, 400) are expressed as HTTP
/// [`Response`](crate::Response) values, never as `Error`s. This type surfaces
/// startup failures: a route table that cannot be built, or a port that
/// cannot be bound.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route `{method} {path}`: {source}")]
    Route {
        method: Method,
        path: String,
        #[source]
        source: matchit::InsertError,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
