//! Shared-secret bearer authentication.
//!
//! This is a placeholder gate: one static token, no rotation, no per-user
//! identity. Put a real identity provider in front of anything that matters.

use http::StatusCode;
use tracing::error;

use crate::handler::BoxFuture;
use crate::request::Request;
use crate::response::Response;

use super::{Middleware, Next};

/// Rejects every request whose `Authorization` header is not exactly
/// `Bearer <token>`.
///
/// The header name is matched case-insensitively; the value is compared
/// byte-for-byte. A missing header counts as a mismatch. Rejected requests get
/// `401 Unauthorized` with body `Unauthorized` and never reach the next
/// handler.
#[derive(Clone)]
pub struct BearerAuth {
    expected: String,
}

impl BearerAuth {
    pub fn new(token: &str) -> Self {
        Self { expected: format!("Bearer {token}") }
    }

    fn authorized(&self, req: &Request) -> bool {
        req.header("authorization").unwrap_or("") == self.expected
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth").finish_non_exhaustive()
    }
}

impl Middleware for BearerAuth {
    fn handle(&self, req: Request, next: Next) -> BoxFuture {
        if !self.authorized(&req) {
            error!(method = %req.method(), path = %req.path(), "unauthorized request");
            return Box::pin(async { unauthorized() });
        }
        Box::pin(next.run(req))
    }
}

fn unauthorized() -> Response {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header("x-content-type-options", "nosniff")
        .text("Unauthorized")
}
