use tracing::info;

use crate::handler::BoxFuture;
use crate::request::Request;

use super::{Middleware, Next};

/// Emits one INFO event per request with its method and path, then forwards
/// unconditionally.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestLogger;

impl Middleware for RequestLogger {
    fn handle(&self, req: Request, next: Next) -> BoxFuture {
        info!(method = %req.method(), path = %req.path(), "request");
        Box::pin(next.run(req))
    }
}
