//! The one request-handling interface.
//!
//! Route handlers, the [`Router`](crate::Router), and every middleware layer
//! in a [`Chain`](crate::middleware::Chain) all implement [`Handler`], so a
//! chain can wrap any of them and the router can store any of them in the same
//! table:
//!
//! ```text
//! async fn root(req: Request) -> Response    ─┐
//! Router                                      ├─► impl Handler ─► Arc<dyn Handler>
//! Layered { middleware, next }               ─┘
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A shared, type-erased handler. Cloning it is one atomic increment.
pub type BoxedHandler = Arc<dyn Handler>;

/// Turns a request into a response.
///
/// Implemented for every `Fn(Request) -> impl Future<Output = impl IntoResponse>`,
/// so a plain `async fn` is a handler. Implement it directly on types that
/// dispatch further, as [`Router`](crate::Router) does.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request) -> BoxFuture;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        respond((self)(req))
    }
}

/// Boxes a handler or middleware future, converting its output on completion.
pub(crate) fn respond<Fut, R>(fut: Fut) -> BoxFuture
where
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    Box::pin(async move { fut.await.into_response() })
}
