//! Middleware layer.
//!
//! Middleware intercepts a request on its way to the router and sees the
//! response on its way back. Each unit gets the request plus a [`Next`]
//! handle; calling [`Next::run`] forwards to the rest of the chain, and not
//! calling it short-circuits.
//!
//! ```text
//! Chain::new().with(a).with(b).wrap(router)
//!
//!   request ──► a ──► b ──► router
//!   response ◄── a ◄── b ◄──┘
//! ```
//!
//! Built-in units:
//! - [`RequestLogger`]: one INFO event per request (method, path)
//! - [`BearerAuth`]: rejects requests without the expected bearer token

mod auth;
mod logger;

pub use auth::BearerAuth;
pub use logger::RequestLogger;

use std::future::Future;
use std::sync::Arc;

use crate::handler::{BoxFuture, BoxedHandler, Handler, respond};
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// The remainder of the chain below the current middleware.
pub struct Next {
    inner: BoxedHandler,
}

impl Next {
    /// Forwards `req` to the next middleware, or to the terminal handler if
    /// this is the innermost one.
    pub async fn run(self, req: Request) -> Response {
        self.inner.call(req).await
    }
}

/// A request-wrapping unit.
///
/// Implement it on a struct when the middleware carries configuration (see
/// [`BearerAuth`]). Any `Fn(Request, Next) -> impl Future` also qualifies:
///
/// ```rust
/// use corehttp::middleware::{Chain, Next};
/// use corehttp::{Request, Response};
/// use http::StatusCode;
///
/// let chain = Chain::new().with(|req: Request, next: Next| async move {
///     if req.path().starts_with("/internal/") {
///         return Response::status(StatusCode::FORBIDDEN);
///     }
///     next.run(req).await
/// });
/// # let _ = chain;
/// ```
pub trait Middleware: Send + Sync + 'static {
    fn handle(&self, req: Request, next: Next) -> BoxFuture;
}

impl<F, Fut, R> Middleware for F
where
    F: Fn(Request, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn handle(&self, req: Request, next: Next) -> BoxFuture {
        respond((self)(req, next))
    }
}

/// One middleware bound to the handler it wraps.
struct Layered {
    middleware: Arc<dyn Middleware>,
    next: BoxedHandler,
}

impl Handler for Layered {
    fn call(&self, req: Request) -> BoxFuture {
        let next = Next { inner: Arc::clone(&self.next) };
        self.middleware.handle(req, next)
    }
}

/// An ordered list of middleware. The first one added is the outermost.
#[derive(Clone, Default)]
pub struct Chain {
    layers: Vec<Arc<dyn Middleware>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `middleware` inside every middleware already in the chain.
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        self.layers.push(Arc::new(middleware));
        self
    }

    pub fn len(&self) -> usize { self.layers.len() }
    pub fn is_empty(&self) -> bool { self.layers.is_empty() }

    /// Wraps `terminal` in every layer of the chain.
    ///
    /// Folds from the last layer to the first, so after the fold the
    /// first-declared middleware is the outermost wrapper. An empty chain
    /// returns `terminal` erased but otherwise untouched.
    pub fn wrap(&self, terminal: impl Handler) -> BoxedHandler {
        let terminal: BoxedHandler = Arc::new(terminal);
        self.layers.iter().rev().fold(terminal, |next, middleware| {
            Arc::new(Layered { middleware: Arc::clone(middleware), next })
        })
    }
}
