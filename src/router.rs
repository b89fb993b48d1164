//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Routes are registered at
//! startup and the table is read-only afterwards.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::error::Error;
use crate::handler::{BoxFuture, BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup, then hand it to a [`Chain`](crate::middleware::Chain);
/// the router is itself a [`Handler`]. Each [`Router::on`] call returns the
/// router back so registrations chain with `?`.
pub struct Router {
    prefix: String,
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    /// A router that prepends `prefix` to every pattern registered on it.
    ///
    /// `Router::with_prefix("/api/v1").on(Method::GET, "/", root)` serves
    /// `GET /api/v1/`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_owned(),
            routes: HashMap::new(),
        }
    }

    /// Register a handler for a method + pattern pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves
    /// them. Registering a pattern that is already taken for the same method,
    /// or one that matchit cannot parse, fails with [`Error::Route`].
    ///
    /// ```rust
    /// # use corehttp::{Request, Response, Router};
    /// # use http::Method;
    /// # async fn user(_: Request) -> Response { Response::text("") }
    /// # fn main() -> Result<(), corehttp::Error> {
    /// let _router = Router::new().on(Method::GET, "/users/{userID}", user)?;
    /// assert!(Router::new()
    ///     .on(Method::GET, "/users/{userID}", user)?
    ///     .on(Method::GET, "/users/{userID}", user)
    ///     .is_err());
    /// # Ok(()) }
    /// ```
    pub fn on(mut self, method: Method, pattern: &str, handler: impl Handler) -> Result<Self, Error> {
        let path = format!("{}{pattern}", self.prefix);
        self.routes
            .entry(method.clone())
            .or_default()
            .insert(path.clone(), Arc::new(handler) as BoxedHandler)
            .map_err(|source| Error::Route { method, path, source })?;
        Ok(self)
    }

    /// Finds the handler for `method` + `path` and the bound path params.
    ///
    /// `HEAD` falls back to the `GET` tree when no explicit `HEAD` route
    /// matches.
    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        self.find(method, path).or_else(|| {
            (*method == Method::HEAD).then(|| self.find(&Method::GET, path)).flatten()
        })
    }

    fn find(&self, method: &Method, path: &str) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), decode_param(v)))
            .collect();
        Some((handler, params))
    }

    /// Routes one request. Unmatched requests get `404 Not Found`.
    pub async fn dispatch(&self, req: Request) -> Response {
        self.call(req).await
    }
}

/// Percent-decodes a bound segment, so `/users/john%20doe` binds `john doe`.
/// A segment that does not decode to UTF-8 is bound as sent.
fn decode_param(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_owned())
}

impl Handler for Router {
    fn call(&self, mut req: Request) -> BoxFuture {
        match self.lookup(&req.method, &req.path) {
            Some((handler, params)) => {
                req.params = params;
                handler.call(req)
            }
            None => Box::pin(async { Response::not_found() }),
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
