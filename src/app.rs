//! Application assembly: the `/api/v1` routes behind the logger and the
//! bearer-token gate.

use http::Method;

use crate::config::Config;
use crate::error::Error;
use crate::handler::{BoxedHandler, Handler};
use crate::handlers;
use crate::middleware::{BearerAuth, Chain, RequestLogger};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

pub const API_PREFIX: &str = "/api/v1";

/// The fully wrapped request handler served by [`Server`](crate::Server).
///
/// Cheap to clone; every clone shares the same route table and middleware.
#[derive(Clone)]
pub struct App {
    handler: BoxedHandler,
}

impl App {
    /// Builds the route table and wraps it in `[RequestLogger, BearerAuth]`.
    ///
    /// The logger is outermost, so every request is logged, including the
    /// ones the auth layer rejects.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let router = routes()?;
        let chain = Chain::new()
            .with(RequestLogger)
            .with(BearerAuth::new(&config.token));
        Ok(Self::from_parts(chain, router))
    }

    /// Wraps an arbitrary router in an arbitrary chain.
    pub fn from_parts(chain: Chain, router: Router) -> Self {
        Self { handler: chain.wrap(router) }
    }

    pub async fn handle(&self, req: Request) -> Response {
        self.handler.call(req).await
    }
}

/// `GET /api/v1/` and `GET /api/v1/users/{userID}`.
pub fn routes() -> Result<Router, Error> {
    Router::with_prefix(API_PREFIX)
        .on(Method::GET, "/", handlers::root)?
        .on(Method::GET, "/users/{userID}", handlers::user)
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;

    const AUTH: &str = "Bearer my-secret-token";

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    fn get(path: &str) -> Request {
        Request::new(Method::GET, path).with_header("Authorization", AUTH)
    }

    #[tokio::test]
    async fn root_greets() {
        let res = app().handle(get("/api/v1/")).await;
        assert_eq!(res.code(), StatusCode::OK);
        assert_eq!(res.body(), b"Hello, World!");
    }

    #[tokio::test]
    async fn user_echoes_any_segment() {
        let app = app();
        for id in ["42", "abc", "0", "a-b_c.d"] {
            let res = app.handle(get(&format!("/api/v1/users/{id}"))).await;
            assert_eq!(res.code(), StatusCode::OK);
            assert_eq!(res.body(), format!("User ID: {id}").as_bytes());
        }
    }

    #[tokio::test]
    async fn user_id_is_percent_decoded() {
        let res = app().handle(get("/api/v1/users/john%20doe")).await;
        assert_eq!(res.code(), StatusCode::OK);
        assert_eq!(res.body(), b"User ID: john doe");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = app();
        for path in ["/api/v1/unknown", "/api/v1", "/", "/users/42", "/api/v1/users/"] {
            let res = app.handle(get(path)).await;
            assert_eq!(res.code(), StatusCode::NOT_FOUND, "{path}");
            assert_eq!(res.body(), b"404 page not found");
        }
    }

    #[tokio::test]
    async fn wrong_method_is_not_found() {
        let res = app().handle(Request::new(Method::POST, "/api/v1/").with_header("authorization", AUTH)).await;
        assert_eq!(res.code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn auth_runs_before_routing() {
        let res = app().handle(Request::new(Method::GET, "/api/v1/unknown")).await;
        assert_eq!(res.code(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.body(), b"Unauthorized");
    }

    #[tokio::test]
    async fn token_comes_from_config() {
        let config = Config::new(Config::default().addr, "rotated");
        let app = App::new(&config).unwrap();

        let old = app.handle(get("/api/v1/")).await;
        assert_eq!(old.code(), StatusCode::UNAUTHORIZED);

        let new = app
            .handle(Request::new(Method::GET, "/api/v1/").with_header("Authorization", "Bearer rotated"))
            .await;
        assert_eq!(new.code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn repeated_requests_yield_identical_responses() {
        let app = app();
        let first = app.handle(get("/api/v1/users/7")).await;
        for _ in 0..10 {
            assert_eq!(app.handle(get("/api/v1/users/7")).await, first);
        }
    }
}
