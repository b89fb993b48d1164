//! # corehttp
//!
//! A small HTTP API server: a radix-tree router behind an ordered middleware
//! chain.
//!
//! ```text
//! Server ──► RequestLogger ──► BearerAuth ──► Router ──► handler
//! ```
//!
//! | Route | Response |
//! |---|---|
//! | `GET /api/v1/` | `200 Hello, World!` |
//! | `GET /api/v1/users/{userID}` | `200 User ID: {userID}` |
//! | missing / wrong `Authorization` | `401 Unauthorized` |
//! | anything else | `404` |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use corehttp::{Config, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), corehttp::Error> {
//!     Server::new(Config::default()).run().await
//! }
//! ```
//!
//! ## Building your own stack
//!
//! The pieces compose without the server:
//!
//! ```rust
//! use corehttp::middleware::{BearerAuth, Chain, RequestLogger};
//! use corehttp::{App, Request, Response, Router};
//! use http::{Method, StatusCode};
//!
//! async fn ping(_req: Request) -> Response {
//!     Response::text("pong")
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), corehttp::Error> {
//! let router = Router::new().on(Method::GET, "/ping", ping)?;
//! let chain = Chain::new().with(RequestLogger).with(BearerAuth::new("s3cret"));
//! let app = App::from_parts(chain, router);
//!
//! let res = app.handle(Request::new(Method::GET, "/ping")).await;
//! assert_eq!(res.code(), StatusCode::UNAUTHORIZED);
//! # Ok(()) }
//! ```

mod app;
mod config;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod handlers;
pub mod middleware;

pub use app::{API_PREFIX, App, routes};
pub use config::{Config, DEFAULT_ADDR, DEFAULT_TOKEN, parse_addr};
pub use error::Error;
pub use handler::{BoxFuture, BoxedHandler, Handler};
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, serve};
