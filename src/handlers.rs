//! Terminal request handlers for the `/api/v1` surface.
//!
//! Both return fixed text. `user` echoes the `{userID}` path segment as the
//! router bound it (percent-decoded) without validating it.

use crate::{Request, Response};

/// `GET /`: the greeting.
pub async fn root(_req: Request) -> Response {
    Response::text("Hello, World!")
}

/// `GET /users/{userID}`
pub async fn user(req: Request) -> Response {
    let id = req.param("userID").unwrap_or_default();
    Response::text(format!("User ID: {id}"))
}
