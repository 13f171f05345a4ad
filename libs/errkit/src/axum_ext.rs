//! Axum integration: make [`StatusError`] directly usable as a response and
//! build terminal error handlers for the middleware stack.

use std::future::{Ready, ready};

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::error::StatusError;
use crate::respond::{ErrorBody, ResponderConfig};

/// Write the resolved status and JSON body onto a fresh response.
fn render(body: &ErrorBody) -> Response {
    // Body status can sit outside the representable range (e.g. 99 carried
    // by a StatusError); the status line falls back to 500, the body keeps
    // the resolved value.
    let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut resp = Json(body).into_response();
    *resp.status_mut() = status;
    resp
}

/// Axum integration: make `StatusError` directly usable as a response.
///
/// Pure formatting, no logging; route handlers can `return Err(err)` and the
/// framework emits the `{message, status, details}` wire shape with the
/// resolved status on the status line.
impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        render(&ErrorBody::from(&self))
    }
}

/// Build a terminal error handler for
/// [`axum::error_handling::HandleErrorLayer`].
///
/// The returned closure is stateless apart from the captured `config`. Per
/// invocation it emits the error to the diagnostic stream (when
/// `config.logs` is set), resolves the `{message, status, details}` body
/// (tolerating error values that are not a [`StatusError`]), and writes
/// status and body directly onto the outgoing response. No further handler
/// runs after it.
pub fn error_responder(
    config: ResponderConfig,
) -> impl Fn(axum::BoxError) -> Ready<Response> + Clone + Send + 'static {
    move |err| {
        if config.logs {
            tracing::error!(error = %err, "request failed");
        }
        let body = ErrorBody::from_error(err.as_ref());
        ready(render(&body))
    }
}
