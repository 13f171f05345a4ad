//! Actix-web integration: make [`StatusError`] a raisable actix error and
//! build the global error-handling middleware.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, ResponseError};
use serde_json::Value;

use crate::error::StatusError;
use crate::respond::{ErrorBody, ResponderConfig, resolve_status};

/// Lets any handler raise a `StatusError` and have the framework emit the
/// `{message, status, details}` wire shape through the reply primitives.
impl ResponseError for StatusError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(resolve_status(self.status))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::from(self))
    }
}

/// Build the global error-handling middleware for an actix `App`.
///
/// Register it with `.wrap(..)` on the `App` so it covers every route
/// attached to it. Each error-status response carrying a raised error is
/// emitted to the diagnostic stream (when `config.logs` is set) and rebuilt
/// through the reply object's own status/send primitives as the
/// `{message, status, details}` JSON shape. A raised error that is not a
/// [`StatusError`] keeps the status its own response already resolved to and
/// contributes its `Display` text; error-status responses without a raised
/// error pass through untouched.
pub fn error_handlers<B>(config: ResponderConfig) -> ErrorHandlers<B>
where
    B: MessageBody + 'static,
{
    ErrorHandlers::new().default_handler(move |res: ServiceResponse<B>| {
        let body = match res.response().error() {
            None => return Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
            Some(err) => {
                if config.logs {
                    tracing::error!(error = %err, "request failed");
                }
                err.as_error::<StatusError>().map_or_else(
                    || ErrorBody {
                        message: err.to_string(),
                        status: res.status().as_u16(),
                        details: Value::Null,
                    },
                    ErrorBody::from,
                )
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let response = HttpResponse::build(status).json(&body);
        let (req, _) = res.into_parts();
        Ok(ErrorHandlerResponse::Response(
            ServiceResponse::new(req, response).map_into_right_body(),
        ))
    })
}
