//! End-to-end coverage for the axum responder: a failing tower service
//! behind `HandleErrorLayer`, plus the `IntoResponse` path through a router.

use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use axum::{BoxError, Router};
use errkit::{ResponderConfig, StatusError, axum_ext};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::{ServiceBuilder, ServiceExt, service_fn};
use tracing_test::traced_test;

/// Drive one request through the responder wired behind a service that
/// always fails with `err()`.
async fn send(
    config: ResponderConfig,
    err: impl Fn() -> BoxError + Clone + Send + 'static,
) -> Response {
    let svc = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(axum_ext::error_responder(config)))
        .service(service_fn(move |_req: Request<Body>| {
            let err = err.clone();
            async move { Err::<Response, BoxError>(err()) }
        }));

    svc.oneshot(Request::get("/error").body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(resp: Response) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_json(resp: Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

#[tokio::test]
async fn responder_formats_a_raised_status_error() {
    let resp = send(ResponderConfig { logs: false }, || {
        Box::new(StatusError::new(400, "Random Error").with_details(json!({"detail": "x"})))
    })
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Random Error", "status": 400, "details": {"detail": "x"}})
    );
}

#[tokio::test]
async fn plain_errors_resolve_to_500_with_null_details() {
    let resp = send(ResponderConfig { logs: false }, || {
        "database is on fire".into()
    })
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "database is on fire", "status": 500, "details": null})
    );
}

#[tokio::test]
async fn zero_status_is_treated_as_unset() {
    let resp = send(ResponderConfig { logs: false }, || {
        Box::new(StatusError::new(0, "zeroed"))
    })
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "zeroed", "status": 500, "details": null})
    );
}

#[tokio::test]
async fn responses_are_byte_identical_across_invocations() {
    let make_err =
        || -> BoxError { Box::new(StatusError::new(409, "busy").with_details(json!(["a", "b"]))) };

    let first = body_bytes(send(ResponderConfig { logs: false }, make_err).await).await;
    let second = body_bytes(send(ResponderConfig { logs: false }, make_err).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
#[traced_test]
async fn responder_logs_when_enabled() {
    let resp = send(ResponderConfig::default(), || {
        Box::new(StatusError::new(400, "Random Error"))
    })
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(logs_contain("request failed"));
    assert!(logs_contain("Random Error"));
}

#[tokio::test]
#[traced_test]
async fn responder_is_quiet_when_logging_is_disabled() {
    let resp = send(ResponderConfig { logs: false }, || {
        Box::new(StatusError::new(400, "Random Error"))
    })
    .await;

    // The response is still fully formatted, just without diagnostics.
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!logs_contain("request failed"));
}

#[tokio::test]
async fn handlers_can_return_status_errors_directly() {
    async fn failing() -> Result<&'static str, StatusError> {
        Err(StatusError::new(404, "user not found"))
    }

    let app = Router::new().route("/users", get(failing));
    let resp = app
        .oneshot(Request::get("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "user not found", "status": 404, "details": null})
    );
}
