use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::actor::Actor;

/// Request logging middleware.
///
/// One structured line per request. Score-level audit events are emitted by
/// the handlers themselves.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let actor = req
        .extensions()
        .get::<Actor>()
        .map(|a| a.0.clone())
        .unwrap_or_default();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        actor = %actor,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
