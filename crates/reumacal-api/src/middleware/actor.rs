use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

pub const ACTOR_HEADER: &str = "x-actor-id";

/// The acting user, as asserted by the identity layer in front of the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor(pub String);

impl Actor {
    pub fn anonymous() -> Self {
        Self("anonymous".to_string())
    }
}

/// Reads `x-actor-id` and inserts `Actor` into request extensions for
/// handlers and the audit log. Missing or blank headers yield `anonymous`.
pub async fn identify_actor(mut req: Request, next: Next) -> Response {
    let actor = req
        .headers()
        .get(ACTOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| Actor(v.to_string()))
        .unwrap_or_else(Actor::anonymous);

    req.extensions_mut().insert(actor);
    next.run(req).await
}
