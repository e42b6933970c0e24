//! reumacal-api
//!
//! JSON API over the score engine and the score store. Runs under AWS
//! Lambda or as a local listener.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use config::{Config, StoreKind};
pub use state::{AppState, Backend};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (reference data and stateless scoring)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{code}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{code}/score",
            post(routes::instruments::compute_score),
        )
        // Patient history
        .route(
            "/patients/{patient_id}/scores",
            get(routes::scores::list_scores).post(routes::scores::create_score),
        )
        .route(
            "/patients/{patient_id}/scores/latest",
            get(routes::scores::latest_scores),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(axum_mw::from_fn(middleware::actor::identify_actor))
        .layer(cors)
        .with_state(state)
}
