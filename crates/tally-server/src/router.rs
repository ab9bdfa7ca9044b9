//! Axum router wiring.
//!
//! Counter routes plus the operational trio, all behind the request-tracking
//! middleware.

use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::{app_state::AppState, handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/increase", post(handlers::increase))
        .route("/decrease", post(handlers::decrease))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_http))
        .with_state(state)
}
