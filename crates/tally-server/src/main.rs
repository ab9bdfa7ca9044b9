//! tally server binary.
//!
//! Serves a shared counter over HTTP:
//! - GET `/` renders the full page with the current value
//! - POST `/increase` / `/decrease` mutate the counter and return a fragment
//! - `/healthz`, `/readyz`, `/metrics` for operations

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use tally_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Strict parsing + validate; a missing file means defaults.
    let cfg = config::load_or_default("tally.yaml").expect("config load failed");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let listen: SocketAddr = state
        .cfg()
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown(state))
        .await
        .expect("server failed");
}

async fn shutdown(state: app_state::AppState) {
    let _ = tokio::signal::ctrl_c().await;
    state.metrics().set_draining();
    tracing::info!("shutdown signal received, draining");
}
