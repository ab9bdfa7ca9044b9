//! Request observability: per-request span, completion log, metrics.

pub mod metrics;

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

use crate::app_state::AppState;

/// Middleware recording a span, a completion log line, and request metrics
/// for every request passing through the router.
pub async fn track_http(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!("http", %method, %path);

    let started = Instant::now();
    let res = next.run(req).instrument(span).await;
    let elapsed = started.elapsed();

    let status = res.status().as_u16().to_string();
    let m = app.metrics();
    m.http_requests.inc(&[
        ("method", method.as_str()),
        ("path", path.as_str()),
        ("status", status.as_str()),
    ]);
    m.request_duration.observe(&[("path", path.as_str())], elapsed);

    tracing::info!(%method, %path, %status, elapsed_ms = elapsed.as_millis() as u64, "request");
    res
}
