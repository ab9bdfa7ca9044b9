//! Shared application state.
//!
//! One `AppState` is built at startup and cloned into every handler through
//! the router. The counter, view engine, and metrics registry live behind a
//! single `Arc`; handlers get compile-time-typed access instead of digging
//! dependencies out of a request context.

use std::sync::Arc;

use tally_core::error::Result;
use tally_core::Counter;

use crate::config::AppConfig;
use crate::obs::metrics::ServerMetrics;
use crate::view::ViewEngine;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    counter: Counter,
    views: ViewEngine,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle template preload failures with an
    /// explicit message (no panic inside the library).
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let views = ViewEngine::new(&cfg.server)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                counter: Counter::new(),
                views,
                metrics: ServerMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &Counter {
        &self.inner.counter
    }

    pub fn views(&self) -> &ViewEngine {
        &self.inner.views
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    /// Exporter lines appended to the metrics page. Signed: the counter may
    /// be negative.
    pub fn metrics_extra(&self) -> Vec<(&'static str, i64)> {
        vec![("tally_counter_value", self.counter().get_value())]
    }

    pub fn is_draining(&self) -> bool {
        self.metrics().is_draining()
    }
}
