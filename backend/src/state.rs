//! Application state management
//!
//! Shared state handed to every request handler via Axum's state
//! extraction. Cloning is cheap: every field is reference counted.

use crate::config::AppConfig;
use crate::repositories::Store;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// In-memory users and exercises
    pub store: Store,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus handle, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create application state with an empty store
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Store::new(),
            config: Arc::new(config),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the store
    #[inline]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
