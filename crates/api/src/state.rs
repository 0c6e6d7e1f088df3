//! Shared application state.

use std::time::Instant;

use order_store::OrderStore;

/// State shared by every handler.
///
/// The store is constructed once at startup and injected here; tests build
/// their own isolated instance.
pub struct AppState<S: OrderStore> {
    pub store: S,
    pub service_name: String,
    pub started_at: Instant,
}

impl<S: OrderStore> AppState<S> {
    pub fn new(store: S, service_name: impl Into<String>) -> Self {
        Self {
            store,
            service_name: service_name.into(),
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the state was created.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
