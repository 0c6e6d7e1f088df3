//! HTTP API server for the order service.
//!
//! Provides CRUD endpoints over an in-memory order store, liveness and
//! readiness probes, and Prometheus metrics, with structured logging
//! (tracing) on every request.

pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{any, get};
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::{InMemoryOrderStore, OrderStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::method_not_allowed;
use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: OrderStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    routes::metrics::describe();

    let metrics_router = Router::new()
        .route(
            "/metrics",
            get(routes::metrics::get::<S>).fallback(method_not_allowed),
        )
        .with_state((state.clone(), metrics_handle));

    Router::new()
        .route(
            "/",
            get(routes::root::describe).fallback(method_not_allowed),
        )
        .route(
            "/health",
            get(routes::health::check::<S>).fallback(method_not_allowed),
        )
        .route(
            "/ready",
            get(routes::health::ready::<S>).fallback(method_not_allowed),
        )
        .route(
            "/api/orders",
            get(routes::orders::list::<S>)
                .post(routes::orders::create::<S>)
                .fallback(method_not_allowed),
        )
        .route("/api/orders/", any(routes::orders::missing_id))
        .route(
            "/api/orders/{*id}",
            get(routes::orders::get::<S>)
                .put(routes::orders::update::<S>)
                .delete(routes::orders::delete::<S>)
                .fallback(routes::orders::unsupported_method),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state backed by a fresh in-memory store.
pub fn create_default_state(config: &Config) -> Arc<AppState<InMemoryOrderStore>> {
    let store = if config.seed_sample_orders {
        InMemoryOrderStore::with_sample_orders()
    } else {
        InMemoryOrderStore::new()
    };

    Arc::new(AppState::new(store, config.service_name.clone()))
}
