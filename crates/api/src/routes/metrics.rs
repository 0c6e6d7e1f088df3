//! Prometheus metrics endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderStore;

use crate::state::AppState;

pub const ORDERS_TOTAL: &str = "orders_total";
pub const UPTIME_SECONDS: &str = "app_uptime_seconds";

/// Registers HELP text for every metric the service emits.
pub fn describe() {
    metrics::describe_gauge!(ORDERS_TOTAL, "Total orders");
    metrics::describe_gauge!(UPTIME_SECONDS, "Application uptime");
    metrics::describe_counter!("orders_created_total", "Orders created since start");
    metrics::describe_counter!("orders_updated_total", "Orders updated since start");
    metrics::describe_counter!("orders_deleted_total", "Orders deleted since start");
}

/// GET /metrics: returns Prometheus-formatted metrics.
///
/// The gauges are refreshed from the store and the clock on every scrape.
pub async fn get<S: OrderStore + 'static>(
    State((state, handle)): State<(Arc<AppState<S>>, PrometheusHandle)>,
) -> impl IntoResponse {
    let count = state.store.count().await;
    metrics::gauge!(ORDERS_TOTAL).set(count as f64);
    metrics::gauge!(UPTIME_SECONDS).set(state.uptime_seconds());

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        handle.render(),
    )
}
