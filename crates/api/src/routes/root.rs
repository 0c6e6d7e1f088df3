//! Service descriptor.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceDescriptor {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub ready: &'static str,
    pub orders: &'static str,
    pub metrics: &'static str,
}

/// GET /: names the service and lists its endpoints.
pub async fn describe() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: "Order API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/health",
            ready: "/ready",
            orders: "/api/orders",
            metrics: "/metrics",
        },
    })
}
