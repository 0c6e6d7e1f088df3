//! HTTP route handlers.

pub mod health;
pub mod metrics;
pub mod orders;
pub mod root;

use crate::error::ApiError;

/// Fallback for a verb that a defined path does not support.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback for paths that match no route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
