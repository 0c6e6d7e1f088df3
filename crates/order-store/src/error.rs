use thiserror::Error;

use crate::OrderId;

/// Errors that can occur when interacting with the order store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No order with this id is currently stored.
    #[error("Order {0} not found")]
    NotFound(OrderId),
}

/// Result type for order store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
