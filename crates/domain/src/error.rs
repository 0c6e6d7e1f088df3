//! Validation error types.

use common::ParseOrderIdError;
use thiserror::Error;

/// Errors raised while turning a request into a store operation.
///
/// Every variant maps to a `BadRequest`; none of them reach the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was absent or null.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An integer field was zero or negative.
    #[error("{field} must be a positive integer, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    /// An integer field was positive but too large for its type.
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// The total was negative, NaN or infinite.
    #[error("total must be a non-negative amount, got {0}")]
    InvalidTotal(f64),

    /// The status is not one of the known order statuses.
    #[error("Unknown order status: '{0}'")]
    UnknownStatus(String),

    /// A path identifier did not parse.
    #[error(transparent)]
    InvalidOrderId(#[from] ParseOrderIdError),
}
