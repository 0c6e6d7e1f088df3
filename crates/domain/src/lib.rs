//! Domain layer for the order service.
//!
//! This crate provides:
//! - The `Order` record and its lifecycle `OrderStatus`
//! - `NewOrder` and `OrderPatch`, the only shapes the store accepts
//! - The validation layer that turns raw request bodies into those shapes

pub mod error;
pub mod model;
pub mod status;
pub mod validation;
pub mod value_objects;

pub use common::OrderId;
pub use error::ValidationError;
pub use model::{NewOrder, Order, OrderPatch};
pub use status::OrderStatus;
pub use validation::{CreateOrderRequest, UpdateOrderRequest, parse_order_id};
pub use value_objects::{CustomerId, ProductId};
