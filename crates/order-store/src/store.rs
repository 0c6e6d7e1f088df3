use async_trait::async_trait;
use domain::{NewOrder, Order, OrderPatch};

use crate::{OrderId, Result};

/// Core trait for order store implementations.
///
/// All implementations must be thread-safe (Send + Sync). Each call is atomic
/// with respect to a single order; there are no multi-order transactions.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Stores a new order under the next unused id.
    ///
    /// Sets `created_at` to now and `status` to pending. Ids are strictly
    /// increasing and never reused, including ids of deleted orders.
    async fn insert(&self, new_order: NewOrder) -> Order;

    /// Returns a snapshot of every stored order.
    ///
    /// The order of the returned sequence is unspecified. Callers that need a
    /// stable order must sort it themselves.
    async fn list(&self) -> Vec<Order>;

    /// Returns the order with the given id.
    async fn get(&self, id: OrderId) -> Result<Order>;

    /// Applies the present fields of `patch` and returns the updated order.
    async fn update(&self, id: OrderId, patch: OrderPatch) -> Result<Order>;

    /// Removes the order and returns it as confirmation.
    async fn delete(&self, id: OrderId) -> Result<Order>;

    /// Returns the number of stored orders at this instant.
    async fn count(&self) -> usize;
}
