use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use domain::{CustomerId, NewOrder, Order, OrderPatch, OrderStatus, ProductId};
use tokio::sync::RwLock;

use crate::{OrderId, Result, StoreError, store::OrderStore};

/// Map and id counter, always guarded together.
///
/// Invariants: every key equals the `id` of its value, and `next_id` is
/// greater than every id ever issued.
#[derive(Debug)]
struct Inner {
    orders: HashMap<OrderId, Order>,
    next_id: OrderId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            orders: HashMap::new(),
            next_id: OrderId::FIRST,
        }
    }
}

/// In-memory order store guarded by a single readers-writer lock.
///
/// `list`, `get` and `count` take the lock in shared mode; `insert`, `update`
/// and `delete` take it exclusively. The guard never lives across an await
/// other than its own acquisition, so a dropped request future cannot hold it.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty store. The first issued id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the two demo orders; the next issued id is 3.
    pub fn with_sample_orders() -> Self {
        let now = Utc::now();
        let samples = [
            Order {
                id: OrderId::new(1),
                customer_id: CustomerId::new(101),
                product_id: ProductId::new(1),
                quantity: 2,
                total: 1999.98,
                status: OrderStatus::Completed,
                created_at: now - Duration::hours(24),
            },
            Order {
                id: OrderId::new(2),
                customer_id: CustomerId::new(102),
                product_id: ProductId::new(3),
                quantity: 1,
                total: 79.99,
                status: OrderStatus::Pending,
                created_at: now - Duration::hours(2),
            },
        ];

        let inner = Inner {
            orders: samples.into_iter().map(|o| (o.id, o)).collect(),
            next_id: OrderId::new(3),
        };
        tracing::info!(count = inner.orders.len(), "initialized sample orders");

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    #[tracing::instrument(skip(self, new_order))]
    async fn insert(&self, new_order: NewOrder) -> Order {
        let order = {
            let mut inner = self.inner.write().await;
            let id = inner.next_id;
            inner.next_id = id.next();
            let order = new_order.into_order(id, Utc::now());
            inner.orders.insert(id, order.clone());
            order
        };

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, "order created");
        order
    }

    async fn list(&self) -> Vec<Order> {
        let orders: Vec<Order> = self.inner.read().await.orders.values().cloned().collect();
        tracing::debug!(count = orders.len(), "listed orders");
        orders
    }

    async fn get(&self, id: OrderId) -> Result<Order> {
        self.inner
            .read()
            .await
            .orders
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, id: OrderId, patch: OrderPatch) -> Result<Order> {
        let order = {
            let mut inner = self.inner.write().await;
            let order = inner.orders.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            patch.apply(order);
            order.clone()
        };

        metrics::counter!("orders_updated_total").increment(1);
        tracing::info!(order_id = %id, status = %order.status, "order updated");
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: OrderId) -> Result<Order> {
        let removed = self
            .inner
            .write()
            .await
            .orders
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(order_id = %id, "order deleted");
        Ok(removed)
    }

    async fn count(&self) -> usize {
        self.inner.read().await.orders.len()
    }
}
