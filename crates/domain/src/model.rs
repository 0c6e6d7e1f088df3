//! The order record and the shapes used to create and modify it.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::status::OrderStatus;
use crate::value_objects::{CustomerId, ProductId};

/// An order held by the store.
///
/// `id` and `created_at` are assigned by the store on insertion.
/// `customer_id`, `product_id` and `total` never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for a new order.
///
/// Can only be built through [`NewOrder::new`], so every value reaching the
/// store satisfies the creation invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    customer_id: CustomerId,
    product_id: ProductId,
    quantity: u32,
    total: f64,
}

impl NewOrder {
    /// Builds a new order, rejecting zero ids, zero quantity and bad totals.
    pub fn new(
        customer_id: u64,
        product_id: u64,
        quantity: u32,
        total: f64,
    ) -> Result<Self, ValidationError> {
        if customer_id == 0 {
            return Err(ValidationError::NotPositive {
                field: "customerId",
                value: 0,
            });
        }
        if product_id == 0 {
            return Err(ValidationError::NotPositive {
                field: "productId",
                value: 0,
            });
        }
        if quantity == 0 {
            return Err(ValidationError::NotPositive {
                field: "quantity",
                value: 0,
            });
        }
        if !total.is_finite() || total < 0.0 {
            return Err(ValidationError::InvalidTotal(total));
        }

        Ok(Self {
            customer_id: CustomerId::new(customer_id),
            product_id: ProductId::new(product_id),
            quantity,
            total,
        })
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Turns the fields into a pending order with the given identity.
    pub fn into_order(self, id: OrderId, created_at: DateTime<Utc>) -> Order {
        Order {
            id,
            customer_id: self.customer_id,
            product_id: self.product_id,
            quantity: self.quantity,
            total: self.total,
            status: OrderStatus::Pending,
            created_at,
        }
    }
}

/// A partial update. `None` fields leave the order untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub quantity: Option<u32>,
}

impl OrderPatch {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            quantity: None,
        }
    }

    pub fn quantity(quantity: u32) -> Self {
        Self {
            status: None,
            quantity: Some(quantity),
        }
    }

    /// Returns true if applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.quantity.is_none_or(|q| q == 0)
    }

    /// Merges the present fields into `order`. A zero quantity counts as absent.
    pub fn apply(&self, order: &mut Order) {
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(quantity) = self.quantity
            && quantity > 0
        {
            order.quantity = quantity;
        }
    }
}
