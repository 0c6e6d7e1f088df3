//! Request validation and mapping.
//!
//! Raw request bodies are deserialized into the loosely typed request structs
//! below and then checked here, before any store lock is taken.

use common::OrderId;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::model::{NewOrder, OrderPatch};
use crate::status::OrderStatus;

/// Body of `POST /api/orders`.
///
/// Fields are optional so that a missing field is reported as such instead of
/// as a generic decoding failure. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(alias = "customer_id")]
    pub customer_id: Option<i64>,
    #[serde(alias = "product_id")]
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
    pub total: Option<f64>,
}

impl CreateOrderRequest {
    /// Checks required fields and produces a [`NewOrder`].
    ///
    /// `customerId`, `productId` and `quantity` must be present and positive.
    /// An absent `total` defaults to zero.
    pub fn validate(self) -> Result<NewOrder, ValidationError> {
        let customer_id = required_positive("customerId", self.customer_id)?;
        let product_id = required_positive("productId", self.product_id)?;
        let quantity = required_positive("quantity", self.quantity)?;
        let quantity = u32::try_from(quantity).map_err(|_| ValidationError::OutOfRange {
            field: "quantity",
            value: quantity as i64,
        })?;

        NewOrder::new(
            customer_id,
            product_id,
            quantity,
            self.total.unwrap_or_default(),
        )
    }
}

/// Body of `PUT /api/orders/{id}`.
///
/// Merge-if-present: an absent or empty `status` and a non-positive
/// `quantity` are both treated as "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub quantity: Option<i64>,
}

impl UpdateOrderRequest {
    pub fn into_patch(self) -> Result<OrderPatch, ValidationError> {
        let status = match self.status.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<OrderStatus>()?),
        };

        let quantity = match self.quantity {
            Some(q) if q > 0 => Some(
                u32::try_from(q).map_err(|_| ValidationError::OutOfRange {
                    field: "quantity",
                    value: q,
                })?,
            ),
            _ => None,
        };

        Ok(OrderPatch { status, quantity })
    }
}

/// Parses the `{id}` path segment of an order URL.
pub fn parse_order_id(raw: &str) -> Result<OrderId, ValidationError> {
    Ok(raw.parse::<OrderId>()?)
}

fn required_positive(field: &'static str, value: Option<i64>) -> Result<u64, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(v) if v <= 0 => Err(ValidationError::NotPositive { field, value: v }),
        Some(v) => Ok(v as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(json: serde_json::Value) -> Result<NewOrder, ValidationError> {
        serde_json::from_value::<CreateOrderRequest>(json)
            .unwrap()
            .validate()
    }

    fn update(json: serde_json::Value) -> Result<OrderPatch, ValidationError> {
        serde_json::from_value::<UpdateOrderRequest>(json)
            .unwrap()
            .into_patch()
    }

    #[test]
    fn valid_create_request() {
        let new_order = create(serde_json::json!({
            "customerId": 101,
            "productId": 1,
            "quantity": 2,
            "total": 1999.98
        }))
        .unwrap();

        assert_eq!(new_order.customer_id().as_u64(), 101);
        assert_eq!(new_order.product_id().as_u64(), 1);
        assert_eq!(new_order.quantity(), 2);
        assert_eq!(new_order.total(), 1999.98);
    }

    #[test]
    fn create_accepts_snake_case_aliases() {
        let new_order = create(serde_json::json!({
            "customer_id": 7,
            "product_id": 8,
            "quantity": 1
        }))
        .unwrap();

        assert_eq!(new_order.customer_id().as_u64(), 7);
        assert_eq!(new_order.product_id().as_u64(), 8);
        assert_eq!(new_order.total(), 0.0);
    }

    #[test]
    fn create_reports_missing_fields() {
        assert_eq!(
            create(serde_json::json!({ "productId": 1, "quantity": 1 })),
            Err(ValidationError::MissingField("customerId"))
        );
        assert_eq!(
            create(serde_json::json!({ "customerId": 1, "productId": null, "quantity": 1 })),
            Err(ValidationError::MissingField("productId"))
        );
        assert_eq!(
            create(serde_json::json!({ "customerId": 1, "productId": 1 })),
            Err(ValidationError::MissingField("quantity"))
        );
    }

    #[test]
    fn create_rejects_non_positive_values() {
        assert_eq!(
            create(serde_json::json!({ "customerId": 1, "productId": 1, "quantity": 0 })),
            Err(ValidationError::NotPositive {
                field: "quantity",
                value: 0
            })
        );
        assert_eq!(
            create(serde_json::json!({ "customerId": -3, "productId": 1, "quantity": 1 })),
            Err(ValidationError::NotPositive {
                field: "customerId",
                value: -3
            })
        );
    }

    #[test]
    fn create_rejects_oversized_quantity() {
        assert!(matches!(
            create(serde_json::json!({
                "customerId": 1,
                "productId": 1,
                "quantity": 5_000_000_000i64
            })),
            Err(ValidationError::OutOfRange { field: "quantity", .. })
        ));
    }

    #[test]
    fn create_rejects_negative_total() {
        assert_eq!(
            create(serde_json::json!({
                "customerId": 1,
                "productId": 1,
                "quantity": 1,
                "total": -5.0
            })),
            Err(ValidationError::InvalidTotal(-5.0))
        );
    }

    #[test]
    fn update_with_status_only() {
        let patch = update(serde_json::json!({ "status": "completed" })).unwrap();
        assert_eq!(patch, OrderPatch::status(OrderStatus::Completed));
    }

    #[test]
    fn update_ignores_non_positive_quantity() {
        let patch = update(serde_json::json!({ "quantity": 0 })).unwrap();
        assert_eq!(patch.quantity, None);

        let patch = update(serde_json::json!({ "quantity": -4 })).unwrap();
        assert_eq!(patch.quantity, None);
    }

    #[test]
    fn update_treats_empty_status_as_absent() {
        let patch = update(serde_json::json!({ "status": "", "quantity": 3 })).unwrap();
        assert_eq!(patch, OrderPatch::quantity(3));
    }

    #[test]
    fn update_rejects_unknown_status() {
        assert_eq!(
            update(serde_json::json!({ "status": "teleported" })),
            Err(ValidationError::UnknownStatus("teleported".to_string()))
        );
    }

    #[test]
    fn empty_update_is_an_empty_patch() {
        let patch = update(serde_json::json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn parse_order_id_accepts_integers_only() {
        assert_eq!(parse_order_id("3"), Ok(OrderId::new(3)));
        assert!(matches!(
            parse_order_id("abc"),
            Err(ValidationError::InvalidOrderId(_))
        ));
        assert!(parse_order_id("3/extra").is_err());
    }
}
