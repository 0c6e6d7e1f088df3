//! Uniform response envelope.

use domain::Order;
use serde::Serialize;

/// Payload carried in the `data` field of an [`Envelope`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Order(Order),
    Orders(Vec<Order>),
    Message { message: String },
}

/// `{success, data?, error?, count?}` wrapper produced once per request.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Envelope {
    pub fn order(order: Order) -> Self {
        Self::success(ResponseData::Order(order), None)
    }

    /// Wraps a list of orders and reports its length in `count`.
    pub fn orders(orders: Vec<Order>) -> Self {
        let count = orders.len();
        Self::success(ResponseData::Orders(orders), Some(count))
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::success(
            ResponseData::Message {
                message: message.into(),
            },
            None,
        )
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            count: None,
        }
    }

    fn success(data: ResponseData, count: Option<usize>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            count,
        }
    }
}
