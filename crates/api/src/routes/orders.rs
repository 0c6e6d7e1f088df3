//! Order CRUD endpoints.
//!
//! Bodies are decoded and validated before the store is called, and the
//! response is serialized after it returns, so the store lock only ever
//! covers the in-memory read or mutation.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{CreateOrderRequest, UpdateOrderRequest, parse_order_id};
use order_store::OrderStore;

use crate::error::ApiError;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/orders: list every stored order, in no particular order.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + 'static>(State(state): State<Arc<AppState<S>>>) -> Json<Envelope> {
    let orders = state.store.list().await;
    tracing::info!(count = orders.len(), "fetching all orders");
    Json(Envelope::orders(orders))
}

/// POST /api/orders: validate the body and create a pending order.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let Json(req) = payload?;
    let new_order = req.validate()?;

    let order = state.store.insert(new_order).await;
    Ok((StatusCode::CREATED, Json(Envelope::order(order))))
}

/// GET /api/orders/{id}: fetch a single order.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, ApiError> {
    let id = parse_order_id(&id)?;
    let order = state.store.get(id).await?;
    Ok(Json(Envelope::order(order)))
}

/// PUT /api/orders/{id}: merge `status` and `quantity` into an order.
///
/// An unknown id is reported as 404 even when the body is also invalid.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let id = parse_order_id(&id)?;

    let patch = match payload {
        Ok(Json(req)) => req.into_patch().map_err(ApiError::from),
        Err(rejection) => Err(ApiError::from(rejection)),
    };
    let patch = match patch {
        Ok(patch) => patch,
        Err(err) => {
            state.store.get(id).await?;
            return Err(err);
        }
    };

    let order = state.store.update(id, patch).await?;
    Ok(Json(Envelope::order(order)))
}

/// DELETE /api/orders/{id}: remove an order.
#[tracing::instrument(skip(state))]
pub async fn delete<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, ApiError> {
    let id = parse_order_id(&id)?;
    let removed = state.store.delete(id).await?;
    Ok(Json(Envelope::message(format!("Order {} deleted", removed.id))))
}

/// Any other verb on /api/orders/{id}. A bad id still wins over the verb.
pub async fn unsupported_method(Path(id): Path<String>) -> ApiError {
    match parse_order_id(&id) {
        Ok(_) => ApiError::MethodNotAllowed,
        Err(err) => err.into(),
    }
}

/// /api/orders/ with an empty id segment.
pub async fn missing_id() -> ApiError {
    ApiError::BadRequest("Invalid order ID: missing".to_string())
}
