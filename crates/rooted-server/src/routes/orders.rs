//! Checkout and order listing routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use rooted_core::models::{CheckoutRequest, OrderResponse};
use rooted_core::services::orders::CheckoutOutcome;
use rooted_core::services::OrderService;
use rooted_core::ApiError;

use crate::state::AppState;

/// Record a pending order for the requested items
pub async fn create_checkout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutOutcome>), ApiError> {
    let service = OrderService::new(state.db.clone());
    let outcome = service.checkout(request).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Query parameters for listing orders
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub user_id: String,
}

/// List orders for a user
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let service = OrderService::new(state.db.clone());
    let orders = service.list_for_user(&query.user_id).await?;
    Ok(Json(orders))
}
