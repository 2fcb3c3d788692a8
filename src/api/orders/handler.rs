//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Order, PlaceOrderRequest};
use crate::utils::AppResult;

/// Place a new order
///
/// `POST /api/orders` → 201 with the created order
pub async fn place(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.orders().place_order(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List every order, newest first (admin only)
///
/// `GET /api/orders`
pub async fn list_all(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders().list_all_orders(&user).await?;
    Ok(Json(orders))
}

/// List the orders of one customer, newest first
///
/// `GET /api/orders/{user_id}` - customers may only query themselves
pub async fn list_for_user(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders().list_user_orders(&user, &user_id).await?;
    Ok(Json(orders))
}

/// Status update request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Set an order's preparation status (admin only)
///
/// `PATCH /api/orders/{order_id}/status` - idempotent when the order
/// already has the requested status
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(order_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders()
        .update_status(&user, &order_id, &payload.status)
        .await?;
    Ok(Json(order))
}
