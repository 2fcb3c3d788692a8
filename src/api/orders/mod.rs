//! Order API Module
//!
//! Role checks live in the lifecycle service, not in route middleware:
//! every handler extracts the caller's claims and passes them down
//! explicitly.

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_all).post(handler::place))
        .route("/{order_id}/status", patch(handler::update_status))
        .route("/{user_id}", get(handler::list_for_user))
}
