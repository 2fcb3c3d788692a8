//! API routing module
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`orders`] - order lifecycle endpoints

pub mod health;
pub mod orders;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
