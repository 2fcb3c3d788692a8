//! Canteen Server - order-taking service for a small food vendor
//!
//! Customers submit a cart as an order, an administrator advances each
//! order through the fixed preparation lifecycle
//! (`Pending → Preparing → Completed`), and customers poll for status.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/    # configuration, state, HTTP server
//! ├── auth/    # JWT validation, CurrentUser claims
//! ├── orders/  # status model, access policy, lifecycle engine
//! ├── db/      # order model, store contract, in-process store
//! ├── api/     # axum routers and handlers
//! └── utils/   # error types, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtConfig, JwtService, Role};
pub use core::{Config, Server, ServerState};
pub use db::{MemoryOrderStore, OrderStore};
pub use orders::{OrderService, OrderStatus};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
