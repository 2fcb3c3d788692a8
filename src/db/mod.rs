//! Database layer
//!
//! - [`models`] - persisted entities and API payload types
//! - [`repository`] - the order store contract and the in-process
//!   reference implementation

pub mod models;
pub mod repository;

pub use repository::{MemoryOrderStore, OrderStore, StoreError, StoreResult};
