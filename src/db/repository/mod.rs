//! Repository Module
//!
//! The persistence contract the lifecycle engine depends on, and the
//! consistency guarantees it must uphold. The storage engine behind it is
//! deliberately out of scope; [`MemoryOrderStore`] is the in-process
//! reference implementation.

pub mod order;

pub use order::MemoryOrderStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::db::models::{NewOrder, Order};
use crate::orders::OrderStatus;
use crate::utils::AppError;

/// Repository error types
///
/// These are infrastructure failures, distinct from the request-fault
/// taxonomy; the boundary surfaces them as opaque 500s.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::database(err.to_string())
    }
}

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Order store contract
///
/// Consistency requirements every implementation must provide:
///
/// - `create` persists exactly one new document with a fresh identifier and
///   never merges with an existing record;
/// - `find_by_owner` and `find_all` return orders sorted by `createdAt`
///   descending;
/// - `update_status` is a linearized read-modify-write per order id: two
///   concurrent calls on the same id never interleave to lose an update.
///   Calls on distinct ids may proceed in parallel.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning `id` and `createdAt`
    async fn create(&self, order: NewOrder) -> StoreResult<Order>;

    /// Look up a single order
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Order>>;

    /// All orders of one owner, newest first
    async fn find_by_owner(&self, owner_id: &str) -> StoreResult<Vec<Order>>;

    /// Every order, newest first
    async fn find_all(&self) -> StoreResult<Vec<Order>>;

    /// Atomically set the status of an order
    ///
    /// Returns `None` when no order with this id exists.
    async fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Option<Order>>;
}
