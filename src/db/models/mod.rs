//! Persisted entities and API payload types

pub mod order;

pub use order::{CatalogRef, LineItem, LineItemInput, NewOrder, Order, PlaceOrderRequest};
