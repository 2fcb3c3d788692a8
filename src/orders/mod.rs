//! Order lifecycle module
//!
//! - [`status`] - the closed preparation status set and its normalization
//! - [`policy`] - role/ownership capability predicates
//! - [`service`] - the lifecycle engine: creation, listing, status updates

pub mod policy;
pub mod service;
pub mod status;

pub use service::OrderService;
pub use status::OrderStatus;
