//! Utility module - shared error types and logging helpers
//!
//! # Contents
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - handler result alias
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
