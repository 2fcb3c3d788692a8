//! Authentication module
//!
//! Decodes bearer credentials into an explicit claims value:
//! - [`JwtService`] - JWT token validation and issuance
//! - [`CurrentUser`] - per-request user context, threaded as an explicit
//!   parameter into every lifecycle operation
//! - [`extractor`] - axum extractor producing [`CurrentUser`] from the
//!   `Authorization` header

pub mod extractor;
pub mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, Role};
