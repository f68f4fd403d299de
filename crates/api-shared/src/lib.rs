//! # API Shared
//!
//! Shared utilities and definitions for the catalog APIs.
//!
//! Contains:
//! - Request authentication against the required header (`auth` module)
//! - The health service and its response type
//!
//! Used by `api-rest`; nothing here depends on a particular HTTP framework.

pub mod auth;
pub mod health;

pub use auth::{validate_header_value, AuthError, AUTH_HEADER};
pub use health::{HealthRes, HealthService};
