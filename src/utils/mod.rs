//! Shared utilities:
//!
//! - [`errors`]: Application error type and HTTP mapping
//! - [`jwt`]: JWT token creation and verification

pub mod errors;
pub mod jwt;
