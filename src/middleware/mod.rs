//! Middleware for authentication and authorization.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the JWT and extracts claims
//! 3. [`role::require_admin`] checks the `ROLE_ADMIN` authority on `/api` routes
//! 4. Handler executes if all checks pass
//!
//! A missing or invalid token yields 401; a valid token without the required
//! authority yields 403.

pub mod auth;
pub mod role;
