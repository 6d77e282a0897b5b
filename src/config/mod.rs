//! Configuration modules for the Student API.
//!
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: JWT authentication configuration

pub mod cors;
pub mod database;
pub mod jwt;
