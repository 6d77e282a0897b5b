use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::modules::students::repository::{PgStudentRepository, StudentRepository};

/// Shared application state, injected once at startup and cloned per request.
///
/// The persistence gateway is held as a trait object so tests can substitute
/// an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        students: Arc::new(PgStudentRepository::new(init_db_pool().await)),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
