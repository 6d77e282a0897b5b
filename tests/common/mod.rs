use std::sync::Arc;

use student_api::config::cors::CorsConfig;
use student_api::config::jwt::JwtConfig;
use student_api::modules::students::repository::in_memory::InMemoryStudentRepository;
use student_api::router::init_router;
use student_api::state::AppState;
use student_api::utils::jwt::create_access_token;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

/// Builds the real router backed by a fresh in-memory store. Each call is an
/// isolated application; clone the returned router to send several requests
/// against the same store.
pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        students: Arc::new(InMemoryStudentRepository::default()),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn token_with_roles(roles: &[&str]) -> String {
    create_access_token("test-user", roles, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn admin_token() -> String {
    token_with_roles(&["ADMIN"])
}

#[allow(dead_code)]
pub fn student_token() -> String {
    token_with_roles(&["STUDENT"])
}
