use crate::middleware::role::require_admin;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// Every route nested under `/api` carries the admin role requirement as a
/// `route_layer`; the layer authenticates the bearer token before checking
/// the role, so unauthenticated requests are rejected with 401 and
/// authenticated non-admins with 403.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new().nest(
                "/students",
                init_students_router()
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
            ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(TraceLayer::new_for_http())
}
