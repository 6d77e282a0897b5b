//! Authority-based authorization middleware.
//!
//! Authentication happens first: extracting [`AuthUser`] rejects requests
//! without a valid bearer token with 401. Only then is the required
//! authority checked, rejecting with 403 when it is missing.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Authority required for every route under the `/api` prefix.
pub const ADMIN_AUTHORITY: &str = "ROLE_ADMIN";

/// Middleware function that checks the authenticated user for an authority.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/admin-only", get(handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_authority(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    authority: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_authority(&auth_user, authority)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Route layer for admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_authority(State(state), req, next, ADMIN_AUTHORITY).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Helper to check an authority inside handler logic.
pub fn check_authority(auth_user: &AuthUser, authority: &str) -> Result<(), AppError> {
    if !auth_user.has_authority(authority) {
        return Err(AppError::forbidden(format!(
            "Access denied. Missing required authority: {}",
            authority
        )));
    }

    Ok(())
}
