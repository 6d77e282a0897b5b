use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Nested role claim, Keycloak style: `{"realm_access": {"roles": [...]}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// JWT claims carried by access tokens.
///
/// `realm_access` is optional: a token without the claim is still a valid
/// authenticated token, it just grants no authorities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm_access: Option<RealmAccess>,
}

/// Prefix applied to every role claim when mapping to an internal authority.
pub const AUTHORITY_PREFIX: &str = "ROLE_";

/// Extractor that validates the bearer token and provides the authenticated
/// user's claims. Rejects with 401 when the token is missing or invalid.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Authorities granted by the token: each `realm_access.roles` entry
    /// prefixed with `ROLE_`. A missing claim or empty list yields none.
    pub fn authorities(&self) -> Vec<String> {
        self.0
            .realm_access
            .as_ref()
            .map(|ra| {
                ra.roles
                    .iter()
                    .map(|r| format!("{AUTHORITY_PREFIX}{r}"))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check if the token grants a specific authority.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.0
            .realm_access
            .as_ref()
            .is_some_and(|ra| {
                ra.roles
                    .iter()
                    .any(|r| format!("{AUTHORITY_PREFIX}{r}") == authority)
            })
    }

    /// The token subject.
    pub fn subject(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
