use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::middleware::auth::{Claims, RealmAccess};
use crate::utils::errors::AppError;

/// Creates a signed access token carrying the given roles in the
/// `realm_access.roles` claim. Tokens are normally issued by an external
/// identity provider; this is used by tests and operational tooling.
pub fn create_access_token(
    subject: &str,
    roles: &[&str],
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    // Signed arithmetic: a non-positive configured expiry must yield an exp
    // in the past, not wrap around
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        sub: subject.to_string(),
        exp: exp as usize,
        iat: now as usize,
        realm_access: Some(RealmAccess {
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
