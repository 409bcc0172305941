//! JWT token generation and validation

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Signature algorithm is pinned rather than left to library defaults
const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username the session was issued to
    pub sub: String,
    /// Issued-at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
}

/// User information extracted from a validated token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

/// Generate a signed session token for a user
pub fn generate_token(
    username: &str,
    secret: &str,
    lifetime_seconds: u64,
) -> jsonwebtoken::errors::Result<String> {
    let now = unix_now();

    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp: now + lifetime_seconds,
    };

    encode(
        &Header::new(TOKEN_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate signature and expiry, and decode the token
pub fn validate_token(
    token: &str,
    secret: &str,
    leeway_seconds: u64,
) -> jsonwebtoken::errors::Result<AuthUser> {
    let mut validation = Validation::new(TOKEN_ALGORITHM);
    validation.leeway = leeway_seconds;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(AuthUser {
        username: token_data.claims.sub,
    })
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
