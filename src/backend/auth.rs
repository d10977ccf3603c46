//! Stateless authentication: Argon2id password hashing plus signed bearer
//! tokens. Identity extraction is a pure function of the token and the
//! decoding key; there is no server-side session store.

use std::env;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;
use crate::backend::AppState;

const TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn from_env() -> Self {
        let secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-secret".to_string());
        Self::new(secret.as_bytes())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: i64,
}

pub fn issue_token(keys: &TokenKeys, user_id: i64) -> Result<String, ApiError> {
    let claims = Claims {
        sub: user_id,
        exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
    };
    encode(&Header::default(), &claims, &keys.encoding)
        .map_err(|e| ApiError::Internal(format!("token encoding failed: {e}")))
}

/// Returns the user id carried by a valid token. Bad signature, garbage
/// input and lapsed `exp` all collapse into `Unauthorized`.
pub fn decode_token(keys: &TokenKeys, token: &str) -> Result<i64, ApiError> {
    decode::<Claims>(token, &keys.decoding, &Validation::default())
        .map(|data| data.claims.sub)
        .map_err(|_| ApiError::Unauthorized)
}

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))
}

/// An unparsable stored hash fails verification instead of surfacing an
/// error, so login keeps its uniform invalid-credentials response.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header on every protected route.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;
        let token = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;
        let user_id = decode_token(&state.keys, token)?;
        Ok(AuthUser(user_id))
    }
}
