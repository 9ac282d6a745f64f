use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::SecurityConfig;
use crate::database::models::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub username: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl Claims {
    pub fn new(user: &User, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub
            .parse()
            .map_err(|_| TokenError::Malformed(format!("subject is not a user id: {}", self.sub)))
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("token lifetime of {0} minutes is outside 1..={max}", max = MAX_TTL_MINUTES)]
    InvalidLifetime(i64),

    #[error("JWT generation error: {0}")]
    Signing(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed: {0}")]
    Malformed(String),
}

/// Longest configurable token lifetime: one year.
pub const MAX_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Signs and verifies HS256 bearer tokens with a server-held secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, TokenError> {
        let minutes = security.jwt_expiry_minutes;
        let ttl = Some(minutes)
            .filter(|m| (1..=MAX_TTL_MINUTES).contains(m))
            .and_then(Duration::try_minutes)
            .ok_or(TokenError::InvalidLifetime(minutes))?;
        Self::new(&security.jwt_secret, ttl)
    }

    /// Lifetime of freshly issued tokens, in seconds.
    pub fn expires_in(&self) -> i64 {
        self.ttl.num_seconds()
    }

    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        self.issue_with_ttl(user, self.ttl)
    }

    pub fn issue_with_ttl(&self, user: &User, ttl: Duration) -> Result<String, TokenError> {
        self.sign(&Claims::new(user, ttl))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(e.to_string()),
        })?;

        Ok(data.claims)
    }
}
