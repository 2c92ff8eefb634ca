//! Session token signing and verification

use gatekeeper_user::Role;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::config::JwtConfig;

/// Identity carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub id: String,
    pub role: Role,
    pub email: String,
}

/// JWT payload: the session claims plus expiry, nothing else.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    role: Role,
    email: String,
    exp: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT secret is not configured")]
    MissingSecret,

    #[error("Failed to sign token")]
    Sign(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid or expired token")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            secret: secret.into(),
            lifetime,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(
            config.secret.to_owned(),
            Duration::minutes(config.lifetime_minutes),
        )
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn issue(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        self.issue_at(claims, OffsetDateTime::now_utc())
    }

    /// Sign `claims` as if the current time were `now`.
    pub fn issue_at(
        &self,
        claims: &SessionClaims,
        now: OffsetDateTime,
    ) -> Result<String, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let exp = (now + self.lifetime).unix_timestamp().max(0) as u64;
        let claims = Claims {
            id: claims.id.to_owned(),
            role: claims.role,
            email: claims.email.to_owned(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Sign)
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(TokenError::Invalid)?;

        Ok(SessionClaims {
            id: token_data.claims.id,
            role: token_data.claims.role,
            email: token_data.claims.email,
        })
    }
}
