//! Authentication module
//!
//! Provides JWT session tokens carried in an HTTP-only cookie

pub mod session;
pub mod token;

pub use session::{CookieOptions, CookieOverrides, SessionCookies, TOKEN_COOKIE_NAME};
pub use token::{SessionClaims, TokenError, TokenIssuer};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::{error::AppError, routes::AppState};

/// Claims of the caller, read from the session cookie and verified.
pub struct AuthUser(pub SessionClaims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let Some(token) = state.cookies.get(&jar, TOKEN_COOKIE_NAME) else {
            debug!("No session cookie in request");
            return Err(AppError::Unauthorized);
        };

        let claims = state.tokens.verify(&token).map_err(|e| match e {
            TokenError::MissingSecret => AppError::from(e),
            e => {
                debug!(error = %e, "Rejected session token");
                AppError::Unauthorized
            }
        })?;

        Ok(AuthUser(claims))
    }
}
