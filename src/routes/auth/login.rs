//! Sign-in, sign-out and session route handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use axum_extra::extract::CookieJar;
use gatekeeper_user::{LoginInput, Role};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AuthResponse, MessageResponse, session_claims};
use crate::{
    auth::{AuthUser, TOKEN_COOKIE_NAME},
    error::AppError,
    routes::AppState,
};

#[derive(Deserialize)]
pub struct SignInBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/sign-in
pub async fn post_sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SignInBody>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let Json(body) = payload?;

    let user = state
        .users
        .authenticate(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let token = state.tokens.issue(&session_claims(&user))?;
    let jar = state.cookies.set(jar, TOKEN_COOKIE_NAME, &token, None);

    info!(user_id = %user.id, email = %user.email, "User signed in successfully");

    Ok((
        jar,
        Json(AuthResponse {
            message: "User signed in",
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/sign-out - Clear session cookie
///
/// The token itself stays valid until it expires.
pub async fn post_sign_out(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = state.cookies.clear(jar, TOKEN_COOKIE_NAME, None);

    info!("User signed out successfully");

    (
        jar,
        Json(MessageResponse {
            message: "User signed out successfully",
        }),
    )
}

#[derive(Debug, Serialize)]
pub struct SessionUserBody {
    pub id: String,
    pub role: Role,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: SessionUserBody,
}

/// GET /api/auth/me - Claims of the current session
pub async fn get_me(AuthUser(claims): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: SessionUserBody {
            id: claims.id,
            role: claims.role,
            email: claims.email,
        },
    })
}
