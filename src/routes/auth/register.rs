//! Sign-up route handler

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use axum_extra::extract::CookieJar;
use gatekeeper_user::{RegisterInput, Role};
use serde::Deserialize;
use tracing::info;

use super::{AuthResponse, session_claims};
use crate::{auth::TOKEN_COOKIE_NAME, error::AppError, routes::AppState};

/// Missing fields default to empty so they surface as field-level
/// validation errors instead of a body rejection.
#[derive(Deserialize)]
pub struct SignUpBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// POST /api/auth/sign-up
pub async fn post_sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SignUpBody>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AppError> {
    let Json(body) = payload?;

    let user = state
        .users
        .register(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
            role: body.role,
        })
        .await?;

    let token = state.tokens.issue(&session_claims(&user))?;
    let jar = state.cookies.set(jar, TOKEN_COOKIE_NAME, &token, None);

    info!(user_id = %user.id, email = %user.email, "User registered successfully");

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            message: "User registered",
            user: user.into(),
        }),
    ))
}
