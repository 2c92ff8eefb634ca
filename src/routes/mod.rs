use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::auth::{SessionCookies, TokenIssuer};
use crate::config::Config;

pub mod auth;
mod health;

pub use health::{health, ready};

/// Shared, immutable per-request context.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: gatekeeper_user::Command,
    pub tokens: TokenIssuer,
    pub cookies: SessionCookies,
}

impl AppState {
    pub fn new(config: &Config, pool: SqlitePool) -> Self {
        let tokens = TokenIssuer::from_config(&config.jwt);

        Self {
            users: gatekeeper_user::Command::new(pool.clone()),
            cookies: SessionCookies::from_config(config, &tokens),
            tokens,
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/api/auth/sign-up", post(auth::post_sign_up))
        .route("/api/auth/sign-in", post(auth::post_sign_in))
        .route("/api/auth/sign-out", post(auth::post_sign_out))
        .route("/api/auth/me", get(auth::get_me))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
