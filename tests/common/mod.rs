#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use gatekeeper::{
    AppState,
    auth::{SessionCookies, TokenIssuer},
};
use http_body_util::BodyExt;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use time::Duration;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    gatekeeper::db::migrate(&pool).await.unwrap();

    pool
}

pub struct TestApp {
    pub router: Router,
    pub tokens: TokenIssuer,
    pub pool: SqlitePool,
}

pub async fn create_test_app(pool: SqlitePool) -> TestApp {
    let tokens = TokenIssuer::new(JWT_SECRET, Duration::minutes(15));
    let state = AppState {
        pool: pool.clone(),
        users: gatekeeper_user::Command::new(pool.clone()),
        tokens: tokens.clone(),
        cookies: SessionCookies::new(false, Duration::minutes(15)),
    };

    TestApp {
        router: gatekeeper::create_app(state),
        tokens,
        pool,
    }
}

impl TestApp {
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Value of the `token` Set-Cookie header, if any.
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("token="))
        .map(str::to_owned)
}

pub fn cookie_value(set_cookie: &str) -> &str {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("token="))
        .unwrap()
}
