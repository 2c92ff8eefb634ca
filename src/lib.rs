pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

/// Create app router
///
/// Useful for integration testing without starting the full server.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
}
