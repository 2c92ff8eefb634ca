use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatekeeper_user::ErrorKind;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::auth::TokenError;

/// Field name to the messages of every check it failed.
pub type ValidationDetails = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(ValidationDetails),

    #[error("Email already exist")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ValidationDetails>,
}

/// Render `err` and its sources as one line, for server-side logs only.
fn report<E>(err: E) -> String
where
    E: std::error::Error + Send + Sync + 'static,
{
    format!("{:#}", anyhow::Error::new(err))
}

pub fn validation_details(errors: &ValidationErrors) -> ValidationDetails {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl From<gatekeeper_user::Error> for AppError {
    fn from(err: gatekeeper_user::Error) -> Self {
        match err.kind() {
            ErrorKind::Validation => match err {
                gatekeeper_user::Error::Validation(errors) => {
                    AppError::Validation(validation_details(&errors))
                }
                other => AppError::Internal(report(other)),
            },
            ErrorKind::Duplicate => AppError::DuplicateEmail,
            ErrorKind::InvalidCredentials => AppError::InvalidCredentials,
            ErrorKind::Internal => AppError::Internal(report(err)),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Internal(report(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let mut details = ValidationDetails::new();
        details.insert("body".to_string(), vec![rejection.body_text()]);
        AppError::Validation(details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        let (status, details) = match self {
            AppError::Validation(details) => (StatusCode::BAD_REQUEST, Some(details)),
            AppError::DuplicateEmail => (StatusCode::CONFLICT, None),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, None),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, None),
            AppError::Internal(cause) => {
                tracing::error!(error = %cause, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
