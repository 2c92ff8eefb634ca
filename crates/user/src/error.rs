use strum::{AsRefStr, Display};

use crate::password::PasswordError;

/// Errors raised by the credential service.
///
/// Messages are deliberately generic: storage and hashing causes are kept
/// as `source` for logging and never rendered by `Display`. Callers select
/// behaviour through [`Error::kind`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Error hashing password")]
    Hashing(#[source] PasswordError),

    #[error("Error creating user")]
    UserCreation(#[source] sqlx::Error),

    #[error("Error authenticating user")]
    Authentication(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Duplicate,
    InvalidCredentials,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::DuplicateEmail => ErrorKind::Duplicate,
            Error::InvalidCredentials => ErrorKind::InvalidCredentials,
            Error::Hashing(_) | Error::UserCreation(_) | Error::Authentication(_) => {
                ErrorKind::Internal
            }
        }
    }
}
