//! Credential service: password hashing, user lookup and registration.

mod command;
mod error;
pub mod password;
mod repository;

pub use command::{Command, LoginInput, RegisterInput};
pub use error::{Error, ErrorKind, Result};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A user as seen outside the credential service. There is no password
/// field, so the stored hash cannot leak through it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: i64,
}
