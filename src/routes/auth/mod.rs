//! Authentication route handlers

pub mod login;
pub mod register;

use gatekeeper_user::{Role, UserView};
use serde::Serialize;

use crate::auth::SessionClaims;

pub use login::{get_me, post_sign_in, post_sign_out};
pub use register::post_sign_up;

/// User as rendered in response bodies.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<UserView> for UserBody {
    fn from(user: UserView) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: UserBody,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub(crate) fn session_claims(user: &UserView) -> SessionClaims {
    SessionClaims {
        id: user.id.to_owned(),
        role: user.role,
        email: user.email.to_owned(),
    }
}
