use sqlx::SqlitePool;
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    Error, Result, Role, UserView,
    password::{self, PasswordError},
    repository::{self, NewUser},
};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password must be between 6 and 128 characters"
    ))]
    pub password: String,
    pub role: Role,
}

#[derive(Validate)]
pub struct LoginInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone)]
pub struct Command {
    pool: SqlitePool,
}

impl Command {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, input: RegisterInput) -> Result<UserView> {
        input.validate()?;

        let existing = repository::find_by_email(&self.pool, &input.email)
            .await
            .map_err(|e| {
                error!(error = %e, "Error creating user");
                Error::UserCreation(e)
            })?;

        if existing.is_some() {
            warn!(email = %input.email, "User with this email already exists");
            return Err(Error::DuplicateEmail);
        }

        let password_hash = hash(input.password).await.map_err(|e| {
            error!(error = %e, "Error hashing password");
            Error::Hashing(e)
        })?;

        let row = repository::create(
            &self.pool,
            NewUser {
                name: input.name,
                email: input.email,
                password: password_hash,
                role: input.role,
            },
        )
        .await
        .map_err(|e| {
            // a concurrent registration won the race between lookup and insert
            if e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                warn!(error = %e, "User with this email already exists");
                return Error::DuplicateEmail;
            }

            error!(error = %e, "Error creating user");
            Error::UserCreation(e)
        })?;

        info!(user_id = %row.id, email = %row.email, "User created successfully");

        Ok(row.into())
    }

    pub async fn authenticate(&self, input: LoginInput) -> Result<UserView> {
        input.validate()?;

        let user = repository::find_by_email(&self.pool, &input.email)
            .await
            .map_err(|e| {
                error!(error = %e, "Error authenticating user");
                Error::Authentication(e)
            })?;

        let Some(user) = user else {
            warn!(email = %input.email, "User not found");
            return Err(Error::InvalidCredentials);
        };

        let is_password_valid = match verify(input.password, user.password.to_owned()).await {
            Ok(valid) => valid,
            Err(e) => {
                error!(error = %e, user_id = %user.id, "Error comparing password");
                false
            }
        };

        if !is_password_valid {
            warn!(user_id = %user.id, "Password mismatch");
            return Err(Error::InvalidCredentials);
        }

        info!(user_id = %user.id, email = %user.email, "User authenticated successfully");

        Ok(user.into())
    }
}

// Argon2 is CPU bound; keep it off the async workers.
async fn hash(password: String) -> std::result::Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || password::hash_password(&password))
        .await
        .map_err(|e| PasswordError::Hash(e.to_string()))?
}

async fn verify(password: String, hash: String) -> std::result::Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
        .await
        .map_err(|e| PasswordError::Verify(e.to_string()))?
}
