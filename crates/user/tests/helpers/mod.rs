use std::{path::PathBuf, str::FromStr};

use gatekeeper_user::{Command, RegisterInput, Role, UserView};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    gatekeeper_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub async fn create_user(cmd: &Command, name: impl Into<String>) -> anyhow::Result<UserView> {
    let name = name.into();
    let user = cmd
        .register(RegisterInput {
            email: format!("{name}@gatekeeper.localhost"),
            name,
            password: "my_password".to_owned(),
            role: Role::User,
        })
        .await?;

    Ok(user)
}
