use gatekeeper_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::{Role, UserView};

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: sqlx::types::Text<Role>,
    pub created_at: i64,
}

impl From<UserRow> for UserView {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role.0,
            created_at: row.created_at,
        }
    }
}

pub(crate) async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    let statement = Query::select()
        .columns([
            User::Id,
            User::Name,
            User::Email,
            User::Password,
            User::Role,
            User::CreatedAt,
        ])
        .from(User::Table)
        .and_where(Expr::col(User::Email).eq(email))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await
}

pub(crate) struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

pub(crate) async fn create(pool: &SqlitePool, input: NewUser) -> Result<UserRow, sqlx::Error> {
    let id = ulid::Ulid::new().to_string();
    let now = OffsetDateTime::now_utc().unix_timestamp();

    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Id,
            User::Name,
            User::Email,
            User::Password,
            User::Role,
            User::CreatedAt,
        ])
        .values_panic([
            id.to_owned().into(),
            input.name.to_owned().into(),
            input.email.to_owned().into(),
            input.password.to_owned().into(),
            input.role.to_string().into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(UserRow {
        id,
        name: input.name,
        email: input.email,
        password: input.password,
        role: sqlx::types::Text(input.role),
        created_at: now,
    })
}
