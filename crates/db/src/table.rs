use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Password,
    Role,
    CreatedAt,
}
