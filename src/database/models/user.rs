use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
}
