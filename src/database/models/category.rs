use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub user_id: i64,
}
