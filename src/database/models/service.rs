use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub user_id: i64,
}
