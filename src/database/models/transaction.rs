use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct Transaction {
    pub id: i64,
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category_id: Option<i64>,
    pub user_id: i64,
}
