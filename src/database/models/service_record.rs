use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct ServiceRecord {
    pub id: i64,
    pub service_id: i64,
    pub date: NaiveDateTime,
    pub amount: f64,
}
