use chrono::NaiveDateTime;
use sqlx::{Pool, Sqlite};

use crate::database::models::{Category, Service, ServiceRecord, Transaction, User};

/*
This file contains all the SQL for the application. Every read and write
for user-owned rows filters by the requesting user's id, so a row that is
missing and a row that belongs to someone else are indistinguishable to
the caller.
 */

/*==========User Queries===========*/

pub async fn find_user_by_email(
    pool: &Pool<Sqlite>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn create_user(
    pool: &Pool<Sqlite>,
    email: &str,
    name: Option<&str>,
    password_hash: &str,
) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO users (email, name, password_hash)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/*==========Category Queries===========*/

pub async fn list_categories(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, color, user_id
        FROM categories
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn create_category(
    pool: &Pool<Sqlite>,
    user_id: i64,
    name: &str,
    color: Option<&str>,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (name, color, user_id)
        VALUES (?, ?, ?)
        RETURNING id, name, color, user_id
        "#,
    )
    .bind(name)
    .bind(color)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

// Scoped lookup: only returns a row owned by `user_id`.
pub async fn get_category(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, color, user_id
        FROM categories
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

// `None` means no row matched the scoped filter, even if it existed a
// moment earlier.
pub async fn update_category(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
    name: &str,
    color: Option<&str>,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        UPDATE categories
        SET name = ?, color = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, name, color, user_id
        "#,
    )
    .bind(name)
    .bind(color)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_category(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM categories
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/*==========Service Queries===========*/

pub async fn list_services(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        SELECT id, name, amount, user_id
        FROM services
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn create_service(
    pool: &Pool<Sqlite>,
    user_id: i64,
    name: &str,
    amount: f64,
) -> Result<Service, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        INSERT INTO services (name, amount, user_id)
        VALUES (?, ?, ?)
        RETURNING id, name, amount, user_id
        "#,
    )
    .bind(name)
    .bind(amount)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn get_service(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        SELECT id, name, amount, user_id
        FROM services
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn update_service(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
    name: &str,
    amount: f64,
) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        UPDATE services
        SET name = ?, amount = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, name, amount, user_id
        "#,
    )
    .bind(name)
    .bind(amount)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_service(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM services
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/*==========Service Record Queries===========*/
// Records are scoped through their owning service: callers must resolve
// the service with get_service (id + user_id) before touching records.

pub async fn list_service_records(
    pool: &Pool<Sqlite>,
    service_id: i64,
) -> Result<Vec<ServiceRecord>, sqlx::Error> {
    sqlx::query_as::<_, ServiceRecord>(
        r#"
        SELECT id, service_id, date, amount
        FROM service_records
        WHERE service_id = ?
        "#,
    )
    .bind(service_id)
    .fetch_all(pool)
    .await
}

pub async fn create_service_record(
    pool: &Pool<Sqlite>,
    service_id: i64,
    date: NaiveDateTime,
    amount: f64,
) -> Result<ServiceRecord, sqlx::Error> {
    sqlx::query_as::<_, ServiceRecord>(
        r#"
        INSERT INTO service_records (service_id, date, amount)
        VALUES (?, ?, ?)
        RETURNING id, service_id, date, amount
        "#,
    )
    .bind(service_id)
    .bind(date)
    .bind(amount)
    .fetch_one(pool)
    .await
}

pub async fn delete_service_record(
    pool: &Pool<Sqlite>,
    id: i64,
    service_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM service_records
        WHERE id = ? AND service_id = ?
        "#,
    )
    .bind(id)
    .bind(service_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/*==========Transaction Queries===========*/

pub async fn list_transactions(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, description, amount, date, category_id, user_id
        FROM transactions
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn create_transaction(
    pool: &Pool<Sqlite>,
    user_id: i64,
    description: Option<&str>,
    amount: f64,
    date: NaiveDateTime,
    category_id: Option<i64>,
) -> Result<Transaction, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO transactions (description, amount, date, category_id, user_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, description, amount, date, category_id, user_id
        "#,
    )
    .bind(description)
    .bind(amount)
    .bind(date)
    .bind(category_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn delete_transaction(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM transactions
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
