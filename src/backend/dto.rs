//! Wire representations. These control exactly which fields leave the
//! server; the `User` model (and its password hash) never does.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::database::models::{Category, Service, ServiceRecord, Transaction};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub user_id: i64,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            color: c.color,
            user_id: c.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceDto {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub user_id: i64,
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            amount: s.amount,
            user_id: s.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecordDto {
    pub id: i64,
    pub service_id: i64,
    pub date: NaiveDateTime,
    pub amount: f64,
}

impl From<ServiceRecord> for ServiceRecordDto {
    fn from(r: ServiceRecord) -> Self {
        Self {
            id: r.id,
            service_id: r.service_id,
            date: r.date,
            amount: r.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionDto {
    pub id: i64,
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category_id: Option<i64>,
    pub user_id: i64,
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            description: t.description,
            amount: t.amount,
            date: t.date,
            category_id: t.category_id,
            user_id: t.user_id,
        }
    }
}
