use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::backend::{handlers, AppState};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/categories",
            get(handlers::categories::list_categories)
                .post(handlers::categories::create_category),
        )
        .route(
            "/api/categories/:id",
            put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )
        .route(
            "/api/services",
            get(handlers::services::list_services).post(handlers::services::create_service),
        )
        .route(
            "/api/services/:id",
            put(handlers::services::update_service)
                .delete(handlers::services::delete_service),
        )
        .route(
            "/api/services/:id/records",
            get(handlers::services::list_service_records)
                .post(handlers::services::create_service_record),
        )
        .route(
            "/api/services/:id/records/:record_id",
            delete(handlers::services::delete_service_record),
        )
        .route(
            "/api/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::create_transaction),
        )
        .route(
            "/api/transactions/:id",
            delete(handlers::transactions::delete_transaction),
        )
}
