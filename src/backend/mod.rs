pub mod auth;
pub mod dto;
pub mod error;
mod handlers;
mod routes;

use std::env;
use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use sqlx::{Pool, Sqlite};

use auth::TokenKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Sqlite>,
    pub keys: TokenKeys,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "Backend is running" }))
        .merge(routes::api_routes())
        .with_state(state)
}

pub async fn run_server(pool: Pool<Sqlite>) -> anyhow::Result<()> {
    let state = AppState {
        db: pool,
        keys: TokenKeys::from_env(),
    };
    let app = router(state);

    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    tracing::info!(%addr, "server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
