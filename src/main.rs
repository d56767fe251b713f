mod config;
mod error;
mod loader;
mod models;
mod projection;
mod routes;
mod session;
mod state;
mod swapi;
mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, loader::Catalog, session::SessionStore, swapi::SwapiClient};

pub struct AppState {
    pub catalog: Catalog,
    pub sessions: SessionStore,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/query", post(routes::query))
        .route("/sort", post(routes::sort))
        .route("/select/{id}", post(routes::select))
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,holocron=debug".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = wreq::Client::builder().build()?;
    let catalog = loader::spawn(SwapiClient::new(http, config.films_url.clone()));

    let sessions = SessionStore::with_limits(config.max_sessions, config.session_idle);
    let state = Arc::new(AppState { catalog, sessions });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, films_url = %config.films_url, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
