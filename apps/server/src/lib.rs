pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::SqliteRepository;

/// Shared application state.
///
/// The repository is constructed once at startup and injected here; no
/// global connection handle exists.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<Mutex<SqliteRepository>>,
}

impl AppState {
    pub fn new(repository: SqliteRepository) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Package routes
        .route("/api/packages", post(routes::packages::upload))
        .route("/api/packages", get(routes::packages::list))
        .route("/api/packages/:id", get(routes::packages::get))
        .route("/api/packages/:id", delete(routes::packages::delete))
        .route("/api/packages/:id/export", get(routes::export::export))
        // Study routes
        .route(
            "/api/packages/:id/questions/:index",
            get(routes::study::question),
        )
        .route("/api/packages/:id/progress", get(routes::study::get_progress))
        .route(
            "/api/packages/:id/progress",
            put(routes::study::update_progress),
        )
        .route(
            "/api/packages/:id/progress/marks",
            post(routes::study::mark),
        )
        .route(
            "/api/packages/:id/progress/reset",
            post(routes::study::reset_progress),
        )
        .with_state(state)
}

fn database_path() -> PathBuf {
    std::env::var("MIR_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("mir-flashcards.db"))
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = database_path();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    tracing::info!("Opening package store at {}", db_path.display());
    let repository = SqliteRepository::open(&db_path)?;
    let state = AppState::new(repository);

    let app = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
