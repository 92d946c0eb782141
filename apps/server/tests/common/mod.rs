//! Common test utilities for integration tests.
//!
//! The package store runs on an in-memory SQLite database, so tests
//! need no external services and no environment setup.

pub mod fixtures;

use std::sync::{Arc, Mutex};

use axum::Router;

use mir_flashcards_server::db::SqliteRepository;
use mir_flashcards_server::{app, AppState};

/// Test context wrapping a router over an in-memory package store.
pub struct TestContext {
    pub repository: Arc<Mutex<SqliteRepository>>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    pub fn new() -> Self {
        let repository = SqliteRepository::open_in_memory().expect("open in-memory database");
        let state = AppState::new(repository);
        let repository = state.repository.clone();
        let app = app(state);

        Self { repository, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Upload a package through the API and return its id.
pub async fn upload_package(server: &axum_test::TestServer, nombre: &str, text: &str) -> String {
    let response = server
        .post("/api/packages")
        .json(&fixtures::ingest_request(nombre, text))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    body["id"].as_str().expect("package id").to_string()
}
