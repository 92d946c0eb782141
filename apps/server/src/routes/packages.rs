//! Package endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{FlashcardPackage, IngestRequest, PackageListResponse};
use crate::services::ingest::ingest_package;
use crate::AppState;

use crate::db::PackageRepository;

/// POST /api/packages
pub async fn upload(
    State(state): State<AppState>,
    Json(req): Json<IngestRequest>,
) -> Result<(StatusCode, Json<FlashcardPackage>)> {
    let repo = state.repository.lock().expect("repository lock");
    let pkg = ingest_package(&repo, req)?;
    Ok((StatusCode::CREATED, Json(pkg)))
}

/// GET /api/packages
pub async fn list(State(state): State<AppState>) -> Result<Json<PackageListResponse>> {
    let repo = state.repository.lock().expect("repository lock");
    let packages = repo.get_package_summaries()?;
    Ok(Json(PackageListResponse { packages }))
}

/// GET /api/packages/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FlashcardPackage>> {
    let repo = state.repository.lock().expect("repository lock");
    let pkg = repo
        .get_package(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("package {}", id)))?;
    Ok(Json(pkg))
}

/// DELETE /api/packages/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let repo = state.repository.lock().expect("repository lock");
    if repo.delete_package(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("package {}", id)))
    }
}
