//! RemNote export endpoint.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use mir_core::export::to_remnote;

use crate::db::PackageRepository;
use crate::error::{ApiError, Result};
use crate::AppState;

/// GET /api/packages/{id}/export
///
/// Plain-text RemNote document, byte-for-byte the importer format.
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let repo = state.repository.lock().expect("repository lock");
    let pkg = repo
        .get_package(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("package {}", id)))?;

    let content = to_remnote(&pkg);
    let disposition = format!("attachment; filename=\"{}_remnote.txt\"", pkg.nombre);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    ))
}
