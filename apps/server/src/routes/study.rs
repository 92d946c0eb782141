//! Study endpoints: question display and progress tracking.

use axum::{
    extract::{Path, State},
    Json,
};
use mir_core::shuffle::shuffle_for_display;
use mir_core::types::{FlashcardPackage, StudyProgress};

use crate::db::{PackageRepository, ProgressRepository, SqliteRepository};
use crate::error::{ApiError, Result};
use crate::models::{MarkRequest, StudyQuestionResponse, UpdateProgressRequest};
use crate::AppState;

/// GET /api/packages/{id}/questions/{index}
///
/// Returns the canonical question plus a per-request shuffled view of
/// its alternatives. The stored order (correct first) is the source of
/// truth for grading and export; the shuffle exists only for display.
pub async fn question(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<StudyQuestionResponse>> {
    let repo = state.repository.lock().expect("repository lock");
    let pkg = load_package(&repo, &id)?;

    let question = pkg
        .questions
        .get(index)
        .ok_or_else(|| ApiError::NotFound(format!("question {} in package {}", index, id)))?
        .clone();

    let display_alternativas = shuffle_for_display(&question.alternativas, &mut rand::thread_rng());

    Ok(Json(StudyQuestionResponse {
        question,
        display_alternativas,
    }))
}

/// GET /api/packages/{id}/progress
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudyProgress>> {
    let repo = state.repository.lock().expect("repository lock");
    load_package(&repo, &id)?;
    let progress = init_progress(&repo, &id)?;
    Ok(Json(progress))
}

/// PUT /api/packages/{id}/progress
///
/// Navigation clamps to the package's question range and hides the
/// answer again, matching flip-card behavior; an explicit
/// `answer_revealed` overrides that.
pub async fn update_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProgressRequest>,
) -> Result<Json<StudyProgress>> {
    let repo = state.repository.lock().expect("repository lock");
    let pkg = load_package(&repo, &id)?;
    let mut progress = init_progress(&repo, &id)?;

    if let Some(index) = req.current_index {
        progress.current_index = index.min(pkg.total_questions.saturating_sub(1));
        progress.answer_revealed = false;
    }
    if let Some(revealed) = req.answer_revealed {
        progress.answer_revealed = revealed;
    }
    progress.last_studied = chrono::Utc::now();

    repo.save_progress(&progress)?;
    Ok(Json(progress))
}

/// POST /api/packages/{id}/progress/marks
pub async fn mark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MarkRequest>,
) -> Result<Json<StudyProgress>> {
    let repo = state.repository.lock().expect("repository lock");
    let pkg = load_package(&repo, &id)?;

    if req.question_index >= pkg.total_questions {
        return Err(ApiError::BadRequest(format!(
            "question index {} out of range",
            req.question_index
        )));
    }

    let mut progress = init_progress(&repo, &id)?;
    progress.mark(req.question_index, req.correct);
    repo.save_progress(&progress)?;
    Ok(Json(progress))
}

/// POST /api/packages/{id}/progress/reset
pub async fn reset_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudyProgress>> {
    let repo = state.repository.lock().expect("repository lock");
    load_package(&repo, &id)?;

    let progress = StudyProgress::new(id);
    repo.save_progress(&progress)?;
    Ok(Json(progress))
}

fn load_package(repo: &SqliteRepository, id: &str) -> Result<FlashcardPackage> {
    repo.get_package(id)?
        .ok_or_else(|| ApiError::NotFound(format!("package {}", id)))
}

/// Get stored progress, creating the initial row on first access.
fn init_progress(repo: &SqliteRepository, id: &str) -> Result<StudyProgress> {
    match repo.get_progress(id)? {
        Some(progress) => Ok(progress),
        None => {
            let progress = StudyProgress::new(id);
            repo.save_progress(&progress)?;
            Ok(progress)
        }
    }
}
