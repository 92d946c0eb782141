//! API request and response types.

use serde::{Deserialize, Serialize};

// Re-export shared types from mir-core
pub use mir_core::types::{
    Alternative, FlashcardPackage, PackageMetadata, ParserConfig, Question, StudyProgress,
};

pub use crate::db::PackageSummary;

/// POST /api/packages request body.
///
/// `text` is reading-order extracted text; extraction itself happens in
/// the client, which owns the PDF bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestRequest {
    /// Package name; defaults to the file name without its extension.
    #[serde(default)]
    pub nombre: Option<String>,
    /// Extracted text, columns already linearized.
    pub text: String,
    /// Keep alternatives in source order.
    #[serde(default)]
    pub preserve_order: bool,
    /// Source document metadata.
    pub metadata: PackageMetadata,
}

/// GET /api/packages response body.
#[derive(Debug, Clone, Serialize)]
pub struct PackageListResponse {
    pub packages: Vec<PackageSummary>,
}

/// GET /api/packages/{id}/questions/{index} response body.
///
/// `question` is the canonical record (correct alternative first);
/// `display_alternativas` is a per-request shuffle for on-screen order.
#[derive(Debug, Clone, Serialize)]
pub struct StudyQuestionResponse {
    pub question: Question,
    pub display_alternativas: Vec<Alternative>,
}

/// PUT /api/packages/{id}/progress request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProgressRequest {
    pub current_index: Option<usize>,
    pub answer_revealed: Option<bool>,
}

/// POST /api/packages/{id}/progress/marks request body.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkRequest {
    pub question_index: usize,
    pub correct: bool,
}
