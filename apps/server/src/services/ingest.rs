//! Ingestion pipeline: upload validation, parsing, package assembly.

use mir_core::package::build_package;
use mir_core::types::{FlashcardPackage, ParserConfig};
use mir_core::validate::parsing_stats;

use crate::db::{PackageRepository, SqliteRepository};
use crate::error::{ApiError, Result};
use crate::models::IngestRequest;

/// Maximum accepted source-file size in bytes (50 MB).
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Run the full ingestion pipeline and persist the resulting package.
///
/// Upload validation failures abort before any parsing happens; a parse
/// that yields zero valid questions is terminal for the upload.
pub fn ingest_package(repo: &SqliteRepository, req: IngestRequest) -> Result<FlashcardPackage> {
    validate_upload(&req)?;

    let nombre = req
        .nombre
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| default_name(&req.metadata.file_name));

    let config = ParserConfig {
        preserve_order: req.preserve_order,
    };
    let pkg = build_package(&nombre, &req.text, &config, req.metadata)?;

    let stats = parsing_stats(&pkg.questions);
    tracing::info!(
        package = %pkg.nombre,
        total = stats.total,
        with_comments = stats.with_comments,
        average_alternative_length = stats.average_alternative_length,
        "parsed package"
    );

    repo.save_package(&pkg)?;
    Ok(pkg)
}

fn validate_upload(req: &IngestRequest) -> Result<()> {
    if !is_pdf_file_name(&req.metadata.file_name) {
        return Err(ApiError::BadRequest("source file must be a PDF".to_string()));
    }
    if req.metadata.file_size > MAX_FILE_SIZE {
        return Err(ApiError::BadRequest(
            "PDF file must be smaller than 50MB".to_string(),
        ));
    }
    Ok(())
}

fn is_pdf_file_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

fn default_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => file_name[..dot].to_string(),
        _ => file_name.to_string(),
    }
}
