//! Package assembly: parse, validate, wrap.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::parser::parse;
use crate::types::{FlashcardPackage, PackageMetadata, ParserConfig};
use crate::validate::validate_question;

/// Build a flashcard package from extracted exam text.
///
/// This is the only fallible surface of the core: the parser drops
/// malformed blocks silently, and an outcome of zero valid questions is
/// terminal for the caller.
pub fn build_package(
    nombre: &str,
    text: &str,
    config: &ParserConfig,
    metadata: PackageMetadata,
) -> Result<FlashcardPackage> {
    if text.trim().is_empty() {
        return Err(CoreError::EmptyText);
    }

    let questions: Vec<_> = parse(text, config)
        .into_iter()
        .filter(validate_question)
        .collect();

    if questions.is_empty() {
        return Err(CoreError::NoValidQuestions);
    }

    Ok(FlashcardPackage {
        id: Uuid::new_v4().to_string(),
        nombre: nombre.to_string(),
        created_at: Utc::now(),
        total_questions: questions.len(),
        questions,
        metadata,
    })
}
