//! Core types for the MIR flashcard system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One answer option for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    /// Original position in the source document (1-4).
    pub numero: u32,
    /// Text of the alternative.
    pub texto: String,
    /// Explanatory comment, carried only by the declared correct answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
}

/// Question recovered from extracted exam text.
///
/// After the canonical reorder the first alternative is the correct one
/// (unless the parser ran in preserve-order mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question number in the source document.
    pub numero: u32,
    /// Question text.
    pub pregunta: String,
    /// Exactly four alternatives.
    pub alternativas: Vec<Alternative>,
    /// Declared correct answer before reordering (1-4, 0 when absent).
    pub respuesta_original: u32,
    /// Comment explaining the correct answer, mirrored onto it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Keep alternatives in source order instead of moving the correct
    /// one to the front.
    pub preserve_order: bool,
}

/// Metadata about the source document a package was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Size of the source file in bytes.
    pub file_size: u64,
    /// Number of pages in the source document.
    pub page_count: u32,
    /// Original filename.
    pub file_name: String,
}

/// A named collection of questions derived from one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardPackage {
    /// Unique identifier (v4 UUID).
    pub id: String,
    /// Package name, usually the source filename without extension.
    pub nombre: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Number of questions in the package.
    pub total_questions: usize,
    /// All questions, validated and canonically ordered.
    pub questions: Vec<Question>,
    /// Source document metadata.
    pub metadata: PackageMetadata,
}

/// Study progress for one package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyProgress {
    pub package_id: String,
    /// Current question index (0-based).
    pub current_index: usize,
    /// Whether the answer is currently revealed.
    pub answer_revealed: bool,
    /// Question indices marked correct.
    pub correct_answers: Vec<usize>,
    /// Question indices marked incorrect.
    pub incorrect_answers: Vec<usize>,
    /// Last studied timestamp.
    pub last_studied: DateTime<Utc>,
}

impl StudyProgress {
    /// Fresh progress for a package.
    pub fn new(package_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            current_index: 0,
            answer_revealed: false,
            correct_answers: Vec::new(),
            incorrect_answers: Vec::new(),
            last_studied: Utc::now(),
        }
    }

    /// Mark a question correct or incorrect.
    ///
    /// A question is never in both sets: marking it one way removes it
    /// from the other.
    pub fn mark(&mut self, question_index: usize, correct: bool) {
        self.correct_answers.retain(|&i| i != question_index);
        self.incorrect_answers.retain(|&i| i != question_index);
        if correct {
            self.correct_answers.push(question_index);
        } else {
            self.incorrect_answers.push(question_index);
        }
        self.last_studied = Utc::now();
    }
}
