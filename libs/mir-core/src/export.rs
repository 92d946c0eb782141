//! RemNote text export.
//!
//! The target format is line-oriented and whitespace-significant:
//!
//! ```text
//! <pregunta> == A)
//!  -<texto of correct alternative>
//!    -<comentario, only under the correct alternative>
//!  -<texto>
//!  -<texto>
//!  -<texto>
//!
//! ```
//!
//! One leading space before each alternative dash, exactly three before
//! the comment dash, one blank line after each question. The importer
//! on the other side matches these bytes exactly.

use serde::{Deserialize, Serialize};

use crate::types::{FlashcardPackage, Question};

/// Serialize a whole package to RemNote text.
pub fn to_remnote(pkg: &FlashcardPackage) -> String {
    render(&pkg.questions)
}

/// Serialize the first `max_questions` questions, with a trailer noting
/// how many were omitted.
pub fn remnote_preview(pkg: &FlashcardPackage, max_questions: usize) -> String {
    let shown = &pkg.questions[..pkg.questions.len().min(max_questions)];
    let content = render(shown);

    if pkg.questions.len() > max_questions {
        format!(
            "{}\n... ({} more questions)",
            content,
            pkg.questions.len() - max_questions
        )
    } else {
        content
    }
}

fn render(questions: &[Question]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for question in questions {
        push_question_lines(question, &mut lines);
        lines.push(String::new());
    }
    lines.join("\n")
}

fn push_question_lines(question: &Question, lines: &mut Vec<String>) {
    lines.push(format!("{} == A)", question.pregunta));

    for (i, alt) in question.alternativas.iter().enumerate() {
        lines.push(format!(" -{}", alt.texto));

        // Comment only under the first (correct) alternative.
        if i == 0 {
            if let Some(comentario) = &alt.comentario {
                lines.push(format!("   -{}", comentario));
            }
        }
    }
}

/// Result of checking serialized RemNote output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check that comment lines only ever follow the first alternative of a
/// question.
pub fn check_remnote_format(content: &str) -> FormatReport {
    let mut errors = Vec::new();
    let mut alternative_count = 0usize;

    for (idx, line) in content.lines().enumerate() {
        if line.contains(" == A)") {
            alternative_count = 0;
        } else if line.starts_with(" -") {
            alternative_count += 1;
        } else if line.starts_with("   -") && alternative_count != 1 {
            errors.push(format!("line {}: comment not after first alternative", idx + 1));
        }
    }

    FormatReport {
        valid: errors.is_empty(),
        errors,
    }
}
