//! Test fixtures and factory functions for exam text and request bodies.

use serde_json::json;

/// Generate exam text with the given number of well-formed question
/// blocks, each with a declared answer and a comment.
pub fn sample_exam_text(num_questions: usize) -> String {
    (1..=num_questions)
        .map(|i| {
            format!(
                "{i}. Sample question number {i}?\n\
                 1. Alternative one\n\
                 2. Alternative two\n\
                 3. Alternative three\n\
                 4. Alternative four\n\
                 Respuesta correcta: 2\n\
                 Comentario: Explanation {i}.\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single block without any declared answer or comment.
pub fn block_without_answer() -> String {
    "1. Question with no declared answer?\n\
     1. A\n\
     2. B\n\
     3. C\n\
     4. D\n"
        .to_string()
}

/// Create an ingest request body.
pub fn ingest_request(nombre: &str, text: &str) -> serde_json::Value {
    json!({
        "nombre": nombre,
        "text": text,
        "metadata": {
            "file_size": 2048,
            "page_count": 3,
            "file_name": format!("{}.pdf", nombre),
        }
    })
}

/// Create an ingest request body with preserve-order parsing.
pub fn ingest_request_preserve_order(nombre: &str, text: &str) -> serde_json::Value {
    json!({
        "nombre": nombre,
        "text": text,
        "preserve_order": true,
        "metadata": {
            "file_size": 2048,
            "page_count": 3,
            "file_name": format!("{}.pdf", nombre),
        }
    })
}

/// Create an ingest request body with explicit metadata.
pub fn ingest_request_with_file(
    text: &str,
    file_name: &str,
    file_size: u64,
) -> serde_json::Value {
    json!({
        "text": text,
        "metadata": {
            "file_size": file_size,
            "page_count": 1,
            "file_name": file_name,
        }
    })
}

/// Create a progress update request body.
pub fn update_progress_request(
    current_index: Option<usize>,
    answer_revealed: Option<bool>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(i) = current_index {
        obj.insert("current_index".to_string(), json!(i));
    }
    if let Some(r) = answer_revealed {
        obj.insert("answer_revealed".to_string(), json!(r));
    }
    serde_json::Value::Object(obj)
}

/// Create a mark request body.
pub fn mark_request(question_index: usize, correct: bool) -> serde_json::Value {
    json!({ "question_index": question_index, "correct": correct })
}
