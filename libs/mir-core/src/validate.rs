//! Acceptance gate and parsing statistics.

use serde::{Deserialize, Serialize};

use crate::types::Question;

/// Acceptance gate applied before a package is built.
///
/// A question passes when its text has at least 5 characters, it has
/// exactly 4 alternatives with non-empty text, and the declared answer
/// is in 0..=4 (0 means not found).
pub fn validate_question(question: &Question) -> bool {
    if question.pregunta.chars().count() < 5 {
        return false;
    }

    if question.alternativas.len() != 4 {
        return false;
    }

    if question.alternativas.iter().any(|alt| alt.texto.is_empty()) {
        return false;
    }

    question.respuesta_original <= 4
}

/// Diagnostic counters over a parsed question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingStats {
    pub total: usize,
    pub with_comments: usize,
    pub average_alternative_length: usize,
}

/// Compute diagnostic statistics. No correctness contract; used for
/// logging only.
pub fn parsing_stats(questions: &[Question]) -> ParsingStats {
    let total = questions.len();
    let with_comments = questions.iter().filter(|q| q.comentario.is_some()).count();

    let mut total_len = 0usize;
    let mut alt_count = 0usize;
    for question in questions {
        for alt in &question.alternativas {
            total_len += alt.texto.chars().count();
            alt_count += 1;
        }
    }

    let average_alternative_length = if alt_count > 0 {
        (total_len as f64 / alt_count as f64).round() as usize
    } else {
        0
    };

    ParsingStats {
        total,
        with_comments,
        average_alternative_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alternative;

    fn question() -> Question {
        Question {
            numero: 1,
            pregunta: "A valid question?".to_string(),
            alternativas: (1..=4)
                .map(|n| Alternative {
                    numero: n,
                    texto: format!("alt {}", n),
                    comentario: None,
                })
                .collect(),
            respuesta_original: 2,
            comentario: None,
        }
    }

    #[test]
    fn accepts_well_formed_question() {
        assert!(validate_question(&question()));
    }

    #[test]
    fn rejects_short_question_text() {
        let mut q = question();
        q.pregunta = "Hm?".to_string();
        assert!(!validate_question(&q));
    }

    #[test]
    fn rejects_wrong_alternative_count() {
        let mut q = question();
        q.alternativas.pop();
        assert!(!validate_question(&q));
    }

    #[test]
    fn rejects_empty_alternative_text() {
        let mut q = question();
        q.alternativas[2].texto.clear();
        assert!(!validate_question(&q));
    }

    #[test]
    fn rejects_out_of_range_answer() {
        let mut q = question();
        q.respuesta_original = 5;
        assert!(!validate_question(&q));
    }

    #[test]
    fn accepts_absent_answer() {
        let mut q = question();
        q.respuesta_original = 0;
        assert!(validate_question(&q));
    }

    #[test]
    fn validation_is_idempotent() {
        let q = question();
        assert_eq!(validate_question(&q), validate_question(&q));
    }

    #[test]
    fn stats_over_empty_set() {
        let stats = parsing_stats(&[]);
        assert_eq!(
            stats,
            ParsingStats {
                total: 0,
                with_comments: 0,
                average_alternative_length: 0
            }
        );
    }

    #[test]
    fn stats_count_comments_and_average() {
        let mut with_comment = question();
        with_comment.comentario = Some("why".to_string());
        let stats = parsing_stats(&[with_comment, question()]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.with_comments, 1);
        // Every alternative is "alt N", 5 characters.
        assert_eq!(stats.average_alternative_length, 5);
    }
}
