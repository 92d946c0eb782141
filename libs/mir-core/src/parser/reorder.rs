//! Canonical alternative reordering.

use crate::types::Alternative;

/// Alternative as read from the source, before the canonical reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAlternative {
    pub numero: u32,
    pub texto: String,
}

impl RawAlternative {
    fn to_alternative(&self) -> Alternative {
        Alternative {
            numero: self.numero,
            texto: self.texto.clone(),
            comentario: None,
        }
    }
}

/// Produce the final alternative ordering for a question.
///
/// Default mode moves the correct alternative to the front and attaches
/// the comment to it; the other three keep their relative order and
/// never carry a comment. Preserve-order mode keeps source order and
/// annotates the correct alternative in place.
///
/// A `correct` index that matches none of the alternatives returns them
/// in original order with no comment attached.
pub fn reorder_alternatives(
    alternatives: &[RawAlternative],
    correct: u32,
    comment: Option<&str>,
    preserve_order: bool,
) -> Vec<Alternative> {
    if preserve_order {
        let mut out: Vec<Alternative> = alternatives.iter().map(RawAlternative::to_alternative).collect();
        if let Some(alt) = out.iter_mut().find(|a| a.numero == correct) {
            alt.comentario = comment.map(str::to_string);
        }
        return out;
    }

    let mut correct_alt: Option<Alternative> = None;
    let mut others: Vec<Alternative> = Vec::with_capacity(alternatives.len());

    for alt in alternatives {
        if alt.numero == correct {
            let mut found = alt.to_alternative();
            found.comentario = comment.map(str::to_string);
            correct_alt = Some(found);
        } else {
            others.push(alt.to_alternative());
        }
    }

    match correct_alt {
        Some(correct_alt) => std::iter::once(correct_alt).chain(others).collect(),
        None => alternatives.iter().map(RawAlternative::to_alternative).collect(),
    }
}
