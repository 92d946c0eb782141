//! Parser for extracted MIR exam text.
//!
//! The input is reading-order plain text (column concatenation already
//! resolved upstream) with a repeating block grammar:
//!
//! ```text
//! 12. Question text, possibly
//! reflowed over several lines
//! 1. First alternative
//! 2. Second alternative
//! 3. Third alternative
//! 4. Fourth alternative
//! Respuesta correcta: 2
//! Comentario: Why the second alternative is right.
//! ```
//!
//! Blocks that never reach four strictly sequential alternatives are
//! dropped without error; the canonical reorder then places the correct
//! alternative first (see [`reorder_alternatives`]).

mod comment;
mod reorder;
mod scanner;

pub use comment::extract_comment;
pub use reorder::{reorder_alternatives, RawAlternative};
pub use scanner::parse;

use once_cell::sync::Lazy;
use regex::Regex;

/// "digits, period, whitespace, text" - a question or alternative line.
pub(crate) static NUMBERED_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("valid regex"));

/// Bare "digits, period, whitespace" prefix, used as a terminator.
pub(crate) static NUMBERED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("valid regex"));

/// Declared correct-answer line.
pub(crate) static ANSWER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Respuesta correcta:\s*(\d+)").expect("valid regex"));
