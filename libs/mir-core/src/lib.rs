//! Core library for MIR exam flashcards.
//!
//! Provides:
//! - Question parser for extracted exam text (stateful line-scanner,
//!   canonical alternative reorder, trailing-comment extraction)
//! - Validation gate and parsing statistics
//! - Package assembly from raw text
//! - RemNote text export
//! - Display-time shuffle utility

pub mod error;
pub mod export;
pub mod package;
pub mod parser;
pub mod shuffle;
pub mod types;
pub mod validate;

pub use error::{CoreError, Result};
pub use export::{check_remnote_format, remnote_preview, to_remnote, FormatReport};
pub use package::build_package;
pub use parser::parse;
pub use shuffle::shuffle_for_display;
pub use types::{
    Alternative, FlashcardPackage, PackageMetadata, ParserConfig, Question, StudyProgress,
};
pub use validate::{parsing_stats, validate_question, ParsingStats};
