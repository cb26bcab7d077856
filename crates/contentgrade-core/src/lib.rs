//! Pure domain logic for contentgrade.
//!
//! Everything in this crate is free of I/O: request/result types, markup
//! stripping, the grading prompt, and parsing of the model's free-text reply.
//! The server and CLI crates supply the network calls around it.

pub mod error;
pub mod markup;
pub mod parse;
pub mod prompt;
pub mod types;

// Re-export commonly used items
pub use error::CoreError;
pub use markup::{extract_page_text, strip_markup, truncate_chars, MAX_FETCHED_CHARS};
pub use parse::{extract_feedback, extract_score, parse_grade_output, MAX_FEEDBACK_ITEMS};
pub use prompt::{build_grading_prompt, GRADING_CRITERIA, MAX_SCORE, POINTS_PER_CRITERION};
pub use types::{GradeRequest, GradeResult, ResolvedInput, Score};
