//! Core error types for contentgrade-core.
//!
//! Uses `thiserror` for structured, matchable error variants.

use thiserror::Error;

/// Errors produced while turning a request into gradable text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Neither inline content nor fetched page text yielded anything to grade.
    #[error("no content provided")]
    EmptyInput,
}
