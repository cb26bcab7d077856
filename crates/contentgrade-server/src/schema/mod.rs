//! API schema types for request/response definitions.
//!
//! Grading request/result types live in `contentgrade-core`; this module adds
//! the server-only wire shapes around them.

pub mod grade;
pub mod health;
