//! HTTP handler modules for the contentgrade API.
//!
//! Handlers parse requests, delegate to [`crate::service::GradingService`],
//! and return JSON responses. No business logic lives in handlers.

pub mod grade;
pub mod health;
