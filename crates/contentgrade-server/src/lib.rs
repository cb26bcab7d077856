//! HTTP/JSON API server for content grading.
//!
//! Accepts raw text or a URL, resolves it to plain text, asks a completion
//! provider to grade it against a fixed five-criteria prompt, and returns the
//! parsed score and suggestions. This crate contains the server framework,
//! the outbound provider and fetcher seams, error handling, and routes.

pub mod config;
pub mod error;
pub mod fetch;
pub mod handlers;
pub mod llm_provider;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
