//! Application state shared by axum handlers.
//!
//! [`AppState`] only holds the immutable [`GradingService`]; there is no
//! mutable cross-request state, so no locking is needed.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::fetch::PageFetcher;
use crate::llm_provider::CompletionProvider;
use crate::service::GradingService;

#[derive(Clone)]
pub struct AppState {
    pub grading: Arc<GradingService>,
}

impl AppState {
    /// Creates state backed by the real OpenAI client and page fetcher.
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            grading: Arc::new(GradingService::with_http(&config.llm)),
        }
    }

    /// Creates state with injected provider and fetcher (for testing).
    pub fn with_providers(
        api_key: Option<String>,
        provider: Arc<dyn CompletionProvider>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        AppState {
            grading: Arc::new(GradingService::new(api_key, provider, fetcher)),
        }
    }
}
