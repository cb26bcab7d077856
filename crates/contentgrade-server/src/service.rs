//! The grading pipeline.
//!
//! [`GradingService`] runs the steps of one grading request in order:
//! resolve the input text, check the API key, build the prompt, call the
//! completion provider, parse the reply. The URL fetch (if any) always
//! finishes before the provider call starts. The service holds no
//! per-request state, so one instance serves every request.

use std::sync::Arc;

use contentgrade_core::{
    build_grading_prompt, extract_page_text, parse_grade_output, GradeRequest, GradeResult,
    ResolvedInput,
};

use crate::config::LlmConfig;
use crate::error::ApiError;
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::llm_provider::{CompletionProvider, OpenAiProvider};

#[derive(Clone)]
pub struct GradingService {
    api_key: Option<String>,
    provider: Arc<dyn CompletionProvider>,
    fetcher: Arc<dyn PageFetcher>,
}

impl GradingService {
    pub fn new(
        api_key: Option<String>,
        provider: Arc<dyn CompletionProvider>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        GradingService {
            api_key: api_key.filter(|k| !k.is_empty()),
            provider,
            fetcher,
        }
    }

    /// Builds a service backed by the OpenAI client and HTTP page fetcher,
    /// sharing one connection pool.
    pub fn with_http(llm: &LlmConfig) -> Self {
        let client = reqwest::Client::new();
        GradingService::new(
            llm.api_key.clone(),
            Arc::new(OpenAiProvider::new(client.clone(), llm)),
            Arc::new(HttpPageFetcher::new(client)),
        )
    }

    /// Decides what text to grade.
    ///
    /// Non-empty `content` wins and is used verbatim. Otherwise `url` is
    /// fetched, stripped of tags, and truncated. Fetch failures become
    /// [`ApiError::FetchFailed`]; no usable text becomes
    /// [`ApiError::NoContent`].
    pub async fn resolve_input(&self, req: &GradeRequest) -> Result<ResolvedInput, ApiError> {
        if let Some(content) = req.inline_content() {
            return Ok(ResolvedInput::Inline(content.to_string()));
        }

        let Some(url) = req.target_url() else {
            return Err(ApiError::NoContent);
        };

        let html = self.fetcher.fetch(url).await.map_err(|err| {
            tracing::warn!(url, error = %err, "failed to fetch content from URL");
            ApiError::from(err)
        })?;

        let text = extract_page_text(&html);
        tracing::debug!(url, raw_len = html.len(), text_chars = text.chars().count(), "fetched page");

        Ok(ResolvedInput::fetched(url, text)?)
    }

    /// Runs the full pipeline for one request.
    pub async fn grade(&self, req: &GradeRequest) -> Result<GradeResult, ApiError> {
        let input = self.resolve_input(req).await?;

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("OPENAI_API_KEY is not configured");
            ApiError::MissingApiKey
        })?;

        let prompt = build_grading_prompt(input.text());
        tracing::debug!(source = input.source(), prompt_chars = prompt.len(), "requesting completion");

        let reply = self.provider.complete(api_key, &prompt).await.map_err(|err| {
            tracing::warn!(error = %err, "completion request failed");
            ApiError::from(err)
        })?;

        let result = parse_grade_output(&reply);
        tracing::info!(
            source = input.source(),
            score = %result.score,
            suggestions = result.feedback.len(),
            "graded content"
        );
        Ok(result)
    }
}
