use std::time::Duration;

use crate::domain::section::InductionSection;

use super::errors::{AssistantError, AssistantResult};
use super::prompts;
use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default generation API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reply shown when the service cannot be reached or rejects the request
pub const CONNECTION_ERROR_REPLY: &str =
    "There was an error connecting to the AI assistant. Please try again later.";
/// Reply shown when the service answers with no usable text
pub const EMPTY_ANSWER_REPLY: &str = "I'm sorry, I couldn't process that request.";
/// Summary fallback when the service answers with no usable text
pub const SUMMARY_UNAVAILABLE_REPLY: &str = "Summary unavailable.";
/// Summary fallback when the service cannot be reached
pub const SUMMARY_FAILED_REPLY: &str = "Summary generation failed.";

/// Boundary component forwarding questions to the text-generation service
///
/// Failures never escape as errors: both public operations always return a
/// displayable string, mapping transport and service faults to fixed
/// user-facing replies. No state is kept between calls.
#[derive(Debug, Clone)]
pub struct AssistantGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AssistantGateway {
    /// Creates a gateway against the default host and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, DEFAULT_MODEL)
    }

    /// Creates a gateway with an explicit host and model
    ///
    /// The custom base URL is mainly for tests pointing at a local stand-in
    /// for the generation API.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let http = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build assistant HTTP client, using default client");
                reqwest::Client::new()
            }
        };

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Answers a free-text question grounded in the given sections
    ///
    /// Returns the model's text verbatim, or a fixed fallback reply on
    /// failure. Each call is independent; a question never sees previous
    /// answers.
    pub async fn answer_question(
        &self,
        question: &str,
        sections: &[InductionSection],
    ) -> String {
        let prompt = prompts::induction_answer(question, sections);
        match self.generate(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_ANSWER_REPLY.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "assistant question failed");
                CONNECTION_ERROR_REPLY.to_string()
            }
        }
    }

    /// Produces a short summary of one section
    pub async fn summarize_section(&self, section: &InductionSection) -> String {
        let prompt = prompts::section_summary(section);
        match self.generate(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => SUMMARY_UNAVAILABLE_REPLY.to_string(),
            Err(e) => {
                tracing::error!(error = %e, section_id = %section.id, "section summary failed");
                SUMMARY_FAILED_REPLY.to_string()
            }
        }
    }

    /// Sends one prompt to the generation API
    ///
    /// `Ok(None)` means the service answered but produced no usable text.
    async fn generate(&self, prompt: &str) -> AssistantResult<Option<String>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body.text())
    }
}
