//! Summarization backends
//!
//! Every backend implements [`Summarizer`]; which one serves requests is
//! decided once at startup from [`AppConfig`].

pub mod extractive;
pub mod inference;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::config::{AppConfig, SummarizerBackend};
use crate::core::models::SummaryBounds;
use crate::errors::SummarizeError;

pub use extractive::ExtractiveSummarizer;
pub use inference::InferenceApiClient;
pub use openai::LlmClient;

/// Produces a summary of `text` whose length falls within `bounds`.
///
/// Implementations are deterministic (no sampling) and never retry.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizeError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Builds the HTTP client shared by the remote backends.
///
/// # Errors
///
/// Returns a message if the TLS backend cannot be initialised.
pub fn build_http_client(config: &AppConfig) -> Result<Client, String> {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))
}

/// Constructs the backend selected by `config`.
///
/// # Errors
///
/// Returns a message when the backend's credentials are missing or its HTTP
/// client cannot be built.
pub fn build_summarizer(config: &AppConfig) -> Result<Arc<dyn Summarizer>, String> {
    match config.backend {
        SummarizerBackend::Local => Ok(Arc::new(ExtractiveSummarizer::new())),
        SummarizerBackend::InferenceApi => {
            let token = config
                .hf_api_token
                .clone()
                .ok_or_else(|| "HF_API_TOKEN: required for the inference-api backend".to_string())?;
            let endpoint = config
                .hf_model_url
                .clone()
                .ok_or_else(|| "HF_MODEL_URL: required for the inference-api backend".to_string())?;
            Ok(Arc::new(InferenceApiClient::new(
                build_http_client(config)?,
                endpoint,
                token,
            )))
        }
        SummarizerBackend::OpenAi => {
            let api_key = config
                .openai_api_key
                .clone()
                .ok_or_else(|| "OPENAI_API_KEY: required for the openai backend".to_string())?;
            Ok(Arc::new(LlmClient::new(
                build_http_client(config)?,
                api_key,
                config.openai_org_id.clone(),
                config.openai_model.clone(),
            )))
        }
    }
}
