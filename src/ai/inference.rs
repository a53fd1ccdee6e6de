//! Hosted inference API backend (Hugging Face style summarization pipeline)

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use super::Summarizer;
use crate::core::models::SummaryBounds;
use crate::errors::SummarizeError;

/// Upper bound on how much of an error body ends up in logs and messages.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
pub struct InferenceParameters {
    pub min_length: u32,
    pub max_length: u32,
    pub do_sample: bool,
}

impl<'a> InferenceRequest<'a> {
    #[must_use]
    pub fn new(text: &'a str, bounds: SummaryBounds) -> Self {
        Self {
            inputs: text,
            parameters: InferenceParameters {
                min_length: bounds.min_length,
                max_length: bounds.max_length,
                do_sample: false,
            },
        }
    }
}

/// Client for a remote summarization endpoint that answers with
/// `[{"summary_text": "..."}]`.
pub struct InferenceApiClient {
    http: Client,
    endpoint: Url,
    api_token: String,
}

impl InferenceApiClient {
    #[must_use]
    pub fn new(http: Client, endpoint: Url, api_token: String) -> Self {
        Self {
            http,
            endpoint,
            api_token,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Pulls `summary_text` out of the first element of the response list.
///
/// # Errors
///
/// Returns `MalformedResponse` when the body is not a non-empty list whose
/// first element carries a non-blank `summary_text` string.
pub fn extract_summary_text(body: &Value) -> Result<String, SummarizeError> {
    let first = body
        .as_array()
        .ok_or_else(|| SummarizeError::MalformedResponse("response is not a list".to_string()))?
        .first()
        .ok_or_else(|| SummarizeError::MalformedResponse("response list is empty".to_string()))?;

    let text = first
        .get("summary_text")
        .and_then(Value::as_str)
        .ok_or_else(|| SummarizeError::MalformedResponse("missing summary_text".to_string()))?;

    if text.trim().is_empty() {
        return Err(SummarizeError::MalformedResponse(
            "summary_text is empty".to_string(),
        ));
    }

    Ok(text.trim().to_string())
}

fn truncate_for_log(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[async_trait]
impl Summarizer for InferenceApiClient {
    #[tracing::instrument(level = "info", skip(self, text), fields(endpoint = %self.endpoint))]
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizeError> {
        info!(
            min_length = bounds.min_length,
            max_length = bounds.max_length,
            "Requesting summary from inference API"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_token)
            .json(&InferenceRequest::new(text, bounds))
            .send()
            .await
            .map_err(|e| SummarizeError::Transport(format!("inference request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            warn!(%status, body = %truncate_for_log(&error_text), "Inference API returned an error");
            return Err(SummarizeError::Transport(format!(
                "inference API returned {status}"
            )));
        }

        let bytes = response.bytes().await.map_err(SummarizeError::from)?;
        let body: Value = serde_json::from_slice(&bytes)?;

        extract_summary_text(&body)
    }

    fn name(&self) -> &'static str {
        "inference-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let bounds = SummaryBounds {
            min_length: 20,
            max_length: 60,
        };
        let body = serde_json::to_value(InferenceRequest::new("some text", bounds)).unwrap();
        assert_eq!(
            body,
            json!({
                "inputs": "some text",
                "parameters": { "min_length": 20, "max_length": 60, "do_sample": false }
            })
        );
    }

    #[test]
    fn test_extract_summary_text_takes_first_result() {
        let body = json!([{ "summary_text": " first " }, { "summary_text": "second" }]);
        assert_eq!(extract_summary_text(&body).unwrap(), "first");
    }

    #[test]
    fn test_extract_summary_text_rejects_bad_shapes() {
        for body in [
            json!([]),
            json!({ "summary_text": "not a list" }),
            json!([{ "generated_text": "wrong field" }]),
            json!([{ "summary_text": "   " }]),
        ] {
            let err = extract_summary_text(&body).unwrap_err();
            assert!(
                matches!(err, SummarizeError::MalformedResponse(_)),
                "expected shape error for {body}"
            );
        }
    }

    #[test]
    fn test_truncate_for_log() {
        let long = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
        assert_eq!(truncate_for_log(&long).len(), MAX_ERROR_BODY_CHARS);
    }
}
