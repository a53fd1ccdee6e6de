//! Lambda handler for the summarizer page.
//!
//! Routes `GET /` to the empty form and `POST /` to validation followed by a
//! summarizer call. Every user-facing failure is rendered into the page; only
//! a broken runtime surfaces as a Lambda error.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::{Summarizer, build_summarizer};
use crate::core::config::AppConfig;
use crate::core::models::{FormSubmission, PageView};
use crate::validation::{TextStats, validate};
use crate::views;

pub use self::function_handler as handler;

/// Process-wide state built once at startup and shared by every invocation.
#[derive(Clone)]
pub struct AppState {
    summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    #[must_use]
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }

    /// # Errors
    ///
    /// Fails when the configured backend cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        Ok(Self::new(build_summarizer(config)?))
    }

    #[must_use]
    pub fn summarizer(&self) -> &dyn Summarizer {
        self.summarizer.as_ref()
    }
}

/// Validates a submission and, when it passes, asks the summarizer for a
/// summary. Always produces a page to render.
pub async fn handle_submission(summarizer: &dyn Summarizer, submission: FormSubmission) -> PageView {
    let FormSubmission { text, length } = submission;
    let original_text = text.unwrap_or_default();

    let mut view = PageView {
        original_text,
        selected_length: length,
        ..PageView::default()
    };

    if let Err(rejection) = validate(&view.original_text) {
        let stats = TextStats::from_text(&view.original_text);
        debug!(
            ?rejection,
            word_count = stats.word_count,
            vowelless_ratio = stats.vowelless_ratio(),
            avg_word_len = stats.avg_word_len(),
            "Submission rejected"
        );
        view.error_message = Some(rejection.user_message());
        return view;
    }

    let result = summarizer.summarize(&view.original_text, length.bounds()).await;
    match result {
        Ok(summary) => {
            info!(
                backend = summarizer.name(),
                bucket = length.as_str(),
                summary_chars = summary.chars().count(),
                "Summary generated"
            );
            view.summary = Some(summary);
        }
        Err(e) => {
            warn!(
                backend = summarizer.name(),
                transport = e.is_transport(),
                "Failed to generate summary: {}",
                e
            );
            view.error_message = Some(e.user_message());
        }
    }

    view
}

/// Lambda handler for the page.
///
/// # Errors
///
/// Never fails for user input; the `Result` is the runtime's contract.
#[tracing::instrument(level = "info", skip(state, event), fields(request_id = tracing::field::Empty))]
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let request_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", request_id.as_str());

    let payload = &event.payload;
    let method = parsing::request_method(payload).unwrap_or("GET").to_ascii_uppercase();
    let path = parsing::request_path(payload);
    info!(%method, %path, "Page request");

    if path != "/" && !path.is_empty() {
        return Ok(helpers::html_response(
            404,
            &views::render_not_found(path),
            &request_id,
        ));
    }

    let view = match method.as_str() {
        "GET" => PageView::empty(),
        // Same headers as GET, no body
        "HEAD" => return Ok(helpers::html_response(200, "", &request_id)),
        "POST" => {
            let content_type = payload
                .get("headers")
                .and_then(|h| parsing::get_header_value(h, "Content-Type"))
                .unwrap_or("");
            if !content_type.starts_with("application/x-www-form-urlencoded") {
                debug!(%content_type, "POST without urlencoded content type");
            }

            let submission = parsing::extract_body(payload)
                .and_then(|body| parsing::parse_form_submission(&body))
                .unwrap_or_else(|e| {
                    warn!("Unreadable form body, treating as empty: {}", e);
                    FormSubmission::default()
                });
            handle_submission(state.summarizer(), submission).await
        }
        _ => return Ok(helpers::method_not_allowed(&request_id)),
    };

    Ok(helpers::html_response(
        200,
        &views::render_page(&view),
        &request_id,
    ))
}
