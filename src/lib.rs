//! tldr-page - a single-page web form that summarizes submitted text.
//!
//! The page is served from an AWS Lambda function behind API Gateway or a
//! function URL. Each submission goes through a cheap heuristic filter
//! before any summarizer is called:
//!
//! 1. Empty or whitespace-only text is rejected
//! 2. Fewer than ten words is rejected
//! 3. Text with too many vowelless words, or very short average word
//!    length, is rejected as nonsensical
//!
//! Accepted text is summarized by one of several interchangeable backends
//! (hosted inference API, `OpenAI`, or an in-process extractive model)
//! chosen once at startup.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tldr_page::ai::ExtractiveSummarizer;
//! use tldr_page::api::handle_submission;
//! use tldr_page::core::models::{FormSubmission, LengthBucket};
//!
//! #[tokio::main]
//! async fn main() {
//!     tldr_page::setup_logging();
//!
//!     let summarizer = Arc::new(ExtractiveSummarizer::new());
//!     let view = handle_submission(
//!         summarizer.as_ref(),
//!         FormSubmission {
//!             text: Some("Some long article text ...".to_string()),
//!             length: LengthBucket::Short,
//!         },
//!     )
//!     .await;
//!
//!     match (view.summary, view.error_message) {
//!         (Some(summary), _) => println!("Summary: {}", summary),
//!         (None, Some(error)) => println!("Rejected: {}", error),
//!         (None, None) => unreachable!(),
//!     }
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod validation;
pub mod views;

pub use ai::Summarizer;
pub use errors::SummarizeError;
pub use validation::{Rejection, validate};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level comes from `RUST_LOG` and defaults to `info`. Calling it
/// more than once is harmless.
///
/// # Example
///
/// ```
/// tldr_page::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
