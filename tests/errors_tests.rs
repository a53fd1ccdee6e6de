use std::error::Error;
use tldr_page::errors::{MALFORMED_USER_MESSAGE, SummarizeError, TRANSPORT_USER_MESSAGE};

#[test]
fn test_summarize_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::Transport("connection refused".to_string());
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    let error = SummarizeError::Transport("timed out".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to reach summarization service: timed out"
    );

    let error = SummarizeError::MalformedResponse("missing summary_text".to_string());
    assert_eq!(
        format!("{error}"),
        "Unexpected response from summarization service: missing summary_text"
    );
}

#[test]
fn test_transport_message_includes_detail() {
    let msg = SummarizeError::Transport("inference API returned 503".to_string()).user_message();
    assert!(msg.starts_with(TRANSPORT_USER_MESSAGE));
    assert!(msg.contains("inference API returned 503"));
}

#[test]
fn test_shape_message_hides_detail() {
    let msg = SummarizeError::MalformedResponse("secret internals".to_string()).user_message();
    assert_eq!(msg, MALFORMED_USER_MESSAGE);
    assert!(!msg.contains("secret internals"));
}

#[test]
fn test_summarize_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: SummarizeError = json_err.into();
    assert!(matches!(err, SummarizeError::MalformedResponse(_)));

    // Compile-time check that reqwest errors convert
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizeError {
        SummarizeError::from(err)
    }
}
