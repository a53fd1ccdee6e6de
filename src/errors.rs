use thiserror::Error;

/// Message shown when the summarization backend could not be reached.
pub const TRANSPORT_USER_MESSAGE: &str =
    "Sorry, the summarization service is unavailable right now. Please try again later.";

/// Message shown when the backend answered with something we could not use.
pub const MALFORMED_USER_MESSAGE: &str =
    "Sorry, the summarization service returned an unexpected response. Please try again later.";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Failed to reach summarization service: {0}")]
    Transport(String),

    #[error("Unexpected response from summarization service: {0}")]
    MalformedResponse(String),
}

impl SummarizeError {
    /// Text rendered on the page. Transport failures carry their detail,
    /// shape failures never leak what was wrong with the payload.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::Transport(detail) => format!("{TRANSPORT_USER_MESSAGE} ({detail})"),
            SummarizeError::MalformedResponse(_) => MALFORMED_USER_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SummarizeError::Transport(_))
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            SummarizeError::MalformedResponse(error.to_string())
        } else {
            SummarizeError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::MalformedResponse(error.to_string())
    }
}
