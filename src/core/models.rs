use serde::{Deserialize, Serialize};

/// Requested summary length, as chosen in the page's select control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthBucket {
    Short,
    #[default]
    Medium,
    Long,
}

/// Length bounds handed to the summarizer, in model units (tokens or words
/// depending on the backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBounds {
    pub min_length: u32,
    pub max_length: u32,
}

impl LengthBucket {
    pub const ALL: [LengthBucket; 3] = [LengthBucket::Short, LengthBucket::Medium, LengthBucket::Long];

    /// Parses a form value. Anything absent or unrecognized falls back to
    /// `Medium`.
    #[must_use]
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("short") => LengthBucket::Short,
            Some("long") => LengthBucket::Long,
            _ => LengthBucket::Medium,
        }
    }

    #[must_use]
    pub fn bounds(self) -> SummaryBounds {
        let (min_length, max_length) = match self {
            LengthBucket::Short => (20, 60),
            LengthBucket::Medium => (40, 150),
            LengthBucket::Long => (80, 200),
        };
        SummaryBounds {
            min_length,
            max_length,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LengthBucket::Short => "short",
            LengthBucket::Medium => "medium",
            LengthBucket::Long => "long",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LengthBucket::Short => "Short",
            LengthBucket::Medium => "Medium",
            LengthBucket::Long => "Long",
        }
    }
}

/// Fields decoded from a form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub text: Option<String>,
    pub length: LengthBucket,
}

/// Everything the page template needs to render one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub original_text: String,
    pub summary: Option<String>,
    pub error_message: Option<String>,
    pub selected_length: LengthBucket,
}

impl PageView {
    /// The initial, empty form.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}
