use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_HF_MODEL_URL: &str =
    "https://router.huggingface.co/hf-inference/models/google-t5/t5-small";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which summarizer implementation serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizerBackend {
    InferenceApi,
    OpenAi,
    Local,
}

impl SummarizerBackend {
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "inference-api" | "huggingface" | "hf" => Ok(SummarizerBackend::InferenceApi),
            "openai" => Ok(SummarizerBackend::OpenAi),
            "local" => Ok(SummarizerBackend::Local),
            other => Err(format!(
                "SUMMARIZER_BACKEND: unknown backend '{other}' (expected inference-api, openai or local)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: SummarizerBackend,
    pub hf_api_token: Option<String>,
    /// Set only for the inference-api backend.
    pub hf_model_url: Option<Url>,
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Credentials required by
    /// the selected backend must be present and non-blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get("SUMMARIZER_BACKEND") {
            Some(raw) => SummarizerBackend::parse(&raw)?,
            None => SummarizerBackend::InferenceApi,
        };

        let hf_api_token = get("HF_API_TOKEN");
        let openai_api_key = get("OPENAI_API_KEY");

        match backend {
            SummarizerBackend::InferenceApi if hf_api_token.is_none() => {
                return Err("HF_API_TOKEN: required for the inference-api backend".to_string());
            }
            SummarizerBackend::OpenAi if openai_api_key.is_none() => {
                return Err("OPENAI_API_KEY: required for the openai backend".to_string());
            }
            _ => {}
        }

        let hf_model_url = match backend {
            SummarizerBackend::InferenceApi => {
                let raw_url =
                    get("HF_MODEL_URL").unwrap_or_else(|| DEFAULT_HF_MODEL_URL.to_string());
                Some(Url::parse(&raw_url).map_err(|e| format!("HF_MODEL_URL: {}", e))?)
            }
            SummarizerBackend::OpenAi | SummarizerBackend::Local => None,
        };

        let timeout_secs = match get("SUMMARIZER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    format!("SUMMARIZER_TIMEOUT_SECS: expected a positive integer, got '{raw}'")
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            backend,
            hf_api_token,
            hf_model_url,
            openai_api_key,
            openai_org_id: get("OPENAI_ORG_ID"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
