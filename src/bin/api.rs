use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tldr_page::api::{AppState, handler};
use tldr_page::core::config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tldr_page::setup_logging();

    // Missing credentials abort startup instead of failing every request.
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let state = AppState::from_config(&config).map_err(|e| {
        error!("Failed to initialize summarizer: {}", e);
        Error::from(e)
    })?;

    info!(
        backend = state.summarizer().name(),
        timeout_secs = config.request_timeout.as_secs(),
        "Summarizer page ready"
    );

    let state = &state;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(state, event).await
    }))
    .await
}
