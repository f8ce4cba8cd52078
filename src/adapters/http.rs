use crate::config::StatsConfig;
use crate::utils::error::{Result, StatsError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared client for both providers.
pub fn build_client(config: &StatsConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(seconds) = config.request_timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    Ok(builder.build()?)
}

/// Sends the request and decodes the body into `T`.
///
/// Non-2xx statuses become `HttpStatus`; bodies that do not match `T` become
/// `ResponseParseError` naming the provider and URL.
pub async fn get_json<T: DeserializeOwned>(request: RequestBuilder, provider: &str) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();

    tracing::debug!("{} response status: {} ({})", provider, status, url);

    if !status.is_success() {
        return Err(StatsError::HttpStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| StatsError::ResponseParseError {
        provider: provider.to_string(),
        url,
        source,
    })
}
