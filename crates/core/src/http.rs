use reqwest::Client;
use tracing::debug;

use crate::{
    error::{Error, NetworkError, Result},
    settings::Settings,
};

pub fn build_client(settings: &Settings) -> Result<Client> {
    Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|error| {
            Error::from(NetworkError::ClientBuild {
                reason: error.to_string(),
            })
        })
}

/// Performs a single GET and returns the body of a 2xx response.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    debug!(url, "fetching region listing");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|error| map_http_error(url, error))?;

    let body = response
        .text()
        .await
        .map_err(|error| map_http_error(url, error))?;
    debug!(url, bytes = body.len(), "fetched region listing");
    Ok(body)
}

pub fn map_http_error(url: &str, http_error: reqwest::Error) -> Error {
    let url = url.to_string();
    if http_error.is_timeout() {
        return NetworkError::Timeout { url }.into();
    }
    if let Some(status) = http_error.status() {
        return NetworkError::UnexpectedStatus {
            url,
            status: status.as_u16(),
        }
        .into();
    }
    NetworkError::RequestFailed {
        url,
        reason: http_error.to_string(),
    }
    .into()
}
