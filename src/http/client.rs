use reqwest::Client;

use crate::config::Config;
use crate::error::RequestError;

pub const DEFAULT_USER_AGENT: &str = concat!("faster-requests/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by the requests of one batch.
///
/// # Errors
///
/// Returns an error when the TLS backend or DNS resolver cannot be initialised.
pub fn build_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.request_timeout())
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}

/// Issues one GET and returns the response status. The body is never read.
///
/// # Errors
///
/// Returns [`RequestError::Timeout`] when the client timeout elapses first and
/// [`RequestError::Network`] for every other transport or URL failure.
pub async fn send_get(client: &Client, url: &str) -> Result<u16, RequestError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(RequestError::from_reqwest)?;
    Ok(response.status().as_u16())
}
