use std::time::Duration;

use reqwest::{Client, Url};
use tracing::debug;

use crate::sources::SourceError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the single HTTP client shared by every source adapter.
pub fn build_client(timeout_secs: u64) -> Result<Client, SourceError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Appends query parameters to a base URL, encoding them.
pub fn url_with_params<'a, I>(base: &str, params: I) -> Result<Url, SourceError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    Url::parse_with_params(base, params)
        .map_err(|e| SourceError::Parse(format!("invalid URL '{base}': {e}")))
}

/// GETs `url` and returns the body text of a 2xx response.
/// Any other status becomes `SourceError::Status` carrying the body.
pub async fn get_text(client: &Client, url: Url) -> Result<String, SourceError> {
    debug!("GET {url}");

    let response = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
