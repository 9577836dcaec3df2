//! Fetches raw table bytes from a URI (remote URL or local path).

use std::time::Duration;

use crate::errors::AppError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Whether a source URI must be fetched over HTTP.
pub fn is_remote(uri: &str) -> bool {
    let lower = uri.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Read the whole source into memory.
///
/// HTTP(S) URIs are downloaded and a non-success status is an error. Any
/// other URI is a filesystem path, with an optional `file://` prefix.
pub async fn fetch(uri: &str) -> Result<Vec<u8>, AppError> {
    let uri = uri.trim();
    if is_remote(uri) {
        tracing::debug!(uri, "Fetching remote source");
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        let response = client.get(uri).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        return Ok(body.to_vec());
    }

    let path = uri.strip_prefix("file://").unwrap_or(uri);
    tracing::debug!(path, "Reading local source");
    let data = tokio::fs::read(path).await?;
    Ok(data)
}
