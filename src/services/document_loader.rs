// Fetches description documents from disk or over HTTP

use anyhow::{bail, Context, Result};
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::config::services::is_remote;

const MAX_SIZE: usize = 1_000_000;
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Read a description document from a local path or an http(s) URL
pub async fn load_document(source: &str) -> Result<String> {
    if is_remote(source) {
        fetch_document(source).await
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read description {}", source))
    }
}

async fn fetch_document(source: &str) -> Result<String> {
    let url = Url::parse(source).with_context(|| format!("Invalid URL {}", source))?;

    // Redirects are not followed so the fetched host is the configured one
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("Failed to create HTTP client")?;

    let mut response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        if status.is_redirection() {
            bail!("{} redirects; configure the final location instead", url);
        }
        bail!("{} returned status {}", url, status);
    }

    if let Some(len) = response.content_length() {
        check_size(len as usize, &url)?;
    }

    // Content-Length may be missing or wrong, so count while reading
    let mut bytes = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("Failed to read {}", url))?
    {
        check_size(bytes.len() + chunk.len(), &url)?;
        bytes.extend_from_slice(&chunk);
    }

    info!(%url, size = bytes.len(), "fetched description document");

    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", url))
}

fn check_size(len: usize, url: &Url) -> Result<()> {
    if len > MAX_SIZE {
        bail!("Description at {} is too large (max 1MB)", url);
    }
    Ok(())
}
