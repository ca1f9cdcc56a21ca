use anyhow::{Context, Result};
use tracing::info;

/// Download one schedule PDF. No retries: transport failures propagate to
/// the caller unchanged.
pub async fn fetch_pdf(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::new();

    info!("Fetching schedule PDF: {}", url);
    let response = client
        .get(url)
        .send()
        .await?
        .error_for_status()
        .with_context(|| format!("Schedule PDF request failed for {url}"))?;

    let bytes = response
        .bytes()
        .await
        .context("Failed to read schedule PDF body")?;
    info!("Downloaded {} bytes", bytes.len());

    Ok(bytes.to_vec())
}
