use anyhow::{anyhow, Result};
use tracing::{debug, instrument, trace, warn};

use super::config::{CatalogConfig, SourceMode};
use super::filter::{offerable_names, CatalogRecord};

/// Fetch the catalog source and reduce it to offerable names according to
/// the configured source shape. One attempt, no retries.
#[instrument(level = "trace", skip(config), fields(url = %config.url))]
pub async fn fetch_offerable_names(config: &CatalogConfig) -> Result<Vec<String>> {
    debug!(mode = ?config.mode, "Fetching catalog source");

    let client = reqwest::Client::new();
    let resp = client.get(&config.url).send().await?;

    if !resp.status().is_success() {
        let status = resp.status();
        warn!(%status, "Catalog source error");
        return Err(anyhow!("catalog source error {status}"));
    }

    let raw = resp.text().await?;
    let names = match config.mode {
        SourceMode::PlainNames => serde_json::from_str::<Vec<String>>(&raw)?,
        SourceMode::Records => {
            let records: Vec<CatalogRecord> = serde_json::from_str(&raw)?;
            offerable_names(records, &config.family_marker, &config.part_keywords)
        }
    };

    trace!(count = names.len(), "Decoded catalog source");
    Ok(names)
}
