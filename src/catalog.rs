// Item-name catalog backing the inline-query suggestions.

pub mod config;
pub mod fetch;
pub mod filter;

pub use config::{CatalogConfig, SourceMode};
pub use fetch::fetch_offerable_names;
pub use filter::{offerable_names, CatalogRecord};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Where the one-shot catalog load currently stands. A failure is terminal:
/// suggestions stay off, everything else keeps working.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

struct CatalogInner {
    state: LoadState,
    names: Vec<String>,
}

/// Shared handle to the loaded name universe.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<RwLock<CatalogInner>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogInner {
                state: LoadState::Loading,
                names: Vec::new(),
            })),
        }
    }

    pub async fn state(&self) -> LoadState {
        self.inner.read().await.state
    }

    pub async fn set_ready(&self, names: Vec<String>) {
        let mut inner = self.inner.write().await;
        inner.names = names;
        inner.state = LoadState::Ready;
    }

    pub async fn set_failed(&self) {
        self.inner.write().await.state = LoadState::Failed;
    }

    /// Names containing `partial` (case-insensitive), in catalog order,
    /// capped at `limit`. An empty `partial` matches everything. Empty until
    /// the load is ready.
    pub async fn suggestions(&self, partial: &str, limit: usize) -> Vec<String> {
        let inner = self.inner.read().await;
        if inner.state != LoadState::Ready {
            return Vec::new();
        }
        let partial_lower = partial.to_lowercase();
        inner
            .names
            .iter()
            .filter(|name| partial_lower.is_empty() || name.to_lowercase().contains(&partial_lower))
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot startup load. Runs in its own task; the rest of the bot never
/// waits on it.
pub async fn load(catalog: Catalog, config: CatalogConfig) {
    match fetch_offerable_names(&config).await {
        Ok(names) => {
            tracing::info!(count = names.len(), "Catalog loaded");
            catalog.set_ready(names).await;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Catalog load failed; name suggestions stay disabled");
            catalog.set_failed().await;
        }
    }
}
