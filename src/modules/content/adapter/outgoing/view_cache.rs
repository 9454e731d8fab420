//! In-process memo of the composed public views (`/`, `/about`, `/projects`).
//!
//! Entries are dropped when an [`InvalidationEvent`] names their path. A
//! per-key generation counter guarantees that a value computed before an
//! invalidation is never stored after it.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::content::application::domain::resource::InvalidationEvent;
use crate::modules::content::application::ports::outgoing::view_invalidator::ViewInvalidator;

pub const HOME_VIEW: &str = "/";
pub const ABOUT_VIEW: &str = "/about";
pub const PROJECTS_VIEW: &str = "/projects";

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, Value>,
    generations: HashMap<String, u64>,
}

impl CacheState {
    fn generation(&self, key: &str) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }
}

#[derive(Default)]
pub struct ViewCache {
    state: RwLock<CacheState>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn get(&self, key: &str) -> Option<Value> {
        self.state.read().await.entries.get(key).cloned()
    }

    /// Returns the cached view for `key` or computes and stores it.
    ///
    /// Errors from `compute` are returned as-is and nothing is cached.
    pub async fn get_or_compute<F, Fut, E>(&self, key: &str, compute: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let generation = {
            let state = self.state.read().await;
            if let Some(hit) = state.entries.get(key) {
                debug!(view = key, "View cache hit");
                return Ok(hit.clone());
            }
            state.generation(key)
        };

        let value = compute().await?;

        let mut state = self.state.write().await;
        if state.generation(key) == generation {
            state.entries.insert(key.to_string(), value.clone());
        } else {
            debug!(view = key, "View invalidated while computing, not caching");
        }

        Ok(value)
    }
}

#[async_trait]
impl ViewInvalidator for ViewCache {
    async fn invalidate(&self, event: &InvalidationEvent) {
        let mut state = self.state.write().await;

        for view in event.views {
            *state.generations.entry((*view).to_string()).or_insert(0) += 1;
            if state.entries.remove(*view).is_some() {
                debug!(view = *view, kind = %event.kind, "View invalidated");
            }
        }
    }
}
