use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{CompatibilityScore, Profile};

/// In-process cache of pairwise scores
///
/// Keyed by the ordered `(subject, candidate)` pair so the stored ids
/// always match the request. Scoring is deterministic, which makes any
/// cached entry valid until it expires.
#[derive(Clone)]
pub struct ScoreCache {
    l1_cache: Option<Cache<(Profile, Profile), CompatibilityScore>>,
}

impl ScoreCache {
    /// Create a new score cache
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            l1_cache: Some(l1_cache),
        }
    }

    /// A cache that always computes
    pub fn disabled() -> Self {
        Self { l1_cache: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.l1_cache.is_some()
    }

    /// Return the cached score for the pair, computing it on a miss
    pub async fn get_or_score<F>(
        &self,
        subject: &Profile,
        candidate: &Profile,
        compute: F,
    ) -> CompatibilityScore
    where
        F: FnOnce() -> CompatibilityScore,
    {
        let Some(cache) = &self.l1_cache else {
            return compute();
        };

        let key = (subject.clone(), candidate.clone());
        cache
            .get_with(key, async move {
                tracing::trace!("Score cache miss: {} -> {}", subject.id, candidate.id);
                compute()
            })
            .await
    }

    /// Drop every cached score
    pub async fn clear(&self) {
        if let Some(cache) = &self.l1_cache {
            cache.invalidate_all();
            cache.run_pending_tasks().await;
        }
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        match &self.l1_cache {
            Some(cache) => {
                cache.run_pending_tasks().await;
                CacheStats {
                    enabled: true,
                    entries: cache.entry_count(),
                }
            }
            None => CacheStats {
                enabled: false,
                entries: 0,
            },
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub entries: u64,
}
