use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::db::{KvStore, StoreError};
use crate::history::merge::merge_history;
use crate::models::analysis::{AnalysisResult, CategoryScores};

/// Most recent results kept, both persisted and returned by `load`.
pub const HISTORY_CAPACITY: usize = 50;

/// A named provider of history records.
#[async_trait]
pub trait HistorySource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self) -> Result<Vec<AnalysisResult>, StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Local source: results recorded by this deployment
// ────────────────────────────────────────────────────────────────────────────

/// JSON array under a single key, newest first. Writes are serialized.
pub struct LocalHistory {
    kv: Arc<dyn KvStore>,
    key: String,
    capacity: usize,
    write_lock: Mutex<()>,
}

impl LocalHistory {
    pub fn new(kv: Arc<dyn KvStore>, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            kv,
            key: key.into(),
            capacity,
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the persisted list. Corrupt JSON reads as empty.
    async fn read(&self) -> Result<Vec<AnalysisResult>, StoreError> {
        let Some(raw) = self.kv.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<AnalysisResult>>(&raw) {
            Ok(entries) => Ok(entries.into_iter().map(AnalysisResult::normalized).collect()),
            Err(e) => {
                warn!("Discarding unreadable history under '{}': {e}", self.key);
                Ok(Vec::new())
            }
        }
    }

    /// Prepends `result` and truncates to capacity, dropping the oldest.
    pub async fn record(&self, result: AnalysisResult) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        // An unreachable store must not be overwritten with a one-entry list.
        let mut entries = self.read().await?;
        entries.retain(|e| e.id != result.id);
        entries.insert(0, result);
        entries.truncate(self.capacity);

        let json = serde_json::to_string(&entries)
            .map_err(|e| StoreError::Unavailable(format!("serialize history: {e}")))?;
        self.kv.set(&self.key, &json).await?;
        debug!("Recorded analysis; local history now {} entries", entries.len());
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.kv.delete(&self.key).await?;
        info!("Cleared local history '{}'", self.key);
        Ok(())
    }
}

#[async_trait]
impl HistorySource for LocalHistory {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch(&self) -> Result<Vec<AnalysisResult>, StoreError> {
        self.read().await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Seed source: sample records every deployment shows
// ────────────────────────────────────────────────────────────────────────────

/// Fixed sample records stamped 1, 2 and 3 hours before each fetch.
pub struct SeedHistory {
    latency: Duration,
}

impl SeedHistory {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl HistorySource for SeedHistory {
    fn name(&self) -> &'static str {
        "seed"
    }

    async fn fetch(&self) -> Result<Vec<AnalysisResult>, StoreError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(seed_records())
    }
}

pub fn seed_records() -> Vec<AnalysisResult> {
    let now = Utc::now();
    let hours = |h: i64| now - chrono::Duration::hours(h);
    vec![
        AnalysisResult::new(
            "sample-1",
            "This is a great post! Thanks for sharing.",
            0.05,
            0.98,
            hours(1),
            CategoryScores {
                toxicity: 0.05,
                severe_toxicity: 0.01,
                obscene: 0.02,
                threat: 0.01,
                insult: 0.03,
                identity_attack: 0.01,
            },
        ),
        AnalysisResult::new(
            "sample-2",
            "You are such an idiot for posting this",
            0.74,
            0.91,
            hours(2),
            CategoryScores {
                toxicity: 0.74,
                severe_toxicity: 0.15,
                obscene: 0.23,
                threat: 0.08,
                insult: 0.89,
                identity_attack: 0.12,
            },
        ),
        AnalysisResult::new(
            "sample-3",
            "Looking forward to more content like this",
            0.03,
            0.96,
            hours(3),
            CategoryScores {
                toxicity: 0.03,
                severe_toxicity: 0.01,
                obscene: 0.01,
                threat: 0.0,
                insult: 0.02,
                identity_attack: 0.01,
            },
        ),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// HistoryStore: the merged view
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct HistoryStore {
    local: Arc<LocalHistory>,
    seed: Arc<dyn HistorySource>,
}

impl HistoryStore {
    pub fn new(local: Arc<LocalHistory>, seed: Arc<dyn HistorySource>) -> Self {
        Self { local, seed }
    }

    pub async fn record(&self, result: AnalysisResult) -> Result<(), StoreError> {
        self.local.record(result).await
    }

    /// Local records first, then seed records; merged by `merge_history`.
    /// A failing source contributes nothing.
    pub async fn load(&self) -> Vec<AnalysisResult> {
        let local = fetch_or_empty(self.local.as_ref()).await;
        let seed = fetch_or_empty(self.seed.as_ref()).await;
        merge_history(local, seed, HISTORY_CAPACITY)
    }

    /// Wipes locally recorded results. Seed records are unaffected.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.local.clear().await
    }

    pub async fn local_len(&self) -> usize {
        fetch_or_empty(self.local.as_ref()).await.len()
    }
}

async fn fetch_or_empty(source: &dyn HistorySource) -> Vec<AnalysisResult> {
    match source.fetch().await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("History source '{}' unavailable, treating as empty: {e}", source.name());
            Vec::new()
        }
    }
}
