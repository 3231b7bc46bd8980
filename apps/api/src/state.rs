use std::sync::Arc;

use tracing::info;

use crate::analysis::classifier::{Classifier, LexiconClassifier};
use crate::config::Config;
use crate::db::{KvStore, HISTORY_KEY, USER_KEY};
use crate::history::store::{HistoryStore, LocalHistory, SeedHistory, HISTORY_CAPACITY};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable classifier. Default: LexiconClassifier.
    pub classifier: Arc<dyn Classifier>,
    pub history: HistoryStore,
    pub sessions: SessionStore,
}

impl AppState {
    /// Wires the default classifier, history sources and session store over `kv`.
    pub fn new(config: Config, kv: Arc<dyn KvStore>) -> Self {
        let classifier = Arc::new(LexiconClassifier::new(config.analyze_latency));
        Self::with_classifier(config, kv, classifier)
    }

    pub fn with_classifier(
        config: Config,
        kv: Arc<dyn KvStore>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        let local = Arc::new(LocalHistory::new(kv.clone(), HISTORY_KEY, HISTORY_CAPACITY));
        let seed = Arc::new(SeedHistory::new(config.history_latency));
        let history = HistoryStore::new(local, seed);
        let sessions = SessionStore::new(kv, USER_KEY, config.auth_latency);

        Self {
            config,
            classifier,
            history,
            sessions,
        }
    }

    /// Reads persisted state once at startup and reports what was found.
    pub async fn hydrate(&self) {
        let recorded = self.history.local_len().await;
        info!("Hydrated {recorded} recorded analyses from storage");
        match self.sessions.current().await {
            Some(user) => info!("Restored session for {}", user.email),
            None => info!("No active session"),
        }
    }
}
