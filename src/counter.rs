use crate::models::{VisitLedger, VisitSnapshot};
use crate::stats::{day_key, record_visit_at, snapshot_at};
use crate::storage::{KvStore, LEDGER_KEY};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, warn};

// Each visit is a full read-modify-write of the stored ledger. Independent
// processes sharing the same store can lose updates; counts are approximate
// under that overlap.
pub struct VisitCounter {
    store: Arc<dyn KvStore>,
}

impl VisitCounter {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn record_visit(&mut self, path: &str, now: NaiveDate) -> VisitSnapshot {
        let mut ledger = self.load().await;
        let snapshot = record_visit_at(&mut ledger, &day_key(now), path);
        self.persist(&ledger).await;
        snapshot
    }

    pub async fn snapshot(&self, path: &str, now: NaiveDate) -> VisitSnapshot {
        snapshot_at(&self.load().await, &day_key(now), path)
    }

    async fn load(&self) -> VisitLedger {
        let Some(text) = self.store.get(LEDGER_KEY).await else {
            return VisitLedger::default();
        };

        match serde_json::from_str(&text) {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!("discarding malformed visit ledger: {err}");
                VisitLedger::default()
            }
        }
    }

    async fn persist(&self, ledger: &VisitLedger) {
        let payload = match serde_json::to_string_pretty(ledger) {
            Ok(payload) => payload,
            Err(err) => {
                error!("failed to serialize visit ledger: {err}");
                return;
            }
        };

        if let Err(err) = self.store.set(LEDGER_KEY, payload).await {
            error!("failed to persist visit ledger: {err}");
        }
    }
}
