use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::InvestorRecord;

/// Snapshot of the latest completed collection run, shared between the HTTP
/// handlers and the background refresh loop.
///
/// Replacement swaps the inner `Arc` in one step: a request that already
/// grabbed the previous pointer keeps reading a complete result, while later
/// requests see the complete new one. No reader ever observes a mix.
#[derive(Clone, Default)]
pub struct AppState {
    snapshot: Arc<RwLock<Arc<Vec<InvestorRecord>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot; a cheap clone of the inner pointer.
    pub async fn snapshot(&self) -> Arc<Vec<InvestorRecord>> {
        self.snapshot.read().await.clone()
    }

    /// Publishes a freshly collected result, replacing the previous one
    /// wholesale.
    pub async fn publish(&self, records: Vec<InvestorRecord>) {
        *self.snapshot.write().await = Arc::new(records);
    }
}
