use crate::domain::ports::SettledStore;
use crate::domain::settlement::SettledSet;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store of settled sets.
///
/// Uses `Arc<RwLock<HashMap<String, SettledSet>>>` so clones share state.
/// Nothing survives the process.
#[derive(Default, Clone)]
pub struct InMemorySettledStore {
    settled: Arc<RwLock<HashMap<String, SettledSet>>>,
}

impl InMemorySettledStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettledStore for InMemorySettledStore {
    async fn get(&self, context: &str) -> Result<SettledSet> {
        let settled = self.settled.read().await;
        Ok(settled.get(context).cloned().unwrap_or_default())
    }

    async fn put(&self, context: &str, settled: SettledSet) -> Result<()> {
        let mut all = self.settled.write().await;
        all.insert(context.to_string(), settled);
        Ok(())
    }
}
