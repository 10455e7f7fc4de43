use crate::domain::ports::SettledStoreBox;
use crate::domain::settlement::{SettledSet, Settlement};
use crate::error::Result;

/// Remembers which computed settlements were paid, per context.
///
/// The tracker only ever adds keys. Two calls racing on the same context can
/// lose a write unless the store serializes them.
pub struct SettlementTracker {
    store: SettledStoreBox,
}

impl SettlementTracker {
    pub fn new(store: SettledStoreBox) -> Self {
        Self { store }
    }

    /// Marks `settlement` as paid in `context`.
    ///
    /// Returns `true` if the key was newly recorded. Marking the same
    /// settlement twice leaves the store untouched the second time.
    pub async fn mark_paid(&self, context: &str, settlement: &Settlement) -> Result<bool> {
        let mut settled = self.store.get(context).await?;
        let key = settlement.key();
        if !settled.insert(key.clone()) {
            return Ok(false);
        }
        self.store.put(context, settled).await?;
        tracing::debug!(context, key = %key, "settlement marked as paid");
        Ok(true)
    }

    /// Returns the settlements of `settlements` not yet marked paid in
    /// `context`, preserving their order.
    pub async fn filter_unpaid(
        &self,
        context: &str,
        settlements: Vec<Settlement>,
    ) -> Result<Vec<Settlement>> {
        let settled = self.store.get(context).await?;
        Ok(settlements
            .into_iter()
            .filter(|s| !settled.is_paid(s))
            .collect())
    }

    pub async fn settled(&self, context: &str) -> Result<SettledSet> {
        self.store.get(context).await
    }
}
