use super::settlement::SettledSet;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for the paid-settlement record of each context.
///
/// Serializing concurrent writers to the same context is the store owner's
/// responsibility.
#[async_trait]
pub trait SettledStore: Send + Sync {
    /// Returns the settled set for `context`, empty if none was stored.
    async fn get(&self, context: &str) -> Result<SettledSet>;
    async fn put(&self, context: &str, settled: SettledSet) -> Result<()>;
}

pub type SettledStoreBox = Box<dyn SettledStore>;
pub type SettledStoreFactory = Box<dyn Fn() -> SettledStoreBox + Send + Sync>;
