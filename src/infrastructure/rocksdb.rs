use crate::domain::ports::SettledStore;
use crate::domain::settlement::SettledSet;
use crate::error::{Result, SettleError};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding one JSON-encoded settled set per context.
pub const CF_SETTLED: &str = "settled";

/// A persistent settled-set store backed by RocksDB.
///
/// Keys are the context bytes, values the JSON list of settlement keys.
/// `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBSettledStore {
    db: Arc<DB>,
}

impl RocksDBSettledStore {
    /// Opens or creates a RocksDB instance at `path`, creating the
    /// `settled` column family if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_settled = ColumnFamilyDescriptor::new(CF_SETTLED, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_settled])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn missing_cf() -> SettleError {
        SettleError::InternalError(Box::new(std::io::Error::other(
            "Settled column family not found",
        )))
    }
}

#[async_trait]
impl SettledStore for RocksDBSettledStore {
    async fn get(&self, context: &str) -> Result<SettledSet> {
        let cf = self.db.cf_handle(CF_SETTLED).ok_or_else(Self::missing_cf)?;

        match self.db.get_cf(&cf, context.as_bytes())? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                SettleError::InternalError(Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Deserialization error: {}", e),
                )))
            }),
            None => Ok(SettledSet::new()),
        }
    }

    async fn put(&self, context: &str, settled: SettledSet) -> Result<()> {
        let cf = self.db.cf_handle(CF_SETTLED).ok_or_else(Self::missing_cf)?;

        let value = serde_json::to_vec(&settled).map_err(|e| {
            SettleError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;
        self.db.put_cf(&cf, context.as_bytes(), value)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settlement::Settlement;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDBSettledStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_SETTLED).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_settled_store() {
        let dir = tempdir().unwrap();
        let store = RocksDBSettledStore::open(dir.path()).unwrap();

        assert!(store.get("trip").await.unwrap().is_empty());

        let mut set = SettledSet::new();
        set.insert(Settlement::new("B", "A", dec!(30)).key());
        store.put("trip", set.clone()).await.unwrap();

        assert_eq!(store.get("trip").await.unwrap(), set);
        assert!(store.get("flat").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rocksdb_survives_reopen() {
        let dir = tempdir().unwrap();
        let mut set = SettledSet::new();
        set.insert(Settlement::new("C", "A", dec!(12.5)).key());
        {
            let store = RocksDBSettledStore::open(dir.path()).unwrap();
            store.put("trip", set.clone()).await.unwrap();
        }
        let store = RocksDBSettledStore::open(dir.path()).unwrap();
        assert_eq!(store.get("trip").await.unwrap(), set);
    }
}
