//! Implementations of [`crate::domain::ports::SettledStore`].

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
