//! Adapters between files on disk and the settlement pipeline.

pub mod csv;
