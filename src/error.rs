use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettleError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for SettleError {
    fn from(err: rocksdb::Error) -> Self {
        SettleError::InternalError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SettleError>;
