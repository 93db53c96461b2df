use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalletError>;

/// Failure outcomes of wallet operations.
///
/// `WalletNotFound` and `InsufficientBalance` are expected domain outcomes
/// and carry the exact messages the gateway returns to clients. `Storage`
/// wraps backend failures; the unit of work that hit one is always dropped
/// uncommitted.
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet hasn't found!")]
    WalletNotFound,
    #[error("Not enough balance for this operation!")]
    InsufficientBalance,
    #[error("Amount must be positive!")]
    NonPositiveAmount,
    #[error("storage failure: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for WalletError {
    fn from(err: rocksdb::Error) -> Self {
        Self::Storage(Box::new(err))
    }
}
