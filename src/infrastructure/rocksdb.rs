use super::lock_table::LockTable;
use crate::domain::ports::{UnitOfWork, WalletStore};
use crate::domain::wallet::Wallet;
use crate::error::{Result, WalletError};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

/// Column family for storing wallet states.
pub const CF_WALLETS: &str = "wallets";

/// A durable wallet store backed by RocksDB.
///
/// Wallets live in a dedicated column family as JSON values keyed by the
/// wallet id. RocksDB has no row locks of its own, so the exclusive
/// per-wallet lock is the same in-process `LockTable` the in-memory backend
/// uses; writes go through `put_cf` only at commit time, which makes a unit
/// of work all-or-nothing.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbWalletStore {
    db: Arc<DB>,
    locks: Arc<LockTable>,
}

impl RocksDbWalletStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the wallets column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_wallets = ColumnFamilyDescriptor::new(CF_WALLETS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_wallets])?;

        Ok(Self {
            db: Arc::new(db),
            locks: Arc::new(LockTable::new()),
        })
    }

    fn cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_WALLETS).ok_or_else(|| {
            WalletError::Storage(Box::new(std::io::Error::other(
                "wallets column family not found",
            )))
        })
    }
}

#[async_trait]
impl WalletStore for RocksDbWalletStore {
    async fn lock_and_get(&self, wallet_id: Uuid) -> Result<Box<dyn UnitOfWork>> {
        let guard = self.locks.acquire(wallet_id).await;

        let cf = self.cf()?;
        let Some(bytes) = self.db.get_cf(cf, wallet_id.as_bytes())? else {
            return Err(WalletError::WalletNotFound);
        };
        let wallet: Wallet = serde_json::from_slice(&bytes)?;

        Ok(Box::new(RocksDbUnitOfWork {
            db: Arc::clone(&self.db),
            wallet,
            staged: None,
            _guard: guard,
        }))
    }

    async fn insert(&self, wallet: Wallet) -> Result<()> {
        let cf = self.cf()?;
        let value = serde_json::to_vec(&wallet)?;
        self.db.put_cf(cf, wallet.id.as_bytes(), value)?;
        Ok(())
    }
}

struct RocksDbUnitOfWork {
    db: Arc<DB>,
    wallet: Wallet,
    staged: Option<Wallet>,
    _guard: OwnedMutexGuard<()>,
}

#[async_trait]
impl UnitOfWork for RocksDbUnitOfWork {
    fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    fn save(&mut self, wallet: Wallet) {
        self.staged = Some(wallet);
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let RocksDbUnitOfWork {
            db, staged, _guard, ..
        } = *self;

        if let Some(wallet) = staged {
            let cf = db.cf_handle(CF_WALLETS).ok_or_else(|| {
                WalletError::Storage(Box::new(std::io::Error::other(
                    "wallets column family not found",
                )))
            })?;
            let value = serde_json::to_vec(&wallet)?;
            db.put_cf(cf, wallet.id.as_bytes(), value)?;
        }
        Ok(())
    }
}
