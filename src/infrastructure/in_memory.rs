use super::lock_table::LockTable;
use crate::domain::ports::{UnitOfWork, WalletStore};
use crate::domain::wallet::Wallet;
use crate::error::{Result, WalletError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OwnedMutexGuard, RwLock};
use uuid::Uuid;

/// A thread-safe in-memory wallet store.
///
/// Uses `Arc<RwLock<HashMap<Uuid, Wallet>>>` to allow shared concurrent
/// access. Ideal for testing or running the service without a database;
/// the per-wallet lock discipline is identical to the durable backend.
#[derive(Default, Clone)]
pub struct InMemoryWalletStore {
    wallets: Arc<RwLock<HashMap<Uuid, Wallet>>>,
    locks: Arc<LockTable>,
}

impl InMemoryWalletStore {
    /// Creates a new, empty in-memory wallet store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletStore for InMemoryWalletStore {
    async fn lock_and_get(&self, wallet_id: Uuid) -> Result<Box<dyn UnitOfWork>> {
        let guard = self.locks.acquire(wallet_id).await;

        let wallet = {
            let wallets = self.wallets.read().await;
            wallets.get(&wallet_id).cloned()
        };
        let Some(wallet) = wallet else {
            // Guard drops here: nothing to work on.
            return Err(WalletError::WalletNotFound);
        };

        Ok(Box::new(InMemoryUnitOfWork {
            wallets: Arc::clone(&self.wallets),
            wallet,
            staged: None,
            _guard: guard,
        }))
    }

    async fn insert(&self, wallet: Wallet) -> Result<()> {
        let mut wallets = self.wallets.write().await;
        wallets.insert(wallet.id, wallet);
        Ok(())
    }
}

struct InMemoryUnitOfWork {
    wallets: Arc<RwLock<HashMap<Uuid, Wallet>>>,
    wallet: Wallet,
    staged: Option<Wallet>,
    _guard: OwnedMutexGuard<()>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    fn save(&mut self, wallet: Wallet) {
        self.staged = Some(wallet);
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let InMemoryUnitOfWork {
            wallets,
            staged,
            _guard,
            ..
        } = *self;

        // The lock is still held while the staged state is published.
        if let Some(wallet) = staged {
            let mut wallets = wallets.write().await;
            wallets.insert(wallet.id, wallet);
        }
        Ok(())
    }
}
