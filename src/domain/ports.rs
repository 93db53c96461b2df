use super::wallet::Wallet;
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub type WalletStoreBox = Box<dyn WalletStore>;

/// Durable keyed storage of wallets with an exclusive-lock-on-read
/// primitive.
///
/// `lock_and_get` is the concurrency backbone: the returned unit of work
/// holds the wallet's exclusive lock until it commits or is dropped, so two
/// concurrent operations on the same wallet are strictly serialized while
/// operations on distinct wallets proceed independently.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Begins a unit of work over a single wallet: blocks until the
    /// wallet's exclusive lock is available, acquires it, and reads the
    /// current state. Fails with `WalletNotFound` if the wallet does not
    /// exist, releasing the lock with nothing changed.
    async fn lock_and_get(&self, wallet_id: Uuid) -> Result<Box<dyn UnitOfWork>>;

    /// Inserts a wallet outside of any unit of work. Provisioning only;
    /// the balance engine never calls this.
    async fn insert(&self, wallet: Wallet) -> Result<()>;
}

/// A unit of work over exactly one wallet.
///
/// Holds the wallet's exclusive lock for its whole lifetime. Dropping a
/// unit of work without committing rolls back: the lock is released and no
/// staged state becomes visible.
#[async_trait]
pub trait UnitOfWork: Send {
    /// The wallet state observed under the lock.
    fn wallet(&self) -> &Wallet;

    /// Stages a new wallet state. Visible to other callers only after
    /// `commit`.
    fn save(&mut self, wallet: Wallet);

    /// Persists the staged state atomically and releases the lock.
    async fn commit(self: Box<Self>) -> Result<()>;
}
