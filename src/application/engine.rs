use crate::domain::operation::{Operation, OperationKind};
use crate::domain::ports::WalletStoreBox;
use crate::domain::wallet::{Amount, Balance};
use crate::error::Result;
use uuid::Uuid;

/// The main entry point for balance mutations.
///
/// `BalanceEngine` applies deposits, withdrawals, and balance reads as
/// units of work over the wallet store. Each operation re-reads the current
/// balance under the wallet's exclusive lock immediately before mutating,
/// so concurrent operations on the same wallet never lose updates. The
/// engine caches nothing across requests.
pub struct BalanceEngine {
    store: WalletStoreBox,
}

impl BalanceEngine {
    /// Creates a new `BalanceEngine` over the given wallet store.
    pub fn new(store: WalletStoreBox) -> Self {
        Self { store }
    }

    /// Applies a requested operation, dispatching on its kind.
    pub async fn apply(&self, op: Operation) -> Result<()> {
        match op.kind {
            OperationKind::Deposit => self.deposit(op.wallet_id, op.amount).await,
            OperationKind::Withdraw => self.withdraw(op.wallet_id, op.amount).await,
        }
    }

    /// Adds `amount` to the wallet's balance.
    pub async fn deposit(&self, wallet_id: Uuid, amount: Amount) -> Result<()> {
        let mut uow = self.store.lock_and_get(wallet_id).await?;
        let mut wallet = uow.wallet().clone();
        wallet.deposit(amount);
        uow.save(wallet);
        uow.commit().await
    }

    /// Removes `amount` from the wallet's balance.
    ///
    /// Fails with `InsufficientBalance` if the balance would go negative;
    /// the unit of work is dropped uncommitted and nothing changes.
    pub async fn withdraw(&self, wallet_id: Uuid, amount: Amount) -> Result<()> {
        let mut uow = self.store.lock_and_get(wallet_id).await?;
        let mut wallet = uow.wallet().clone();
        wallet.withdraw(amount)?;
        uow.save(wallet);
        uow.commit().await
    }

    /// Returns the wallet's current balance.
    ///
    /// Uses the locking read like the mutating operations, so a read is
    /// serialized against concurrent writes on the same wallet and never
    /// observes a half-applied mutation.
    pub async fn balance(&self, wallet_id: Uuid) -> Result<Balance> {
        let uow = self.store.lock_and_get(wallet_id).await?;
        let balance = uow.wallet().balance;
        uow.commit().await?;
        Ok(balance)
    }
}
