use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Registry of per-wallet exclusive locks.
///
/// Each wallet gets one `Arc<Mutex<()>>` slot; the owned guard returned by
/// `acquire` lives inside the unit of work that holds it, so the lock spans
/// the whole read-modify-write sequence. Slots are created on first touch
/// and never reclaimed; the wallet set is fixed at provisioning time.
#[derive(Default)]
pub struct LockTable {
    slots: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl LockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the wallet's lock is free and returns the held guard.
    pub async fn acquire(&self, wallet_id: Uuid) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().await;
            Arc::clone(slots.entry(wallet_id).or_default())
        };
        slot.lock_owned().await
    }
}
