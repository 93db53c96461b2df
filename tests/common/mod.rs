use axum::Router;
use axum::response::Response;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;
use walletd::application::engine::BalanceEngine;
use walletd::domain::ports::WalletStore;
use walletd::domain::wallet::{Balance, Wallet};
use walletd::infrastructure::in_memory::InMemoryWalletStore;
use walletd::interfaces::http::gateway;

pub async fn seeded_store(wallets: &[(Uuid, Decimal)]) -> InMemoryWalletStore {
    let store = InMemoryWalletStore::new();
    for (id, balance) in wallets {
        store
            .insert(Wallet::new(*id, Balance::new(*balance)))
            .await
            .unwrap();
    }
    store
}

pub async fn seeded_engine(wallets: &[(Uuid, Decimal)]) -> BalanceEngine {
    BalanceEngine::new(Box::new(seeded_store(wallets).await))
}

pub async fn seeded_router(wallets: &[(Uuid, Decimal)]) -> Router {
    gateway::router(Arc::new(seeded_engine(wallets).await))
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
