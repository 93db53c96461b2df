use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walletd::application::engine::BalanceEngine;
use walletd::domain::ports::{WalletStore, WalletStoreBox};
use walletd::domain::wallet::Wallet;
use walletd::infrastructure::in_memory::InMemoryWalletStore;
#[cfg(feature = "storage-rocksdb")]
use walletd::infrastructure::rocksdb::RocksDbWalletStore;
use walletd::interfaces::http::gateway;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP gateway to
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// JSON file with wallets to provision at startup
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn build_store(cli: &Cli) -> Result<WalletStoreBox> {
    match &cli.db_path {
        Some(path) => {
            #[cfg(feature = "storage-rocksdb")]
            {
                let store = RocksDbWalletStore::open(path).into_diagnostic()?;
                tracing::info!(path = %path.display(), "using RocksDB wallet store");
                Ok(Box::new(store))
            }
            #[cfg(not(feature = "storage-rocksdb"))]
            {
                let _ = path;
                Err(miette::miette!(
                    "this build has no RocksDB support; rebuild with --features storage-rocksdb"
                ))
            }
        }
        None => {
            tracing::info!("using in-memory wallet store");
            Ok(Box::new(InMemoryWalletStore::new()))
        }
    }
}

async fn seed_wallets(store: &dyn WalletStore, path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path).into_diagnostic()?;
    let wallets: Vec<Wallet> = serde_json::from_str(&contents).into_diagnostic()?;

    let count = wallets.len();
    for wallet in wallets {
        store.insert(wallet).await.into_diagnostic()?;
    }
    tracing::info!(count, path = %path.display(), "provisioned wallets from seed file");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = build_store(&cli)?;
    if let Some(path) = &cli.seed {
        seed_wallets(store.as_ref(), path).await?;
    }
    let engine = Arc::new(BalanceEngine::new(store));

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .into_diagnostic()?;
    tracing::info!(addr = %cli.listen, "wallet service listening");
    axum::serve(listener, gateway::router(engine))
        .await
        .into_diagnostic()?;

    Ok(())
}
