//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `BalanceEngine`, the only component allowed to
//! mutate persisted balances. Every operation runs as a unit of work that
//! holds the target wallet's exclusive lock from read to commit.

pub mod engine;
