//! Sui interaction layer for the lending dashboard.
//!
//! Everything the dashboard reads or submits on chain goes through this
//! crate: dev-inspect balance lookups, the per-address debt dynamic field,
//! vault pool statistics, and construction of the five vault transaction
//! shapes (deposit/withdraw against vault and reserve, borrow, repay).
//! Signing and submission are delegated to an injected [`TransactionSigner`]
//! so wallet backends can be swapped out, including in tests.

pub mod balance;
pub mod debt;
mod rpc;
pub mod signer;
pub mod stats;
pub mod tracker;
pub mod tx;

pub use balance::BalanceReader;
pub use debt::DebtReader;
pub use signer::TransactionSigner;
pub use stats::{fetch_vault_stats, VaultStats};
pub use tracker::DebtTracker;
pub use tx::{MoveTarget, VaultTransactions};
