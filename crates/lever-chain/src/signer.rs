//! The signing capability the transaction builder delegates to.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use sui_types::base_types::SuiAddress;
use sui_types::transaction::TransactionKind;

/// Signs and submits a built transaction on behalf of `sender`.
///
/// Implementations own key material and gas selection; the builder never
/// sees either. The returned JSON is the wallet/fullnode execution result,
/// passed through to the caller unmodified.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn sign_and_execute(
        &self,
        sender: SuiAddress,
        tx: TransactionKind,
        gas_budget: u64,
    ) -> Result<Value>;
}
