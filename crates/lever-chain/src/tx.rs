//! Construction of the five vault transaction shapes.
//!
//! The `build_*` functions are pure: they take already-resolved object
//! arguments and produce a [`ProgrammableTransaction`], so the shapes are
//! testable without a fullnode. [`VaultTransactions`] layers validation,
//! reference resolution, and signer delegation on top.

use std::fmt;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use sui_sdk::SuiClient;
use sui_types::base_types::{ObjectID, ObjectRef, SuiAddress};
use sui_types::programmable_transaction_builder::ProgrammableTransactionBuilder;
use sui_types::transaction::{
    Argument, Command, ObjectArg, ProgrammableMoveCall, ProgrammableTransaction, TransactionKind,
};
use tracing::{debug, error};

use lever_types::config::{
    Config, BORROW_FUNCTION, DEFAULT_GAS_BUDGET, DEPOSIT_FUNCTION, REPAY_FUNCTION,
    RESERVE_MODULE, SUI_COIN_TYPE, VAULT_MODULE, WITHDRAW_FUNCTION,
};

use crate::rpc::{resolve_owned, resolve_shared};
use crate::signer::TransactionSigner;
use crate::tracker::DebtTracker;

/// A fully-qualified Move entry point.
#[derive(Debug, Clone)]
pub struct MoveTarget {
    pub package: ObjectID,
    pub module: String,
    pub function: String,
}

impl MoveTarget {
    pub fn new(package: ObjectID, module: &str, function: &str) -> Self {
        Self {
            package,
            module: module.to_string(),
            function: function.to_string(),
        }
    }

    pub(crate) fn move_call(&self, arguments: Vec<Argument>) -> Command {
        Command::MoveCall(Box::new(ProgrammableMoveCall {
            package: self.package,
            module: self.module.clone(),
            function: self.function.clone(),
            type_arguments: vec![],
            arguments,
        }))
    }
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}

fn ensure_positive(amount_mist: u64, op: &str) -> Result<()> {
    if amount_mist == 0 {
        bail!("{op} amount must be positive");
    }
    Ok(())
}

/// Split the deposit amount off the gas coin, then hand the new coin to the
/// pool's `deposit` entry point. The remainder of the gas coin pays fees.
pub fn build_deposit(
    target: &MoveTarget,
    pool: ObjectArg,
    amount_mist: u64,
) -> Result<ProgrammableTransaction> {
    ensure_positive(amount_mist, "Deposit")?;
    let mut ptb = ProgrammableTransactionBuilder::new();
    let amount = ptb.pure(amount_mist).context("encode deposit amount")?;
    let coin = ptb.command(Command::SplitCoins(Argument::GasCoin, vec![amount]));
    let pool = ptb.obj(pool).context("deposit pool argument")?;
    ptb.command(target.move_call(vec![pool, coin]));
    Ok(ptb.finish())
}

pub fn build_withdraw(
    target: &MoveTarget,
    pool: ObjectArg,
    amount_mist: u64,
) -> Result<ProgrammableTransaction> {
    ensure_positive(amount_mist, "Withdrawal")?;
    let mut ptb = ProgrammableTransactionBuilder::new();
    let pool = ptb.obj(pool).context("withdraw pool argument")?;
    let amount = ptb.pure(amount_mist).context("encode withdraw amount")?;
    ptb.command(target.move_call(vec![pool, amount]));
    Ok(ptb.finish())
}

pub fn build_borrow(
    target: &MoveTarget,
    vault: ObjectArg,
    reserve: ObjectArg,
    borrower_funds: ObjectRef,
    amount_mist: u64,
) -> Result<ProgrammableTransaction> {
    ensure_positive(amount_mist, "Borrow")?;
    let mut ptb = ProgrammableTransactionBuilder::new();
    let vault = ptb.obj(vault).context("borrow vault argument")?;
    let reserve = ptb.obj(reserve).context("borrow reserve argument")?;
    let funds = ptb
        .obj(ObjectArg::ImmOrOwnedObject(borrower_funds))
        .context("borrower funds argument")?;
    let amount = ptb.pure(amount_mist).context("encode borrow amount")?;
    ptb.command(target.move_call(vec![vault, reserve, funds, amount]));
    Ok(ptb.finish())
}

pub fn build_repay(
    target: &MoveTarget,
    vault: ObjectArg,
    borrower_funds: ObjectRef,
) -> Result<ProgrammableTransaction> {
    let mut ptb = ProgrammableTransactionBuilder::new();
    let vault = ptb.obj(vault).context("repay vault argument")?;
    let funds = ptb
        .obj(ObjectArg::ImmOrOwnedObject(borrower_funds))
        .context("borrower funds argument")?;
    ptb.command(target.move_call(vec![vault, funds]));
    Ok(ptb.finish())
}

/// Delegate a built transaction to the signer, returning its result
/// unmodified. Failures are logged and propagated unchanged; nothing is
/// retried.
pub async fn submit_transaction(
    signer: &dyn TransactionSigner,
    sender: SuiAddress,
    tx: ProgrammableTransaction,
    gas_budget: u64,
    op: &str,
) -> Result<Value> {
    match signer
        .sign_and_execute(sender, TransactionKind::ProgrammableTransaction(tx), gas_budget)
        .await
    {
        Ok(result) => {
            debug!(op, "transaction submitted");
            Ok(result)
        }
        Err(err) => {
            error!(op, %err, "transaction failed");
            Err(err)
        }
    }
}

/// The dashboard's write surface: the five vault operations, wired to a
/// fullnode for reference resolution and to an injected signer for
/// submission.
pub struct VaultTransactions {
    client: SuiClient,
    config: Config,
    gas_budget: u64,
    tracker: DebtTracker,
}

impl VaultTransactions {
    pub fn new(client: SuiClient, config: Config) -> Self {
        Self {
            client,
            config,
            gas_budget: DEFAULT_GAS_BUDGET,
            tracker: DebtTracker::new(),
        }
    }

    fn vault_target(&self, function: &str) -> MoveTarget {
        MoveTarget::new(self.config.package_id, VAULT_MODULE, function)
    }

    fn reserve_target(&self, function: &str) -> MoveTarget {
        MoveTarget::new(self.config.collateral_package_id, RESERVE_MODULE, function)
    }

    /// Supply SUI to the lending vault.
    pub async fn deposit(
        &self,
        amount_mist: u64,
        sender: SuiAddress,
        signer: &dyn TransactionSigner,
    ) -> Result<Value> {
        ensure_positive(amount_mist, "Deposit")?;
        self.ensure_sender_has_sui(sender).await?;
        let vault = resolve_shared(&self.client, self.config.vault_id, true).await?;
        let tx = build_deposit(&self.vault_target(DEPOSIT_FUNCTION), vault, amount_mist)?;
        submit_transaction(signer, sender, tx, self.gas_budget, "deposit").await
    }

    pub async fn withdraw(
        &self,
        amount_mist: u64,
        sender: SuiAddress,
        signer: &dyn TransactionSigner,
    ) -> Result<Value> {
        ensure_positive(amount_mist, "Withdrawal")?;
        let vault = resolve_shared(&self.client, self.config.vault_id, true).await?;
        let tx = build_withdraw(&self.vault_target(WITHDRAW_FUNCTION), vault, amount_mist)?;
        submit_transaction(signer, sender, tx, self.gas_budget, "withdraw").await
    }

    /// Post SUI into the collateral reserve.
    pub async fn deposit_collateral(
        &self,
        amount_mist: u64,
        sender: SuiAddress,
        signer: &dyn TransactionSigner,
    ) -> Result<Value> {
        ensure_positive(amount_mist, "Deposit")?;
        self.ensure_sender_has_sui(sender).await?;
        let reserve = resolve_shared(&self.client, self.config.reserve_id, true).await?;
        let tx = build_deposit(&self.reserve_target(DEPOSIT_FUNCTION), reserve, amount_mist)?;
        submit_transaction(signer, sender, tx, self.gas_budget, "deposit_collateral").await
    }

    pub async fn withdraw_collateral(
        &self,
        amount_mist: u64,
        sender: SuiAddress,
        signer: &dyn TransactionSigner,
    ) -> Result<Value> {
        ensure_positive(amount_mist, "Withdrawal")?;
        let reserve = resolve_shared(&self.client, self.config.reserve_id, true).await?;
        let tx = build_withdraw(&self.reserve_target(WITHDRAW_FUNCTION), reserve, amount_mist)?;
        submit_transaction(signer, sender, tx, self.gas_budget, "withdraw_collateral").await
    }

    /// Borrow against posted collateral. On success the tracked debt grows
    /// by exactly the borrowed amount.
    pub async fn open_position(
        &self,
        amount_mist: u64,
        sender: SuiAddress,
        signer: &dyn TransactionSigner,
    ) -> Result<Value> {
        ensure_positive(amount_mist, "Borrow")?;
        let vault = resolve_shared(&self.client, self.config.vault_id, true).await?;
        let reserve = resolve_shared(&self.client, self.config.reserve_id, true).await?;
        let funds = resolve_owned(&self.client, self.config.borrower_funds_id).await?;
        let tx = build_borrow(
            &self.vault_target(BORROW_FUNCTION),
            vault,
            reserve,
            funds,
            amount_mist,
        )?;
        let result = submit_transaction(signer, sender, tx, self.gas_budget, "borrow").await?;
        self.tracker.add(amount_mist);
        Ok(result)
    }

    /// Repay the open position in full. On success the tracked debt resets
    /// to zero.
    pub async fn close_position(
        &self,
        sender: SuiAddress,
        signer: &dyn TransactionSigner,
    ) -> Result<Value> {
        let vault = resolve_shared(&self.client, self.config.vault_id, true).await?;
        let funds = resolve_owned(&self.client, self.config.borrower_funds_id).await?;
        let tx = build_repay(&self.vault_target(REPAY_FUNCTION), vault, funds)?;
        let result = submit_transaction(signer, sender, tx, self.gas_budget, "repay").await?;
        self.tracker.clear();
        Ok(result)
    }

    /// The optimistic submission-side debt total.
    pub fn tracked_debt(&self) -> u64 {
        self.tracker.current()
    }

    /// Deposits split the amount off the transaction's own gas coin, so a
    /// sender with no SUI coins at all cannot fund one.
    async fn ensure_sender_has_sui(&self, sender: SuiAddress) -> Result<()> {
        let page = self
            .client
            .coin_read_api()
            .get_coins(sender, Some(SUI_COIN_TYPE.to_string()), None, Some(1))
            .await
            .context("list SUI coins for sender")?;
        if page.data.is_empty() {
            bail!("no Coin<SUI> found for {sender}: nothing to split the deposit from");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amounts_are_rejected_before_any_construction() {
        assert!(ensure_positive(0, "Deposit").is_err());
        assert!(ensure_positive(1, "Deposit").is_ok());
        let err = ensure_positive(0, "Withdrawal").unwrap_err();
        assert_eq!(err.to_string(), "Withdrawal amount must be positive");
    }

    #[test]
    fn target_renders_as_package_module_function() {
        let target = MoveTarget::new(
            ObjectID::from_hex_literal("0xabc").unwrap(),
            VAULT_MODULE,
            DEPOSIT_FUNCTION,
        );
        assert!(target.to_string().ends_with("::vault::deposit"));
    }
}
