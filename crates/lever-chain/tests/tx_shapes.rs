//! Shape tests for the five vault transaction constructions.
//!
//! Object references are mocked (no fullnode involved), the way the
//! shapes would be resolved against a live network is covered by the
//! orchestrators in `tx.rs`.

use parking_lot::Mutex;
use serde_json::{json, Value};
use sui_types::base_types::{ObjectDigest, ObjectID, ObjectRef, SequenceNumber, SuiAddress};
use sui_types::transaction::{
    Argument, Command, ObjectArg, SharedObjectMutability, TransactionKind,
};

use async_trait::async_trait;
use lever_chain::tx::{
    build_borrow, build_deposit, build_repay, build_withdraw, submit_transaction, MoveTarget,
};
use lever_chain::TransactionSigner;

fn object_id(last_byte: u8) -> ObjectID {
    let mut bytes = [0u8; 32];
    bytes[31] = last_byte;
    ObjectID::from_bytes(bytes).unwrap()
}

fn mock_shared(last_byte: u8) -> ObjectArg {
    ObjectArg::SharedObject {
        id: object_id(last_byte),
        initial_shared_version: SequenceNumber::from_u64(1),
        mutability: SharedObjectMutability::Mutable,
    }
}

fn mock_owned(last_byte: u8) -> ObjectRef {
    (
        object_id(last_byte),
        SequenceNumber::from_u64(1),
        ObjectDigest::new([0; 32]),
    )
}

fn vault_target(function: &str) -> MoveTarget {
    MoveTarget::new(object_id(0xaa), "vault", function)
}

#[test]
fn deposit_splits_gas_then_calls_deposit() {
    let tx = build_deposit(&vault_target("deposit"), mock_shared(1), 5_000_000_000).unwrap();

    assert_eq!(tx.commands.len(), 2);
    match &tx.commands[0] {
        Command::SplitCoins(Argument::GasCoin, amounts) => assert_eq!(amounts.len(), 1),
        other => panic!("expected SplitCoins off the gas coin, got {other:?}"),
    }
    match &tx.commands[1] {
        Command::MoveCall(call) => {
            assert_eq!(call.module, "vault");
            assert_eq!(call.function, "deposit");
            assert_eq!(call.arguments.len(), 2);
            // The second argument is the coin split off in command 0.
            assert_eq!(call.arguments[1], Argument::Result(0));
        }
        other => panic!("expected a MoveCall, got {other:?}"),
    }
}

#[test]
fn withdraw_calls_the_pool_with_a_pure_amount() {
    let tx = build_withdraw(&vault_target("withdraw"), mock_shared(1), 250).unwrap();

    assert_eq!(tx.commands.len(), 1);
    match &tx.commands[0] {
        Command::MoveCall(call) => {
            assert_eq!(call.function, "withdraw");
            assert_eq!(call.arguments.len(), 2);
        }
        other => panic!("expected a MoveCall, got {other:?}"),
    }
}

#[test]
fn borrow_passes_vault_reserve_funds_and_amount() {
    let tx = build_borrow(
        &vault_target("borrow"),
        mock_shared(1),
        mock_shared(2),
        mock_owned(3),
        1_000,
    )
    .unwrap();

    assert_eq!(tx.commands.len(), 1);
    match &tx.commands[0] {
        Command::MoveCall(call) => {
            assert_eq!(call.function, "borrow");
            assert_eq!(call.arguments.len(), 4);
        }
        other => panic!("expected a MoveCall, got {other:?}"),
    }
    assert_eq!(tx.inputs.len(), 4);
}

#[test]
fn repay_passes_vault_and_funds_only() {
    let tx = build_repay(&vault_target("repay"), mock_shared(1), mock_owned(3)).unwrap();

    assert_eq!(tx.commands.len(), 1);
    match &tx.commands[0] {
        Command::MoveCall(call) => {
            assert_eq!(call.function, "repay");
            assert_eq!(call.arguments.len(), 2);
        }
        other => panic!("expected a MoveCall, got {other:?}"),
    }
}

#[test]
fn zero_amounts_never_produce_a_transaction() {
    assert!(build_deposit(&vault_target("deposit"), mock_shared(1), 0).is_err());
    assert!(build_withdraw(&vault_target("withdraw"), mock_shared(1), 0).is_err());
    assert!(build_borrow(
        &vault_target("borrow"),
        mock_shared(1),
        mock_shared(2),
        mock_owned(3),
        0
    )
    .is_err());
}

/// Records every submission and answers with a canned wallet result.
struct RecordingSigner {
    calls: Mutex<Vec<TransactionKind>>,
    fail: bool,
}

impl RecordingSigner {
    fn new(fail: bool) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail,
        }
    }
}

#[async_trait]
impl TransactionSigner for RecordingSigner {
    async fn sign_and_execute(
        &self,
        _sender: SuiAddress,
        tx: TransactionKind,
        _gas_budget: u64,
    ) -> anyhow::Result<Value> {
        self.calls.lock().push(tx);
        if self.fail {
            anyhow::bail!("wallet rejected the transaction");
        }
        Ok(json!({ "digest": "9rj8TvRv5DLUnDjSfAUJRyQHbNaAMkVuJ7LCpsS2LiEa" }))
    }
}

#[tokio::test]
async fn submission_returns_the_signer_result_unmodified() {
    let signer = RecordingSigner::new(false);
    let tx = build_deposit(&vault_target("deposit"), mock_shared(1), 42).unwrap();

    let result = submit_transaction(&signer, SuiAddress::ZERO, tx, 20_000_000, "deposit")
        .await
        .unwrap();
    assert_eq!(
        result,
        json!({ "digest": "9rj8TvRv5DLUnDjSfAUJRyQHbNaAMkVuJ7LCpsS2LiEa" })
    );
    assert_eq!(signer.calls.lock().len(), 1);
}

#[tokio::test]
async fn signer_errors_propagate_unchanged() {
    let signer = RecordingSigner::new(true);
    let tx = build_repay(&vault_target("repay"), mock_shared(1), mock_owned(3)).unwrap();

    let err = submit_transaction(&signer, SuiAddress::ZERO, tx, 20_000_000, "repay")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "wallet rejected the transaction");
}
