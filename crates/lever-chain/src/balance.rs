//! Read-only balance lookups via dev-inspect.
//!
//! The vault and reserve both expose a `u128` balance entry point. The
//! reader builds a single-call PTB, executes it as a dev-inspect (nothing
//! is committed), and decodes the first return value. A return tag other
//! than `u128` is a hard failure, never a coercion.

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use sui_sdk::SuiClient;
use sui_types::base_types::{ObjectID, SuiAddress};
use sui_types::programmable_transaction_builder::ProgrammableTransactionBuilder;
use sui_types::transaction::TransactionKind;

use crate::rpc::resolve_shared;
use crate::tx::MoveTarget;

#[derive(Clone)]
pub struct BalanceReader {
    client: SuiClient,
    target: MoveTarget,
    object: ObjectID,
}

impl BalanceReader {
    pub fn new(client: SuiClient, target: MoveTarget, object: ObjectID) -> Self {
        Self {
            client,
            target,
            object,
        }
    }

    /// Balance of `holder` in MIST.
    pub async fn balance_in_mist(&self, holder: SuiAddress) -> Result<u128> {
        let object = resolve_shared(&self.client, self.object, false).await?;

        let mut ptb = ProgrammableTransactionBuilder::new();
        let object_arg = ptb.obj(object).context("balance object argument")?;
        let holder_arg = ptb.pure(holder).context("encode holder address")?;
        ptb.command(self.target.move_call(vec![object_arg, holder_arg]));
        let kind = TransactionKind::ProgrammableTransaction(ptb.finish());

        let resp = self
            .client
            .read_api()
            .dev_inspect_transaction_block(holder, kind, None, None, None)
            .await
            .with_context(|| format!("dev-inspect {}", self.target))?;
        if let Some(err) = &resp.error {
            bail!("failed to inspect {}: {err}", self.target);
        }

        let value = serde_json::to_value(&resp).context("serialize dev-inspect response")?;
        let (bytes, type_tag) = first_return_value(&value)
            .with_context(|| format!("{} produced no return value", self.target))?;
        decode_u128(&bytes, &type_tag)
    }
}

/// Extract `[bytes, type]` of the first return value from a serialized
/// dev-inspect response.
fn first_return_value(value: &Value) -> Result<(Vec<u8>, String)> {
    let entry = value
        .pointer("/results/0/returnValues/0")
        .ok_or_else(|| anyhow!("no return values in dev-inspect response"))?;
    let bytes = entry
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("return value missing byte array"))?
        .iter()
        .map(|b| {
            b.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| anyhow!("return value bytes are not u8"))
        })
        .collect::<Result<Vec<u8>>>()?;
    let type_tag = entry
        .get(1)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("return value missing type tag"))?;
    Ok((bytes, type_tag.to_string()))
}

/// Decode a `u128` return value, rejecting any other type tag.
pub fn decode_u128(bytes: &[u8], type_tag: &str) -> Result<u128> {
    if type_tag != "u128" {
        bail!("unexpected return type: expected u128, got {type_tag}");
    }
    bcs::from_bytes(bytes).context("decode u128 return value")
}
