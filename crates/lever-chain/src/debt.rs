//! Per-address debt, read from a dynamic field under the vault.
//!
//! Debt entries are stored as dynamic fields keyed by borrower address.
//! An absent field is the legitimate "no debt" case and yields zero; every
//! other surprise (primitive content, missing `value`, non-numeric value)
//! is a hard failure.

use anyhow::{anyhow, bail, Context, Result};
use move_core_types::language_storage::TypeTag;
use serde_json::{json, Value};
use sui_sdk::SuiClient;
use sui_types::base_types::{ObjectID, SuiAddress};
use sui_types::dynamic_field::DynamicFieldName;
use sui_types::error::SuiObjectResponseError;

#[derive(Clone)]
pub struct DebtReader {
    client: SuiClient,
    vault: ObjectID,
}

impl DebtReader {
    pub fn new(client: SuiClient, vault: ObjectID) -> Self {
        Self { client, vault }
    }

    /// Outstanding debt of `holder` in MIST. Zero if no debt field exists.
    pub async fn debt_in_mist(&self, holder: SuiAddress) -> Result<u64> {
        let name = DynamicFieldName {
            type_: TypeTag::Address,
            value: json!(holder.to_string()),
        };
        let resp = self
            .client
            .read_api()
            .get_dynamic_field_object(self.vault, name)
            .await
            .with_context(|| format!("fetch debt field under {}", self.vault))?;

        if let Some(err) = &resp.error {
            if is_field_not_found(err) {
                return Ok(0);
            }
            bail!("debt field lookup failed: {err}");
        }

        let value = serde_json::to_value(&resp).context("serialize debt field response")?;
        debt_from_content(&value)
    }
}

fn is_field_not_found(err: &SuiObjectResponseError) -> bool {
    matches!(err, SuiObjectResponseError::DynamicFieldNotFound { .. })
        || err.to_string().to_lowercase().contains("dynamic field")
}

/// Pull the `value` field out of a serialized debt field object.
fn debt_from_content(value: &Value) -> Result<u64> {
    let content = value
        .pointer("/data/content")
        .ok_or_else(|| anyhow!("debt field object has no content"))?;
    let data_type = content.get("dataType").and_then(Value::as_str).unwrap_or("");
    if data_type != "moveObject" {
        bail!("debt field content is not a move object (got {data_type:?})");
    }
    let field = content
        .pointer("/fields/value")
        .ok_or_else(|| anyhow!("debt field object is missing `value`"))?;
    let raw = field
        .as_str()
        .ok_or_else(|| anyhow!("debt value is not a numeric string (got {field})"))?;
    raw.parse::<u64>()
        .with_context(|| format!("parse debt value {raw:?}"))
}
