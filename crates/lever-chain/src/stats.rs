//! Aggregate vault statistics, read from the vault object's content.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use sui_json_rpc_types::SuiObjectDataOptions;
use sui_sdk::SuiClient;
use sui_types::base_types::ObjectID;

/// Aggregate deposits and remaining liquidity, both in MIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultStats {
    pub total_deposits: u128,
    pub total_liquidity: u128,
}

/// Fetch the vault object with content and pull out the pool figures.
pub async fn fetch_vault_stats(client: &SuiClient, vault: ObjectID) -> Result<VaultStats> {
    let resp = client
        .read_api()
        .get_object_with_options(vault, SuiObjectDataOptions::new().with_content())
        .await
        .with_context(|| format!("fetch vault object {vault}"))?;
    let value = serde_json::to_value(&resp).context("serialize vault object response")?;
    stats_from_object(&value)
}

fn stats_from_object(value: &Value) -> Result<VaultStats> {
    let fields = value
        .pointer("/data/content/fields")
        .ok_or_else(|| anyhow!("vault object has no content fields"))?;
    let total_deposits = u128_field(fields, "/total_deposits")?;
    let total_liquidity = u128_field(fields, "/pool/fields/balance")?;
    Ok(VaultStats {
        total_deposits,
        total_liquidity,
    })
}

fn u128_field(fields: &Value, pointer: &str) -> Result<u128> {
    let field = fields
        .pointer(pointer)
        .ok_or_else(|| anyhow!("vault object missing field {pointer}"))?;
    let raw = field
        .as_str()
        .ok_or_else(|| anyhow!("vault field {pointer} is not a numeric string (got {field})"))?;
    raw.parse::<u128>()
        .with_context(|| format!("parse vault field {pointer} from {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_deposits_and_pool_balance() {
        let resp = json!({ "data": { "content": {
            "dataType": "moveObject",
            "fields": {
                "id": { "id": "0x7" },
                "total_deposits": "1000",
                "pool": { "type": "0x2::balance::Balance<0x2::sui::SUI>",
                          "fields": { "balance": "400" } }
            }
        }}});
        let stats = stats_from_object(&resp).unwrap();
        assert_eq!(
            stats,
            VaultStats {
                total_deposits: 1000,
                total_liquidity: 400
            }
        );
    }

    #[test]
    fn missing_pool_field_is_an_error() {
        let resp = json!({ "data": { "content": {
            "dataType": "moveObject",
            "fields": { "total_deposits": "1000" }
        }}});
        assert!(stats_from_object(&resp).is_err());
    }

    #[test]
    fn object_without_content_is_an_error() {
        let resp = json!({ "data": { "objectId": "0x7" } });
        assert!(stats_from_object(&resp).is_err());
    }
}
