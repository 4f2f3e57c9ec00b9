//! Environment-driven configuration.
//!
//! All contract identifiers come from environment variables so deployments
//! can point at different package publishes without a rebuild. Identifiers
//! are parsed into [`ObjectID`] here, at the boundary, so a malformed value
//! fails at startup with the variable name instead of inside a request.

use anyhow::{anyhow, Context, Result};
use std::env;
use sui_types::base_types::ObjectID;

/// Move module of the lending vault.
pub const VAULT_MODULE: &str = "vault";
/// Move module of the collateral reserve.
pub const RESERVE_MODULE: &str = "reserve";

pub const DEPOSIT_FUNCTION: &str = "deposit";
pub const WITHDRAW_FUNCTION: &str = "withdraw";
pub const BORROW_FUNCTION: &str = "borrow";
pub const REPAY_FUNCTION: &str = "repay";
pub const BALANCE_OF_FUNCTION: &str = "balance_of";
pub const COLLATERAL_BALANCE_OF_FUNCTION: &str = "collateral_balance_of";

/// Gas budget attached to submitted transactions, in MIST.
pub const DEFAULT_GAS_BUDGET: u64 = 20_000_000;

pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

const DEVNET_FULLNODE: &str = "https://fullnode.devnet.sui.io:443";
const DEFAULT_HERMES_URL: &str = "https://hermes.pyth.network";
/// Pyth SUI/USD price feed id.
const SUI_USD_FEED_ID: &str =
    "0x23d7315113f5b1d3ba7a83604c44b94d79f4fd69af77f804fc7f920a6dc65744";

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub package_id: ObjectID,
    pub vault_id: ObjectID,
    pub collateral_package_id: ObjectID,
    pub reserve_id: ObjectID,
    pub borrower_funds_id: ObjectID,
    pub hermes_url: String,
    pub price_feed_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            rpc_url: env_or("LEVER_RPC_URL", DEVNET_FULLNODE),
            package_id: required_object_id("LEVER_PACKAGE_ID")?,
            vault_id: required_object_id("LEVER_VAULT_ID")?,
            collateral_package_id: required_object_id("LEVER_COLLATERAL_PACKAGE_ID")?,
            reserve_id: required_object_id("LEVER_RESERVE_ID")?,
            borrower_funds_id: required_object_id("LEVER_BORROWER_FUNDS_ID")?,
            hermes_url: env_or("LEVER_HERMES_URL", DEFAULT_HERMES_URL),
            price_feed_id: env_or("LEVER_PRICE_FEED_ID", SUI_USD_FEED_ID),
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

fn required_object_id(var: &str) -> Result<ObjectID> {
    let raw = env::var(var).map_err(|_| anyhow!("{var} must be set"))?;
    parse_object_id(var, &raw)
}

fn parse_object_id(var: &str, raw: &str) -> Result<ObjectID> {
    ObjectID::from_hex_literal(raw.trim())
        .with_context(|| format!("{var} is not a valid object id: {raw}"))
}
