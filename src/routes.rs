//! Request handlers.

use std::str::FromStr;

use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sui_types::base_types::SuiAddress;

use lever_types::math::{format_percent, format_usd, supply_apy, usd_value, utilization_ratio};

use crate::context::Context;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    #[serde(rename = "userAddress")]
    user_address: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BalanceResponse {
    /// Raw balance in MIST, as a decimal string.
    balance_sui: String,
    /// USD value at the latest oracle price, two decimals.
    balance_usd: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DebtResponse {
    debt_mist: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApyResponse {
    apy: String,
    utilization_ratio: String,
    total_liquidity: String,
    total_deposits: String,
}

fn require_address(query: &AddressQuery) -> Result<SuiAddress, ApiError> {
    let raw = query
        .user_address
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("userAddress query parameter is required.".to_string())
        })?;
    SuiAddress::from_str(raw)
        .map_err(|e| ApiError::BadRequest(format!("invalid userAddress {raw:?}: {e}")))
}

#[get("/")]
pub async fn index() -> impl Responder {
    "OK"
}

#[get("/api/total-supplied")]
pub async fn total_supplied(
    ctx: web::Data<Context>,
    query: web::Query<AddressQuery>,
) -> Result<HttpResponse, ApiError> {
    let holder = require_address(&query)?;
    let units = ctx.vault_balances.balance_in_mist(holder).await?;
    let price = ctx.oracle.latest_price(&ctx.config.price_feed_id).await?;
    Ok(HttpResponse::Ok().json(BalanceResponse {
        balance_sui: units.to_string(),
        balance_usd: format_usd(usd_value(units, price.price)),
    }))
}

#[get("/api/collateral-balance")]
pub async fn collateral_balance(
    ctx: web::Data<Context>,
    query: web::Query<AddressQuery>,
) -> Result<HttpResponse, ApiError> {
    let holder = require_address(&query)?;
    let units = ctx.reserve_balances.balance_in_mist(holder).await?;
    let price = ctx.oracle.latest_price(&ctx.config.price_feed_id).await?;
    Ok(HttpResponse::Ok().json(BalanceResponse {
        balance_sui: units.to_string(),
        balance_usd: format_usd(usd_value(units, price.price)),
    }))
}

#[get("/api/sui-price")]
pub async fn sui_price(ctx: web::Data<Context>) -> Result<HttpResponse, ApiError> {
    let info = ctx.oracle.latest_price(&ctx.config.price_feed_id).await?;
    Ok(HttpResponse::Ok().json(info))
}

#[get("/api/debt")]
pub async fn debt(
    ctx: web::Data<Context>,
    query: web::Query<AddressQuery>,
) -> Result<HttpResponse, ApiError> {
    let holder = require_address(&query)?;
    let debt = ctx.debt.debt_in_mist(holder).await?;
    Ok(HttpResponse::Ok().json(DebtResponse {
        debt_mist: debt.to_string(),
    }))
}

#[get("/api/apy")]
pub async fn apy(ctx: web::Data<Context>) -> Result<HttpResponse, ApiError> {
    let stats = ctx.vault_stats().await?;
    let utilization = utilization_ratio(stats.total_deposits, stats.total_liquidity);
    Ok(HttpResponse::Ok().json(ApyResponse {
        apy: format_percent(supply_apy(utilization)),
        utilization_ratio: format_percent(utilization),
        total_liquidity: stats.total_liquidity.to_string(),
        total_deposits: stats.total_deposits.to_string(),
    }))
}
