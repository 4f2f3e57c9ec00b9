//! Pyth Hermes price client.
//!
//! Fetches the latest price update for a single feed over Hermes' REST API
//! and applies the feed exponent to the raw mantissa. The dashboard only
//! ever needs one feed (SUI/USD), so there is no subscription or streaming
//! here, just one GET per request.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HermesClient {
    base_url: Url,
    http: reqwest::Client,
}

/// Wire shape of `GET /v2/updates/price/latest`. Fields we don't consume
/// (`binary`, `ema_price`, `metadata`) are ignored.
#[derive(Debug, Deserialize)]
struct LatestPriceResponse {
    #[serde(default)]
    parsed: Vec<ParsedPriceUpdate>,
}

#[derive(Debug, Deserialize)]
struct ParsedPriceUpdate {
    id: String,
    price: RawPrice,
}

#[derive(Debug, Clone, Deserialize)]
struct RawPrice {
    price: String,
    conf: String,
    expo: i32,
    publish_time: i64,
}

/// A price update with the exponent already applied, plus the raw fields
/// the feed reported.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub price: f64,
    pub raw_price: String,
    pub conf: String,
    pub expo: i32,
    pub publish_time: i64,
}

impl HermesClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid Hermes endpoint: {base_url}"))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build Hermes HTTP client")?;
        Ok(Self { base_url, http })
    }

    /// Latest price for one feed. Takes the first parsed update; an empty
    /// `parsed` array is an error, not a default.
    pub async fn latest_price(&self, feed_id: &str) -> Result<PriceInfo> {
        let url = self
            .base_url
            .join("v2/updates/price/latest")
            .context("build Hermes request url")?;
        let response = self
            .http
            .get(url)
            .query(&[("ids[]", feed_id), ("parsed", "true")])
            .send()
            .await
            .context("request latest price update")?;
        if !response.status().is_success() {
            bail!("Hermes returned {}", response.status());
        }
        let body: LatestPriceResponse = response
            .json()
            .await
            .context("decode price update response")?;
        let update = first_parsed(body)?;
        debug!(feed = %update.id, "latest price update");
        price_info(update.price)
    }
}

fn first_parsed(body: LatestPriceResponse) -> Result<ParsedPriceUpdate> {
    body.parsed
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no parsed price updates in response"))
}

fn price_info(raw: RawPrice) -> Result<PriceInfo> {
    let mantissa: f64 = raw
        .price
        .parse()
        .with_context(|| format!("price mantissa is not numeric: {:?}", raw.price))?;
    Ok(PriceInfo {
        price: mantissa * 10f64.powi(raw.expo),
        raw_price: raw.price,
        conf: raw.conf,
        expo: raw.expo,
        publish_time: raw.publish_time,
    })
}
