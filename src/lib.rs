//! HTTP API for the leveraged lending dashboard.
//!
//! Thin JSON endpoints over the chain-interaction layer: balances and
//! collateral via dev-inspect, debt via the vault's dynamic fields, the
//! SUI/USD price via Pyth Hermes, and pool utilization/APY from the vault
//! object. Every failure is scoped to the request that triggered it.

pub mod context;
pub mod error;
pub mod routes;
pub mod server;
