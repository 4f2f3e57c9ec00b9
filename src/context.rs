//! Shared per-process state handed to every request handler.

use anyhow::{Context as _, Result};
use sui_sdk::{SuiClient, SuiClientBuilder};

use lever_chain::stats::{fetch_vault_stats, VaultStats};
use lever_chain::tx::MoveTarget;
use lever_chain::{BalanceReader, DebtReader};
use lever_oracle::HermesClient;
use lever_types::config::{
    Config, BALANCE_OF_FUNCTION, COLLATERAL_BALANCE_OF_FUNCTION, RESERVE_MODULE, VAULT_MODULE,
};

#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub client: SuiClient,
    pub vault_balances: BalanceReader,
    pub reserve_balances: BalanceReader,
    pub debt: DebtReader,
    pub oracle: HermesClient,
}

impl Context {
    pub async fn new(config: Config) -> Result<Self> {
        let client = SuiClientBuilder::default()
            .build(&config.rpc_url)
            .await
            .with_context(|| format!("connect rpc: {}", config.rpc_url))?;
        let oracle = HermesClient::new(&config.hermes_url)?;
        let vault_balances = BalanceReader::new(
            client.clone(),
            MoveTarget::new(config.package_id, VAULT_MODULE, BALANCE_OF_FUNCTION),
            config.vault_id,
        );
        let reserve_balances = BalanceReader::new(
            client.clone(),
            MoveTarget::new(
                config.collateral_package_id,
                RESERVE_MODULE,
                COLLATERAL_BALANCE_OF_FUNCTION,
            ),
            config.reserve_id,
        );
        let debt = DebtReader::new(client.clone(), config.vault_id);
        Ok(Self {
            config,
            client,
            vault_balances,
            reserve_balances,
            debt,
            oracle,
        })
    }

    pub async fn vault_stats(&self) -> Result<VaultStats> {
        fetch_vault_stats(&self.client, self.config.vault_id).await
    }
}
