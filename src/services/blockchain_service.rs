use std::time::Duration;

use reqwest::Client;

use crate::{
    errors::CustomError,
    models::{
        balance::{BalanceResponse, BlockTag},
        network_config::NetworkConfig,
        rpc::{RpcRequest, RpcResponse},
    },
    utils::units::to_display_balance,
};

#[derive(Clone, Debug)]
pub struct BlockchainClient {
    http: Client,
    config: NetworkConfig,
}

impl BlockchainClient {
    /// Create a client for the given network with a per-request timeout.
    pub fn new(config: NetworkConfig, timeout: Duration) -> Result<Self, CustomError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CustomError::ConfigError(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Raw `eth_getBalance` result: a hex quantity in wei.
    pub async fn get_raw_balance(
        &self,
        wallet_address: &str,
        block: BlockTag,
    ) -> Result<String, CustomError> {
        let request = RpcRequest::get_balance(wallet_address, block.as_str());

        let response = self
            .http
            .post(&self.config.rpc_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CustomError::UpstreamStatusError(status.as_u16()));
        }

        let body: RpcResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(CustomError::RpcError {
                code: error.code,
                message: error.message,
            });
        }

        body.result.ok_or(CustomError::MissingResultError)
    }

    /// Get native token balance for an address, formatted in whole units.
    pub async fn get_native_balance(
        &self,
        wallet_address: &str,
        block: BlockTag,
    ) -> Result<BalanceResponse, CustomError> {
        let raw = self.get_raw_balance(wallet_address, block).await?;
        let balance = to_display_balance(&raw, self.config.decimals)?;

        log::debug!(
            "balance of {} at {}: {} {}",
            wallet_address,
            block,
            balance,
            self.config.symbol
        );

        Ok(BalanceResponse {
            balance,
            unit: self.config.symbol.clone(),
            block,
            source: self.config.provider.clone(),
        })
    }
}
