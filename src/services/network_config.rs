use crate::{config::Config, models::network_config::NetworkConfig, utils::units::ETHER_DECIMALS};

/// Ethereum mainnet, served by whichever provider the config points at.
pub fn get_network_config(config: &Config) -> NetworkConfig {
    NetworkConfig {
        chain_id: 1,
        name: "Ethereum Mainnet".to_string(),
        rpc_url: config.rpc_url.clone(),
        symbol: "ETH".to_string(),
        decimals: ETHER_DECIMALS,
        provider: config.provider.clone(),
    }
}
