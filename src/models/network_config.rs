#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub symbol: String,
    pub decimals: u32,
    pub provider: String,
}
