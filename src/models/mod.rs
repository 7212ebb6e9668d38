pub mod api_response;
pub mod balance;
pub mod network_config;
pub mod rpc;
