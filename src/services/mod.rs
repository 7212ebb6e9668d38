pub mod blockchain_service;
pub mod network_config;
