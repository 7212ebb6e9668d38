use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: [&'a str; 2],
}

impl<'a> RpcRequest<'a> {
    pub fn get_balance(address: &'a str, block: &'a str) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: 1,
            method: "eth_getBalance",
            params: [address, block],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<String>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}
