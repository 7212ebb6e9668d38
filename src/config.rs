use std::time::Duration;

use crate::errors::CustomError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;
const INFURA_MAINNET_URL: &str = "https://mainnet.infura.io/v3/";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rpc_url: String,
    /// Provider name reported as `source` in balance responses.
    pub provider: String,
    pub rpc_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup; `from_env` passes the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (rpc_url, provider) = match non_empty(lookup("RPC_URL")) {
            Some(url) => (url, "rpc".to_string()),
            None => {
                let api_key = non_empty(lookup("INFURA_API_KEY")).ok_or_else(|| {
                    CustomError::ConfigError("INFURA_API_KEY is required".to_string())
                })?;
                (format!("{}{}", INFURA_MAINNET_URL, api_key), "infura".to_string())
            }
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: non_empty(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default("PORT", lookup("PORT"), DEFAULT_PORT),
            rpc_url,
            provider,
            rpc_timeout: Duration::from_secs(parse_or_default(
                "RPC_TIMEOUT_SECS",
                lookup("RPC_TIMEOUT_SECS"),
                DEFAULT_RPC_TIMEOUT_SECS,
            )),
            allowed_origins,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or_default<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match non_empty(value) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("invalid {} {:?}, falling back to {}", key, raw, default);
            default
        }),
        None => default,
    }
}
