use std::{fmt, str::FromStr};

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::errors::CustomError;

/// Block at which the balance is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    #[default]
    Latest,
    Pending,
}

impl BlockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockTag {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(BlockTag::Latest),
            "pending" => Ok(BlockTag::Pending),
            other => Err(CustomError::InvalidBlockError(other.to_string())),
        }
    }
}

#[derive(Debug, Default)]
pub struct BalanceQuery {
    pub block: Option<String>,
}

impl BalanceQuery {
    /// Reads `block` from a raw query string. Repeated keys keep the first value.
    pub fn from_query_string(query: &str) -> Result<Self, CustomError> {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map_err(|_| CustomError::InvalidBlockError(query.to_string()))?
            .into_inner();

        let block = pairs
            .into_iter()
            .find(|(key, _)| key == "block")
            .map(|(_, value)| value);

        Ok(Self { block })
    }

    pub fn block_tag(&self) -> Result<BlockTag, CustomError> {
        match &self.block {
            Some(block) => block.parse(),
            None => Ok(BlockTag::default()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    pub balance: String,
    pub unit: String,
    pub block: BlockTag,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}
