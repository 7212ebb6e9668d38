use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::{models::api_response::ApiResponse, utils::units::ConversionError};

const UPSTREAM_ERROR_MESSAGE: &str = "upstream rpc error";

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("invalid ethereum address")]
    InvalidAddressError(String),

    #[error("invalid block (use latest|pending)")]
    InvalidBlockError(String),

    #[error("Invalid balance encoding: {0}")]
    ConversionError(#[from] ConversionError),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {0}")]
    UpstreamStatusError(u16),

    #[error("RPC error {code}: {message}")]
    RpcError { code: i64, message: String },

    #[error("RPC response carried no result")]
    MissingResultError,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CustomError {
    /// Whether the failure came from the upstream provider rather than the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CustomError::ConversionError(_)
                | CustomError::NetworkError(_)
                | CustomError::UpstreamStatusError(_)
                | CustomError::RpcError { .. }
                | CustomError::MissingResultError
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::InvalidAddressError(_) => StatusCode::BAD_REQUEST,
            CustomError::InvalidBlockError(_) => StatusCode::BAD_REQUEST,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Upstream details stay in the logs.
        let message = if self.is_upstream() {
            log::error!("balance lookup failed: {}", self);
            UPSTREAM_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let api_error = ApiError {
            code: status.as_u16(),
            message,
        };

        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        };

        HttpResponse::build(status).json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_client_errors_to_bad_request() {
        let err = CustomError::InvalidAddressError("0x12".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid ethereum address");

        let err = CustomError::InvalidBlockError("earliest".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid block (use latest|pending)");
    }

    #[test]
    fn maps_upstream_failures_to_bad_gateway() {
        let errors = [
            CustomError::ConversionError(ConversionError::InvalidEncoding("zz".to_string())),
            CustomError::UpstreamStatusError(503),
            CustomError::RpcError {
                code: -32000,
                message: "header not found".to_string(),
            },
            CustomError::MissingResultError,
        ];

        for err in errors {
            assert!(err.is_upstream());
            assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn config_errors_are_not_upstream() {
        let err = CustomError::ConfigError("INFURA_API_KEY is required".to_string());
        assert!(!err.is_upstream());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
