use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    errors::CustomError,
    models::{
        api_response::success_response,
        balance::{BalanceQuery, HealthStatus},
    },
    services::blockchain_service::BlockchainClient,
    utils::address::is_valid_address,
};

#[get("/health")]
async fn health() -> HttpResponse {
    success_response(HealthStatus { status: "ok" })
}

#[get("/address/balance/{address}")]
async fn get_balance(
    req: HttpRequest,
    client: web::Data<BlockchainClient>,
    address: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let address = address.into_inner();
    if !is_valid_address(&address) {
        return Err(CustomError::InvalidAddressError(address));
    }

    // Parsed here so query errors come after the address check and stay in the envelope.
    let block = BalanceQuery::from_query_string(req.query_string())?.block_tag()?;
    let balance = client.get_native_balance(&address, block).await?;

    Ok(success_response(balance))
}
