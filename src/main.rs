use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::{io, time::Duration};

use eth_balance_service::{
    api,
    config::Config,
    services::{blockchain_service::BlockchainClient, network_config::get_network_config},
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let network = get_network_config(&config);
    log::info!(
        "using {} (chain {}) via {}",
        network.name,
        network.chain_id,
        network.provider
    );

    let client = BlockchainClient::new(network, config.rpc_timeout)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let client = web::Data::new(client);
    let allowed_origins = config.allowed_origins.clone();

    log::info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);
        App::new()
            .app_data(client.clone())
            .configure(api::config)
            .wrap(cors)
            .wrap(Logger::default())
    })
    .client_request_timeout(Duration::from_secs(5))
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
