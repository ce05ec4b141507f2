use std::{error::Error, net::TcpListener};

use calorie_api::{logging, Config};
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    logging::init(&config.log_config)?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    info!("Listening on {}", listener.local_addr()?);

    calorie_api::listen(listener, config.allowed_origin)?.await?;
    Ok(())
}
