pub mod config;
pub mod error;
pub mod logging;
pub mod openapi;
pub mod routes;

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, http::header, middleware::Logger, App, HttpServer};

pub use config::Config;
pub use routes::configure;

/// CORS policy for browser clients. Without an explicit origin every origin
/// is allowed.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600),
        None => Cors::permissive(),
    }
}

pub fn listen(listener: TcpListener, allowed_origin: Option<String>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(allowed_origin.as_deref()))
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
