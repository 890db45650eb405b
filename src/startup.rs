use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, http::header, middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{routes::configure_routes, settings::AppConfig, AppState};

/// Builds the CORS policy from the configured origins; `*` allows any origin.
pub fn cors_policy(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

/// Binds the HTTP server to an already opened listener.
pub fn run(
    listener: TcpListener,
    config: &AppConfig,
    state: web::Data<AppState>,
) -> std::io::Result<Server> {
    let origins = config.cors_origins();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(NormalizePath::trim())
            .wrap(cors_policy(&origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .listen(listener)?
    .workers(config.worker_count.max(1))
    .run();

    Ok(server)
}
