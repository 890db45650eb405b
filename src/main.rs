use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use portfolio_api::{
    db::{schema::init_schema, sqlite::create_pool},
    graceful_shutdown::stop_on_signal,
    settings::AppConfig,
    startup::run,
    AppState,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => {
            init_tracing(cfg.is_production());
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to open database")?;

    init_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    let app_state = web::Data::new(AppState::new(&config, pool));

    let server_addr = config.server_addr();
    let listener = TcpListener::bind(&server_addr)
        .with_context(|| format!("Failed to bind {}", server_addr))?;

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = run(listener, &config, app_state)?;
    tokio::spawn(stop_on_signal(server.handle()));

    server.await?;
    Ok(())
}
