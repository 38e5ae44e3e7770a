use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wedding_exporter::api::{configure_routes, ApiState};
use wedding_exporter::AppConfig;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Wedding Exporter API");

    // Load configuration
    let config = AppConfig::from_env()?;
    let host = config.host.clone();
    let port = config.port;

    // Initialize application state
    let state = web::Data::new(ApiState::new(config).await?);

    tracing::info!("Starting server on {}:{}", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
