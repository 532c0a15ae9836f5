use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use nearby_cases::config::{LoggingSettings, Settings, SourceKind};
use nearby_cases::core::ProximityFilter;
use nearby_cases::routes::{self, AppState};
use nearby_cases::services::{BackendClient, CaseRegistry, CaseSource};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` wins over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn build_source(settings: &Settings) -> io::Result<CaseSource> {
    let source = &settings.source;

    match source.kind {
        SourceKind::Local => {
            let registry = CaseRegistry::from_path(&source.seed_path).map_err(|e| {
                error!("Failed to load seed data from {}: {}", source.seed_path, e);
                io::Error::other(e)
            })?;
            Ok(CaseSource::Local(registry))
        }
        SourceKind::Remote => {
            let backend_url = source.backend_url.clone().ok_or_else(|| {
                error!("source.backend_url is required for a remote source");
                io::Error::new(io::ErrorKind::InvalidInput, "missing source.backend_url")
            })?;

            let client = BackendClient::new(
                backend_url,
                source.access_token.clone(),
                Duration::from_secs(source.timeout_secs.unwrap_or(30)),
            )
            .map_err(io::Error::other)?;

            let ttl = source.cache_ttl_secs.unwrap_or(30);
            info!("Remote case source initialized (cache TTL: {}s)", ttl);

            Ok(CaseSource::remote(client, Duration::from_secs(ttl)))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting Nearby Cases service...");

    let source = Arc::new(build_source(&settings)?);

    let filter = ProximityFilter::new(
        settings.proximity.default_radius_km,
        settings.proximity.max_radius_km,
    )
    .map_err(|e| {
        error!("Invalid proximity settings: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    info!(
        "Proximity filter initialized (default: {} km, max: {} km)",
        filter.default_radius_km(),
        filter.max_radius_km()
    );

    // Build application state
    let app_state = AppState { source, filter };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
