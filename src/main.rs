use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use kindred_match::config::Settings;
use kindred_match::core::{CompatibilityEngine, ExplainabilityEngine};
use kindred_match::routes::{self, AppState};
use kindred_match::services::ScoreCache;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Kindred Match compatibility service...");

    let engine = CompatibilityEngine::new();
    info!("Compatibility engine initialized with weights: {:?}", engine.weights());

    let cache = if settings.cache.enabled {
        info!(
            "Score cache enabled (L1: {} entries, TTL: {}s)",
            settings.cache.l1_cache_size, settings.cache.ttl_secs
        );
        ScoreCache::new(settings.cache.l1_cache_size, settings.cache.ttl_secs)
    } else {
        info!("Score cache disabled");
        ScoreCache::disabled()
    };

    if settings.matching.max_limit == 0 {
        error!("matching.max_limit is 0; every top matches request will be rejected");
    }

    let app_state = AppState {
        engine,
        explainer: ExplainabilityEngine::new(),
        cache,
        matching: settings.matching.clone(),
    };

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
