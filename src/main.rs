use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use yatra_api::{config::AppConfig, configure_routes, db::MemoryStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting in {} mode, data directory {}",
        config.environment,
        config.data_dir.display()
    );

    let store = MemoryStore::load(&config.data_dir)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        .with_itinerary_limit(config.max_itineraries);
    let stats = store.stats().await;
    info!(
        "Loaded {} destinations, {} spots, {} alerts, {} scraped posts",
        stats.destinations, stats.spots, stats.alerts, stats.scraped
    );
    let store = Arc::new(store);

    info!("Binding to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(store.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
