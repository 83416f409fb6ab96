pub mod admin;
pub mod advisory;
pub mod alerts;
pub mod chat;
pub mod destination;
pub mod health;
pub mod itinerary;

use actix_web::{error::JsonPayloadError, error::QueryPayloadError, web, HttpRequest};

use crate::error::AppError;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(format!("Invalid request body: {}", err)).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(format!("Invalid query string: {}", err)).into()
}

/// Every route the API serves. Expects a `web::Data<Arc<MemoryStore>>` on the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/destinations", web::get().to(destination::get_all))
                .route("/destination/{id}", web::get().to(destination::get_by_id))
                .route(
                    "/destination/{id}/hidden-gems",
                    web::get().to(advisory::get_hidden_gems),
                )
                .route("/interests", web::get().to(destination::get_interests))
                .route("/itinerary", web::post().to(itinerary::generate))
                .route("/itinerary/{id}", web::get().to(itinerary::get_by_id))
                .route("/alerts", web::get().to(alerts::get_alerts))
                .route("/chat", web::post().to(chat::chat))
                .route(
                    "/weather/advice/{condition}",
                    web::get().to(advisory::weather_advice),
                )
                .route("/weather/{destination}", web::get().to(advisory::weather))
                .route(
                    "/crowd/{destination}/{spot_id}",
                    web::get().to(advisory::crowd),
                )
                .route("/packing", web::get().to(advisory::packing))
                .route("/cost", web::get().to(advisory::cost))
                .route("/budget/breakdown", web::post().to(advisory::budget_breakdown))
                .route("/reviews/{spot_name}", web::get().to(advisory::get_reviews))
                .route("/reviews", web::post().to(advisory::add_review))
                .configure(admin::config),
        );
}
