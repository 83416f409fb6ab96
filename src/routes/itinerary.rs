use actix_web::{web, HttpResponse};
use chrono::Local;
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    db::MemoryStore,
    error::AppError,
    models::itinerary::{ItineraryRequest, StoredItinerary},
    services::{itinerary_generation_service::ItineraryGenerator, pricing_service::PricingService},
};

/*
    /api/itinerary
*/
pub async fn generate(
    body: web::Json<ItineraryRequest>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::Validation)?;

    let destination = store
        .get_destination(&request.destination)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Destination '{}' not found", request.destination)))?;
    let pool = store.spots_for(&destination.id).await;

    let plan = ItineraryGenerator::new().generate_itinerary(
        &request,
        &pool,
        Local::now().date_naive(),
        &mut rand::thread_rng(),
    );
    if plan.is_empty() {
        return Err(AppError::Unprocessable(format!(
            "No spots available for {}",
            destination.name
        )));
    }

    let summary = PricingService::calculate_summary(&plan);
    let itinerary = StoredItinerary::new(destination.name, &request, plan, summary);
    let id = store.save_itinerary(itinerary.clone()).await;
    info!("Stored itinerary {}", id);

    Ok(HttpResponse::Ok().json(itinerary))
}

/*
    /api/itinerary/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let id = Uuid::parse_str(path.into_inner().trim())
        .map_err(|_| AppError::Validation("Invalid itinerary id".to_string()))?;

    match store.get_itinerary(&id).await {
        Some(itinerary) => Ok(HttpResponse::Ok().json(itinerary)),
        None => Err(AppError::NotFound("Itinerary not found".to_string())),
    }
}
