use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    db::MemoryStore,
    error::AppError,
    models::chat::ChatRequest,
    services::chat_service::ChatService,
};

/*
    /api/chat
*/
pub async fn chat(
    body: web::Json<ChatRequest>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    // An itinerary id stands in for the destination it was planned for
    let destination_key = match (request.destination, request.itinerary_id) {
        (Some(destination), _) => destination,
        (None, Some(itinerary_id)) => {
            let id = Uuid::parse_str(itinerary_id.trim())
                .map_err(|_| AppError::Validation("Invalid itinerary id".to_string()))?;
            store
                .get_itinerary(&id)
                .await
                .map(|itinerary| itinerary.destination)
                .ok_or_else(|| AppError::NotFound("Itinerary not found".to_string()))?
        }
        (None, None) => {
            return Err(AppError::Validation(
                "destination or itinerary_id is required".to_string(),
            ))
        }
    };

    let destination = store
        .get_destination(&destination_key)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Destination '{}' not found", destination_key)))?;

    let spots = store.spots_for(&destination.id).await;
    let alerts = store.alerts(Some(&destination.id)).await;
    let posts = store.scraped_for(&destination.id).await;

    let reply = ChatService::new(&destination.name, &spots, &alerts, &posts).respond(&request.message);
    Ok(HttpResponse::Ok().json(reply))
}
