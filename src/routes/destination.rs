use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    db::MemoryStore,
    error::AppError,
    models::{alert::Alert, destination::Destination, spot::Spot},
    services::interest_catalog::INTERESTS,
};

const DETAIL_SPOT_LIMIT: usize = 10;
const DETAIL_ALERT_LIMIT: usize = 3;

#[derive(Serialize)]
struct DestinationDetail {
    destination: Destination,
    spots: Vec<Spot>,
    alerts: Vec<Alert>,
}

/*
    /api/destinations
*/
pub async fn get_all(store: web::Data<Arc<MemoryStore>>) -> HttpResponse {
    HttpResponse::Ok().json(store.list_destinations().await)
}

/*
    /api/destination/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let destination = store
        .get_destination(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Destination '{}' not found", id)))?;

    let mut spots = store.spots_for(&destination.id).await;
    spots.truncate(DETAIL_SPOT_LIMIT);
    let mut alerts = store.alerts(Some(&destination.id)).await;
    alerts.truncate(DETAIL_ALERT_LIMIT);

    Ok(HttpResponse::Ok().json(DestinationDetail {
        destination,
        spots,
        alerts,
    }))
}

/*
    /api/interests
*/
pub async fn get_interests() -> HttpResponse {
    HttpResponse::Ok().json(&INTERESTS[..])
}
