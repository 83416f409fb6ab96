use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::MemoryStore;

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub destination: Option<String>,
}

/*
    /api/alerts?destination=
*/
pub async fn get_alerts(
    query: web::Query<AlertQuery>,
    store: web::Data<Arc<MemoryStore>>,
) -> HttpResponse {
    let destination = query.destination.as_deref().filter(|d| !d.trim().is_empty());
    let mut alerts = store.alerts(destination).await;
    alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
    HttpResponse::Ok().json(alerts)
}
