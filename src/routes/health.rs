use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::db::{MemoryStore, StoreStats};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    data: StoreStats,
}

pub async fn health_check(store: web::Data<Arc<MemoryStore>>) -> impl Responder {
    let data = store.stats().await;

    // Nothing to plan from
    let status = if data.destinations == 0 {
        "degraded"
    } else {
        "ok"
    };

    HttpResponse::Ok().json(HealthStatus {
        status: status.to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
    })
}
