use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::{db::MemoryStore, error::AppError, models::scraped_content::TagContentRequest};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/scraped", web::get().to(get_scraped))
            .route("/tag", web::post().to(tag_content))
            .route("/spots/{id}/hidden-gem", web::put().to(set_hidden_gem))
            .route("/refresh", web::post().to(refresh)),
    );
}

#[derive(Debug, Deserialize)]
pub struct HiddenGemUpdate {
    pub is_hidden_gem: bool,
}

/*
    /api/admin/scraped
*/
pub async fn get_scraped(store: web::Data<Arc<MemoryStore>>) -> HttpResponse {
    HttpResponse::Ok().json(store.scraped_content().await)
}

/*
    /api/admin/tag
*/
pub async fn tag_content(
    body: web::Json<TagContentRequest>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    if request.tag.trim().is_empty() {
        return Err(AppError::Validation("tag is required".to_string()));
    }

    let outcome = store.tag_scraped_content(&request.id, &request.tag).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/*
    /api/admin/spots/{id}/hidden-gem
*/
pub async fn set_hidden_gem(
    path: web::Path<String>,
    body: web::Json<HiddenGemUpdate>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let spot = store
        .set_hidden_gem(&path.into_inner(), body.is_hidden_gem)
        .await?;
    Ok(HttpResponse::Ok().json(spot))
}

/*
    /api/admin/refresh
*/
pub async fn refresh(store: web::Data<Arc<MemoryStore>>) -> Result<HttpResponse, AppError> {
    let stats = store.refresh().await?;
    Ok(HttpResponse::Ok().json(stats))
}
