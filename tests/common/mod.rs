#![allow(dead_code)]

use actix_web::{web, App};
use std::path::PathBuf;
use std::sync::Arc;

use yatra_api::configure_routes;
use yatra_api::db::{MemoryStore, SeedData};
use yatra_api::models::destination::Destination;
use yatra_api::models::itinerary::{Budget, ItineraryRequest, TravelerType};
use yatra_api::models::spot::Spot;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Shimla pool from the bundled seed data
pub fn shimla_pool() -> Vec<Spot> {
    let raw = std::fs::read_to_string(data_dir().join("spots").join("shimla.json"))
        .expect("shimla seed data");
    serde_json::from_str(&raw).expect("valid shimla spots")
}

pub fn spot(id: &str, lat: f64, lng: f64, tags: &[&str], crowd: u8, gem: bool) -> Spot {
    Spot {
        id: id.to_string(),
        name: format!("Spot {}", id),
        description: format!("Test spot {}", id),
        lat,
        lng,
        best_time: None,
        entry_fee: Some("₹100".to_string()),
        opening_hours: None,
        crowd_score: crowd,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        instagram_captions: Vec::new(),
        image_url: None,
        is_hidden_gem: gem,
    }
}

pub fn request(days: u32, traveler: TravelerType, interests: &[&str]) -> ItineraryRequest {
    ItineraryRequest {
        destination: "shimla".to_string(),
        days,
        budget: Budget::Medium,
        traveler_type: traveler,
        interests: interests.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn destination(id: &str, name: &str) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        region: "Test Region".to_string(),
        description: String::new(),
        best_time: None,
        primary_category: None,
        interests: Vec::new(),
    }
}

pub struct TestApp {
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// App over the bundled seed data
    pub fn new() -> Self {
        let store = MemoryStore::load(data_dir()).expect("seed data loads");
        Self {
            store: Arc::new(store),
        }
    }

    pub fn with_seed(seed: SeedData) -> Self {
        Self {
            store: Arc::new(MemoryStore::new(seed)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.store.clone()))
            .configure(configure_routes)
    }
}
