//! Read-only travel advice around a destination: hidden gems, weather,
//! crowds, packing, costs and community reviews.

use actix_web::{web, HttpResponse};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    db::MemoryStore,
    error::AppError,
    models::{alert::Alert, itinerary::Budget, review::NewReview},
    services::{
        community_reviews,
        cost_calculator::{self, CostEstimate, PriceComparison},
        crowd_predictor::{self, CrowdPrediction},
        hidden_gems::{self, DEFAULT_GEM_LIMIT},
        packing_list::{self, PackingList},
        weather_service::{self, WeatherForecast},
    },
};

const DEFAULT_SEASON: &str = "Summer";
const DEFAULT_PACKING_SEASON: &str = "Spring";
const DEFAULT_WEATHER: &str = "sunny";
const DEFAULT_TRIP_DAYS: u32 = 3;
const MAX_COST_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
pub struct HiddenGemQuery {
    pub interests: Option<String>,
    pub limit: Option<usize>,
}

/*
    /api/destination/{id}/hidden-gems?interests=a,b&limit=5
*/
pub async fn get_hidden_gems(
    path: web::Path<String>,
    query: web::Query<HiddenGemQuery>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let destination = store
        .get_destination(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Destination '{}' not found", id)))?;

    let interests: Vec<String> = query
        .interests
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();
    let limit = query.limit.unwrap_or(DEFAULT_GEM_LIMIT);

    let spots = store.spots_for(&destination.id).await;
    let posts = store.scraped_for(&destination.id).await;

    Ok(HttpResponse::Ok().json(hidden_gems::find_hidden_gems(
        &spots, &posts, &interests, limit,
    )))
}

#[derive(Serialize)]
struct DailyWeather {
    #[serde(flatten)]
    forecast: &'static WeatherForecast,
    recommendations: Vec<&'static str>,
}

#[derive(Serialize)]
struct WeatherReport {
    destination: String,
    forecast: Vec<DailyWeather>,
    alerts: Vec<Alert>,
}

/*
    /api/weather/{destination}
*/
pub async fn weather(
    path: web::Path<String>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let key = path.into_inner();
    let destination = store
        .get_destination(&key)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Destination '{}' not found", key)))?;

    let forecast = weather_service::forecast_for(&destination.id)
        .iter()
        .map(|day| DailyWeather {
            forecast: day,
            recommendations: weather_service::recommendations(day),
        })
        .collect();
    let alerts = weather_service::weather_alerts(&store.alerts(Some(&destination.id)).await);

    Ok(HttpResponse::Ok().json(WeatherReport {
        destination: destination.name,
        forecast,
        alerts,
    }))
}

/*
    /api/weather/advice/{condition}
*/
pub async fn weather_advice(path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(weather_service::advice_for(&path.into_inner()))
}

#[derive(Serialize)]
struct SpotCrowd {
    spot_id: String,
    spot_name: String,
    #[serde(flatten)]
    prediction: CrowdPrediction,
}

/*
    /api/crowd/{destination}/{spot_id}
*/
pub async fn crowd(
    path: web::Path<(String, String)>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let (destination, spot_id) = path.into_inner();
    let spot = store
        .get_spot(&destination, &spot_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Spot '{}' not found in {}", spot_id, destination)))?;

    Ok(HttpResponse::Ok().json(SpotCrowd {
        prediction: crowd_predictor::predict_now(spot.crowd_score),
        spot_id: spot.id,
        spot_name: spot.name,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PackingQuery {
    pub season: Option<String>,
    pub weather: Option<String>,
    pub duration: Option<u32>,
}

#[derive(Serialize)]
struct PackingResponse {
    list: &'static PackingList,
    checklist: Vec<&'static str>,
}

/*
    /api/packing?season=&weather=&duration=
*/
pub async fn packing(query: web::Query<PackingQuery>) -> HttpResponse {
    let season = query.season.as_deref().unwrap_or(DEFAULT_PACKING_SEASON);
    let weather = query.weather.as_deref().unwrap_or(DEFAULT_WEATHER);
    let duration = query.duration.unwrap_or(DEFAULT_TRIP_DAYS);

    HttpResponse::Ok().json(PackingResponse {
        list: packing_list::packing_list(season, weather),
        checklist: packing_list::packing_checklist(duration),
    })
}

#[derive(Debug, Deserialize)]
pub struct CostQuery {
    pub destination: String,
    pub days: Option<u32>,
    pub budget: Option<Budget>,
    pub season: Option<String>,
}

#[derive(Serialize)]
struct CostResponse {
    destination: String,
    days: u32,
    budget: Budget,
    season: String,
    estimate: CostEstimate,
    comparison: PriceComparison,
    tips: &'static [&'static str],
    timing_tips: Vec<&'static str>,
}

/*
    /api/cost?destination=&days=&budget=&season=
*/
pub async fn cost(query: web::Query<CostQuery>) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let days = query.days.unwrap_or(DEFAULT_TRIP_DAYS);
    if !(1..=MAX_COST_DAYS).contains(&days) {
        return Err(AppError::Validation(format!(
            "days must be between 1 and {}, got {}",
            MAX_COST_DAYS, days
        )));
    }
    let budget = query.budget.unwrap_or(Budget::Medium);
    let season = query.season.unwrap_or_else(|| DEFAULT_SEASON.to_string());

    Ok(HttpResponse::Ok().json(CostResponse {
        estimate: cost_calculator::calculate_trip_cost(&query.destination, days, budget, &season),
        comparison: cost_calculator::price_comparison(&query.destination, days),
        tips: cost_calculator::savings_tips(budget),
        timing_tips: cost_calculator::savings_tips_by_date(&season, Local::now().weekday()),
        destination: query.destination,
        days,
        budget,
        season,
    }))
}

#[derive(Debug, Deserialize)]
pub struct BudgetBreakdownRequest {
    pub total_budget: f64,
    pub days: u32,
    pub budget: Budget,
}

/*
    /api/budget/breakdown
*/
pub async fn budget_breakdown(
    body: web::Json<BudgetBreakdownRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    if request.total_budget.is_nan() || request.total_budget <= 0.0 {
        return Err(AppError::Validation("total_budget must be positive".to_string()));
    }
    if request.days == 0 {
        return Err(AppError::Validation("days must be at least 1".to_string()));
    }

    Ok(HttpResponse::Ok().json(cost_calculator::budget_breakdown(
        request.total_budget,
        request.days,
        request.budget,
    )))
}

/*
    /api/reviews/{spot_name}
*/
pub async fn get_reviews(
    path: web::Path<String>,
    store: web::Data<Arc<MemoryStore>>,
) -> HttpResponse {
    let spot_name = path.into_inner();
    let reviews = store.reviews_for(&spot_name).await;
    HttpResponse::Ok().json(community_reviews::summarize(&reviews, &spot_name))
}

/*
    /api/reviews
*/
pub async fn add_review(
    body: web::Json<NewReview>,
    store: web::Data<Arc<MemoryStore>>,
) -> Result<HttpResponse, AppError> {
    let review = body.into_inner();
    review.validate().map_err(AppError::Validation)?;
    Ok(HttpResponse::Created().json(store.add_review(review).await))
}
