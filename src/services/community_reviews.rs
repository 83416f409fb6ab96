use crate::models::review::{CrowdTrend, CrowdUpdate, NewReview, Review};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

const NEUTRAL_CROWD_LEVEL: u8 = 5;

static CROWD_FEED: [(&str, u8, CrowdTrend, &str); 3] = [
    ("Jakhu Temple", 6, CrowdTrend::Increasing, "Will peak around 2-3 PM"),
    ("Mall Road", 7, CrowdTrend::Stable, "Expect crowds until evening"),
    ("Solang Valley", 8, CrowdTrend::Increasing, "Peak crowd expected by noon"),
];

#[derive(Debug, Serialize)]
pub struct SpotReviewSummary {
    pub spot_name: String,
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub average_crowd_level: u8,
    pub crowd_update: Option<CrowdUpdate>,
}

fn matches_spot(review: &Review, spot_name: &str) -> bool {
    review
        .spot_name
        .to_lowercase()
        .contains(&spot_name.trim().to_lowercase())
}

pub fn reviews_for_spot(reviews: &[Review], spot_name: &str) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| matches_spot(r, spot_name))
        .cloned()
        .collect()
}

/// Mean rating to one decimal place, 0 without reviews
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    (sum as f64 / reviews.len() as f64 * 10.0).round() / 10.0
}

/// Rounded mean crowd level, neutral without reviews
pub fn average_crowd_level(reviews: &[Review]) -> u8 {
    if reviews.is_empty() {
        return NEUTRAL_CROWD_LEVEL;
    }
    let sum: u32 = reviews.iter().map(|r| r.crowd_level as u32).sum();
    (sum as f64 / reviews.len() as f64).round() as u8
}

pub fn crowd_update(spot_name: &str) -> Option<CrowdUpdate> {
    let needle = spot_name.trim().to_lowercase();
    CROWD_FEED
        .iter()
        .find(|(name, ..)| name.to_lowercase().contains(&needle))
        .map(|(name, crowd, trend, prediction)| CrowdUpdate {
            spot_name: name.to_string(),
            current_crowd: *crowd,
            timestamp: Utc::now().to_rfc3339(),
            trend: *trend,
            prediction: prediction.to_string(),
        })
}

pub fn summarize(reviews: &[Review], spot_name: &str) -> SpotReviewSummary {
    let matching = reviews_for_spot(reviews, spot_name);
    SpotReviewSummary {
        spot_name: spot_name.to_string(),
        average_rating: average_rating(&matching),
        average_crowd_level: average_crowd_level(&matching),
        crowd_update: crowd_update(spot_name),
        reviews: matching,
    }
}

/// Stamp a submitted review with an id and date
pub fn new_review(review: NewReview) -> Review {
    Review {
        id: format!("rev-{}", Uuid::new_v4()),
        user_id: review.user_id,
        spot_name: review.spot_name,
        rating: review.rating,
        crowd_level: review.crowd_level,
        text: review.text,
        date: Utc::now().to_rfc3339(),
        helpful: 0,
        visited_date: review.visited_date,
        photos: review.photos,
    }
}
