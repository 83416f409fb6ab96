use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::spot::Coordinates;

pub const MIN_TRIP_DAYS: u32 = 1;
pub const MAX_TRIP_DAYS: u32 = 7;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TravelerType {
    Solo,
    Couple,
    Family,
    Group,
}

impl TravelerType {
    /// Planning density: how many spots a day of this trip aims for
    pub fn spots_per_day(&self) -> usize {
        match self {
            TravelerType::Family => 3,
            TravelerType::Couple => 4,
            TravelerType::Solo | TravelerType::Group => 5,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: u32,
    pub budget: Budget,
    pub traveler_type: TravelerType,
    pub interests: Vec<String>,
}

impl ItineraryRequest {
    /// Shape checks done at the boundary before the engine runs
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&self.days) {
            return Err(format!(
                "days must be between {} and {}, got {}",
                MIN_TRIP_DAYS, MAX_TRIP_DAYS, self.days
            ));
        }

        if self.normalized_interests().is_empty() {
            return Err("at least one interest is required".to_string());
        }

        if self.destination.trim().is_empty() {
            return Err("destination is required".to_string());
        }

        Ok(())
    }

    /// Lowercased, trimmed interests with blanks and repeats removed
    pub fn normalized_interests(&self) -> Vec<String> {
        let mut interests: Vec<String> = Vec::with_capacity(self.interests.len());
        for interest in &self.interests {
            let normalized = interest.trim().to_lowercase();
            if !normalized.is_empty() && !interests.contains(&normalized) {
                interests.push(normalized);
            }
        }
        interests
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Taxi,
    Bus,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// One scheduled visit within a day.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItinerarySpot {
    pub spot_id: String,
    pub name: String,
    pub description: String,
    /// Scheduled start, `HH:MM`
    pub time: String,
    pub time_of_day: TimeOfDay,
    pub duration: String,
    pub duration_minutes: u32,
    pub cost: String,
    pub travel_mode: TravelMode,
    pub travel_time: String,
    pub travel_minutes: u32,
    pub travel_distance: String,
    pub reason: String,
    pub is_hidden_gem: bool,
    pub coordinates: Coordinates,
    pub opening_hours: Option<String>,
    pub crowd_score: u8,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DayPlan {
    pub day: u32,
    pub date: String,
    pub theme: String,
    pub spots: Vec<ItinerarySpot>,
    pub total_cost: String,
    pub total_time: String,
}

pub type ItineraryPlan = Vec<DayPlan>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ItinerarySummary {
    pub total_cost: String,
    pub total_time: String,
}

/// Generated plan as persisted and returned by the API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoredItinerary {
    pub id: Uuid,
    pub destination: String,
    pub days: u32,
    pub budget: Budget,
    pub traveler_type: TravelerType,
    pub interests: Vec<String>,
    pub plan: ItineraryPlan,
    pub total_cost: String,
    pub total_time: String,
    pub created_at: DateTime<Utc>,
}

impl StoredItinerary {
    pub fn new(
        destination: String,
        request: &ItineraryRequest,
        plan: ItineraryPlan,
        summary: ItinerarySummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            destination,
            days: request.days,
            budget: request.budget,
            traveler_type: request.traveler_type,
            interests: request.interests.clone(),
            plan,
            total_cost: summary.total_cost,
            total_time: summary.total_time,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(days: u32, interests: &[&str]) -> ItineraryRequest {
        ItineraryRequest {
            destination: "shimla".to_string(),
            days,
            budget: Budget::Medium,
            traveler_type: TravelerType::Couple,
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_spots_per_day_by_traveler() {
        assert_eq!(TravelerType::Family.spots_per_day(), 3);
        assert_eq!(TravelerType::Couple.spots_per_day(), 4);
        assert_eq!(TravelerType::Solo.spots_per_day(), 5);
        assert_eq!(TravelerType::Group.spots_per_day(), 5);
    }

    #[test]
    fn test_validate_day_bounds() {
        assert!(request(1, &["food"]).validate().is_ok());
        assert!(request(7, &["food"]).validate().is_ok());
        assert!(request(0, &["food"]).validate().is_err());
        assert!(request(8, &["food"]).validate().is_err());
    }

    #[test]
    fn test_validate_requires_interest() {
        assert!(request(3, &[]).validate().is_err());
        assert!(request(3, &["  "]).validate().is_err());
    }

    #[test]
    fn test_normalized_interests_dedupes() {
        let req = request(2, &["Nature", " nature ", "FOOD"]);
        assert_eq!(req.normalized_interests(), vec!["nature", "food"]);
    }

    #[test]
    fn test_enums_use_lowercase_wire_names() {
        let req: ItineraryRequest = serde_json::from_str(
            r#"{"destination":"shimla","days":2,"budget":"high","traveler_type":"family","interests":["food"]}"#,
        )
        .unwrap();
        assert_eq!(req.budget, Budget::High);
        assert_eq!(req.traveler_type, TravelerType::Family);
        assert_eq!(serde_json::to_string(&TravelMode::Walk).unwrap(), "\"walk\"");
    }
}
