use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub spot_name: String,
    pub rating: u8,
    pub crowd_level: u8,
    pub text: String,
    pub date: String,
    #[serde(default)]
    pub helpful: u32,
    #[serde(default)]
    pub visited_date: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub spot_name: String,
    pub rating: u8,
    pub crowd_level: u8,
    pub text: String,
    #[serde(default)]
    pub visited_date: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err(format!("rating must be between 1 and 5, got {}", self.rating));
        }
        if !(1..=10).contains(&self.crowd_level) {
            return Err(format!(
                "crowd_level must be between 1 and 10, got {}",
                self.crowd_level
            ));
        }
        if self.spot_name.trim().is_empty() {
            return Err("spot_name is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrowdTrend {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrowdUpdate {
    pub spot_name: String,
    pub current_crowd: u8,
    pub timestamp: String,
    pub trend: CrowdTrend,
    pub prediction: String,
}
