use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_CROWD_SCORE: u8 = 1;
pub const MAX_CROWD_SCORE: u8 = 10;
const DEFAULT_CROWD_SCORE: u8 = 5;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A visitable point of interest inside a destination's pool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Spot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub entry_fee: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(
        deserialize_with = "deserialize_crowd_score",
        default = "default_crowd_score"
    )]
    pub crowd_score: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instagram_captions: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "deserialize_flag", default)]
    pub is_hidden_gem: bool,
}

impl Spot {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

fn default_crowd_score() -> u8 {
    DEFAULT_CROWD_SCORE
}

// Seed data carries crowd scores as loose numbers; clamp them into 1..=10
fn deserialize_crowd_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(DEFAULT_CROWD_SCORE as f64),
        _ => DEFAULT_CROWD_SCORE as f64,
    };
    Ok(raw.round().clamp(MIN_CROWD_SCORE as f64, MAX_CROWD_SCORE as f64) as u8)
}

// Accepts `true`/`false` as well as the 0/1 integers older exports use
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Bool(b)) => Ok(b),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64().map(|f| f != 0.0).unwrap_or(false)),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crowd_score_is_clamped() {
        let spot: Spot = serde_json::from_str(
            r#"{"id":"a","name":"A","description":"d","lat":31.1,"lng":77.1,"crowd_score":14}"#,
        )
        .unwrap();
        assert_eq!(spot.crowd_score, 10);

        let spot: Spot = serde_json::from_str(
            r#"{"id":"a","name":"A","description":"d","lat":31.1,"lng":77.1,"crowd_score":0}"#,
        )
        .unwrap();
        assert_eq!(spot.crowd_score, 1);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let spot: Spot =
            serde_json::from_str(r#"{"id":"a","name":"A","description":"d","lat":1.0,"lng":2.0}"#)
                .unwrap();
        assert_eq!(spot.crowd_score, 5);
        assert!(spot.tags.is_empty());
        assert!(!spot.is_hidden_gem);
    }

    #[test]
    fn test_hidden_gem_accepts_integer_flag() {
        let spot: Spot = serde_json::from_str(
            r#"{"id":"a","name":"A","description":"d","lat":1.0,"lng":2.0,"is_hidden_gem":1}"#,
        )
        .unwrap();
        assert!(spot.is_hidden_gem);
    }
}
