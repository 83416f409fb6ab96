use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub primary_category: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Destination {
    /// Lookup key shared by ids and display names: "Spiti Valley" -> "spiti-valley"
    pub fn normalize_key(value: &str) -> String {
        value.trim().replace(['_', ' '], "-").to_lowercase()
    }
}
