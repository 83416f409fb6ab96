use serde::{Deserialize, Serialize};

pub const HIDDEN_GEM_TAG: &str = "hidden_gem";

/// Blog or Instagram post collected by the scraper, reviewed by admins.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScrapedContent {
    pub id: String,
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub geo_tags: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub destination_id: Option<String>,
}

impl ScrapedContent {
    pub fn is_instagram(&self) -> bool {
        self.source.to_lowercase().contains("instagram")
    }

    /// True when the post names the spot in its text or geo tags
    pub fn mentions(&self, spot_name: &str) -> bool {
        let needle = spot_name.to_lowercase();
        self.content.to_lowercase().contains(&needle)
            || self
                .geo_tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TagContentRequest {
    pub id: String,
    pub tag: String,
}
