//! In-memory travel data store.
//!
//! Seed data is read from a directory of JSON files:
//!
//! ```text
//! destinations.json
//! spots/<destination_id>.json
//! alerts.json
//! scraped/blog_posts.json
//! scraped/insta_posts.json
//! reviews.json
//! ```
//!
//! Only `destinations.json` is required. Everything lives behind one
//! `RwLock` and readers get clones. Generated itineraries are kept up to a
//! fixed count; saving past it evicts the oldest.

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::StoreError;
use crate::models::{
    alert::Alert,
    destination::Destination,
    itinerary::StoredItinerary,
    review::{NewReview, Review},
    scraped_content::{ScrapedContent, HIDDEN_GEM_TAG},
    spot::Spot,
};
use crate::services::community_reviews;

/// Everything loaded from disk at startup or on refresh.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub destinations: Vec<Destination>,
    pub spots: HashMap<String, Vec<Spot>>,
    pub alerts: Vec<Alert>,
    pub scraped: Vec<ScrapedContent>,
    pub reviews: Vec<Review>,
}

impl SeedData {
    pub fn read_dir(dir: &Path) -> Result<Self, StoreError> {
        let destinations: Vec<Destination> = read_json(&dir.join("destinations.json"))?;

        let mut spots = HashMap::new();
        for destination in &destinations {
            let pool: Vec<Spot> =
                read_optional(&dir.join("spots").join(format!("{}.json", destination.id)))?;
            spots.insert(destination.id.clone(), pool);
        }

        let alerts: Vec<Alert> = read_optional(&dir.join("alerts.json"))?;

        let mut scraped: Vec<ScrapedContent> =
            read_optional(&dir.join("scraped").join("blog_posts.json"))?;
        let insta: Vec<ScrapedContent> =
            read_optional(&dir.join("scraped").join("insta_posts.json"))?;
        scraped.extend(insta);

        let reviews: Vec<Review> = read_optional(&dir.join("reviews.json"))?;

        Ok(Self {
            destinations,
            spots,
            alerts,
            scraped,
            reviews,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        warn!("Data file {} missing, starting empty", path.display());
        return Ok(T::default());
    }
    read_json(path)
}

fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoreStats {
    pub destinations: usize,
    pub spots: usize,
    pub alerts: usize,
    pub scraped: usize,
    pub reviews: usize,
    pub itineraries: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagOutcome {
    pub content: ScrapedContent,
    pub flagged_spots: Vec<String>,
}

/// Itineraries kept in memory before the oldest are evicted
pub const MAX_STORED_ITINERARIES: usize = 1000;

#[derive(Default)]
struct StoreData {
    seed: SeedData,
    itineraries: HashMap<Uuid, StoredItinerary>,
    // insertion order, oldest first
    saved_order: VecDeque<Uuid>,
}

impl StoreData {
    fn resolve_destination(&self, identifier: &str) -> Option<&Destination> {
        let key = Destination::normalize_key(identifier);
        if key.is_empty() {
            return None;
        }
        self.seed
            .destinations
            .iter()
            .find(|d| d.id == key || Destination::normalize_key(&d.name) == key)
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            destinations: self.seed.destinations.len(),
            spots: self.seed.spots.values().map(Vec::len).sum(),
            alerts: self.seed.alerts.len(),
            scraped: self.seed.scraped.len(),
            reviews: self.seed.reviews.len(),
            itineraries: self.itineraries.len(),
        }
    }
}

pub struct MemoryStore {
    data_dir: Option<PathBuf>,
    itinerary_limit: usize,
    inner: RwLock<StoreData>,
}

impl MemoryStore {
    pub fn new(seed: SeedData) -> Self {
        Self {
            data_dir: None,
            itinerary_limit: MAX_STORED_ITINERARIES,
            inner: RwLock::new(StoreData {
                seed,
                ..StoreData::default()
            }),
        }
    }

    pub fn load(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        let seed = SeedData::read_dir(dir)?;
        let store = Self {
            data_dir: Some(dir.to_path_buf()),
            itinerary_limit: MAX_STORED_ITINERARIES,
            inner: RwLock::new(StoreData {
                seed,
                ..StoreData::default()
            }),
        };
        info!("Loaded travel data from {}", dir.display());
        Ok(store)
    }

    /// Cap on stored itineraries. Zero is treated as one.
    pub fn with_itinerary_limit(mut self, limit: usize) -> Self {
        self.itinerary_limit = limit.max(1);
        self
    }

    /// Re-read seed files. Generated itineraries survive, admin tags do not.
    pub async fn refresh(&self) -> Result<StoreStats, StoreError> {
        let Some(dir) = &self.data_dir else {
            warn!("Refresh requested on a store without a data directory");
            return Ok(self.stats().await);
        };

        let seed = SeedData::read_dir(dir)?;
        let mut data = self.inner.write().await;
        data.seed = seed;
        let stats = data.stats();
        info!("Refreshed travel data: {:?}", stats);
        Ok(stats)
    }

    pub async fn stats(&self) -> StoreStats {
        self.inner.read().await.stats()
    }

    pub async fn list_destinations(&self) -> Vec<Destination> {
        self.inner.read().await.seed.destinations.clone()
    }

    /// Look up by id or display name, ignoring case, spaces and underscores
    pub async fn get_destination(&self, identifier: &str) -> Option<Destination> {
        self.inner
            .read()
            .await
            .resolve_destination(identifier)
            .cloned()
    }

    /// Copy of a destination's spot pool; empty when the destination is unknown
    pub async fn spots_for(&self, destination: &str) -> Vec<Spot> {
        let data = self.inner.read().await;
        let key = match data.resolve_destination(destination) {
            Some(d) => d.id.clone(),
            None => Destination::normalize_key(destination),
        };
        data.seed.spots.get(&key).cloned().unwrap_or_default()
    }

    pub async fn get_spot(&self, destination: &str, spot_id: &str) -> Option<Spot> {
        self.spots_for(destination)
            .await
            .into_iter()
            .find(|s| s.id == spot_id)
    }

    /// Set the hidden-gem flag on every pool holding the spot
    pub async fn set_hidden_gem(&self, spot_id: &str, flag: bool) -> Result<Spot, StoreError> {
        let mut data = self.inner.write().await;
        let mut updated: Option<Spot> = None;

        for pool in data.seed.spots.values_mut() {
            for spot in pool.iter_mut().filter(|s| s.id == spot_id) {
                spot.is_hidden_gem = flag;
                updated = Some(spot.clone());
            }
        }

        match updated {
            Some(spot) => {
                info!("Set hidden gem flag on {} to {}", spot_id, flag);
                Ok(spot)
            }
            None => Err(StoreError::SpotNotFound(spot_id.to_string())),
        }
    }

    /// Alerts for a destination (plus region-wide ones), or all alerts
    pub async fn alerts(&self, destination: Option<&str>) -> Vec<Alert> {
        let data = self.inner.read().await;
        let Some(destination) = destination else {
            return data.seed.alerts.clone();
        };

        let key = data
            .resolve_destination(destination)
            .map(|d| d.id.clone())
            .unwrap_or_else(|| Destination::normalize_key(destination));

        data.seed
            .alerts
            .iter()
            .filter(|a| a.destination_id.as_deref().map_or(true, |id| id == key))
            .cloned()
            .collect()
    }

    pub async fn scraped_content(&self) -> Vec<ScrapedContent> {
        self.inner.read().await.seed.scraped.clone()
    }

    pub async fn scraped_for(&self, destination: &str) -> Vec<ScrapedContent> {
        let data = self.inner.read().await;
        let key = data
            .resolve_destination(destination)
            .map(|d| d.id.clone())
            .unwrap_or_else(|| Destination::normalize_key(destination));
        data.seed
            .scraped
            .iter()
            .filter(|c| c.destination_id.as_deref().map_or(true, |id| id == key))
            .cloned()
            .collect()
    }

    /// Tag a scraped item.
    ///
    /// Tagging with `hidden_gem` also flags every spot whose name overlaps one
    /// of the item's geo tags, within the item's destination when it has one.
    pub async fn tag_scraped_content(&self, id: &str, tag: &str) -> Result<TagOutcome, StoreError> {
        let tag = tag.trim().to_lowercase();
        let mut data = self.inner.write().await;

        let item = data
            .seed
            .scraped
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::ContentNotFound(id.to_string()))?;
        if !item.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            item.tags.push(tag.clone());
        }
        let content = item.clone();

        let mut flagged_spots: Vec<String> = Vec::new();
        if tag == HIDDEN_GEM_TAG && !content.geo_tags.is_empty() {
            let scope = content
                .destination_id
                .as_deref()
                .and_then(|d| data.resolve_destination(d))
                .map(|d| d.id.clone());

            for (destination_id, pool) in data.seed.spots.iter_mut() {
                if scope.as_ref().is_some_and(|s| s != destination_id) {
                    continue;
                }
                for spot in pool.iter_mut() {
                    let named = content
                        .geo_tags
                        .iter()
                        .any(|geo| names_overlap(&spot.name, geo));
                    if named && !spot.is_hidden_gem {
                        spot.is_hidden_gem = true;
                        if !flagged_spots.contains(&spot.id) {
                            flagged_spots.push(spot.id.clone());
                        }
                    }
                }
            }
        }

        info!(
            "Tagged scraped item {} as '{}', flagged {} spots",
            id,
            tag,
            flagged_spots.len()
        );

        Ok(TagOutcome {
            content,
            flagged_spots,
        })
    }

    pub async fn save_itinerary(&self, itinerary: StoredItinerary) -> Uuid {
        let id = itinerary.id;
        let mut data = self.inner.write().await;
        if data.itineraries.insert(id, itinerary).is_none() {
            data.saved_order.push_back(id);
        }

        while data.saved_order.len() > self.itinerary_limit {
            if let Some(oldest) = data.saved_order.pop_front() {
                data.itineraries.remove(&oldest);
                debug!("Evicted itinerary {}", oldest);
            }
        }
        id
    }

    pub async fn get_itinerary(&self, id: &Uuid) -> Option<StoredItinerary> {
        self.inner.read().await.itineraries.get(id).cloned()
    }

    pub async fn reviews_for(&self, spot_name: &str) -> Vec<Review> {
        community_reviews::reviews_for_spot(&self.inner.read().await.seed.reviews, spot_name)
    }

    pub async fn add_review(&self, review: NewReview) -> Review {
        let review = community_reviews::new_review(review);
        self.inner.write().await.seed.reviews.push(review.clone());
        info!("Added review {} for {}", review.id, review.spot_name);
        review
    }
}
