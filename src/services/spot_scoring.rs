use crate::models::spot::{Spot, MAX_CROWD_SCORE};
use crate::services::interest_catalog;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points per spot tag that names a requested interest
    pub direct_match_weight: f32,
    /// Points per spot tag related to the interests' expansion tags
    pub expansion_weight: f32,
    /// Upper bound on the total expansion contribution
    pub expansion_cap: f32,
    /// Points per crowd level below the maximum
    pub crowd_weight: f32,
    /// Flat bonus for flagged hidden gems
    pub hidden_gem_bonus: f32,
    /// Score every spot receives when nothing matches the interests
    pub fallback_score: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            direct_match_weight: 35.0,
            expansion_weight: 10.0,
            expansion_cap: 15.0,
            crowd_weight: 1.0,
            hidden_gem_bonus: 5.0,
            fallback_score: 50.0,
        }
    }
}

impl ScoringWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            direct_match_weight: env_weight("SPOT_DIRECT_MATCH_WEIGHT", defaults.direct_match_weight),
            expansion_weight: env_weight("SPOT_EXPANSION_WEIGHT", defaults.expansion_weight),
            expansion_cap: env_weight("SPOT_EXPANSION_CAP", defaults.expansion_cap),
            crowd_weight: env_weight("SPOT_CROWD_WEIGHT", defaults.crowd_weight),
            hidden_gem_bonus: env_weight("SPOT_HIDDEN_GEM_BONUS", defaults.hidden_gem_bonus),
            fallback_score: env_weight("SPOT_FALLBACK_SCORE", defaults.fallback_score),
        }
    }
}

fn env_weight(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse::<f32>().ok())
        .filter(|w| w.is_finite() && *w >= 0.0)
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub direct_score: f32,
    pub expansion_score: f32,
    pub crowd_score: f32,
    pub hidden_gem_score: f32,
    /// Tags that hit an interest directly or through its expansions
    #[serde(default)]
    pub interest_matches: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredSpot {
    pub spot: Spot,
    pub score: f32,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Default)]
pub struct SpotScorer {
    pub weights: ScoringWeights,
}

impl SpotScorer {
    pub fn new() -> Self {
        let weights = ScoringWeights::from_env();
        debug!("SpotScorer initialized with weights: {:?}", weights);
        Self { weights }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score a spot against normalised interests and their expansion tags.
    ///
    /// The crowd and hidden-gem bonuses apply to every spot, matched or not.
    pub fn score_spot(
        &self,
        spot: &Spot,
        interests: &[String],
        expansions: &[&str],
    ) -> (f32, ScoreBreakdown) {
        let direct_matches = spot
            .tags
            .iter()
            .filter(|tag| interests.iter().any(|i| i.eq_ignore_ascii_case(tag.trim())))
            .count();

        let expansion_matches = spot
            .tags
            .iter()
            .filter(|tag| {
                expansions
                    .iter()
                    .any(|exp| interest_catalog::fuzzy_related(tag, exp))
            })
            .count();

        let breakdown = ScoreBreakdown {
            direct_score: direct_matches as f32 * self.weights.direct_match_weight,
            expansion_score: (expansion_matches as f32 * self.weights.expansion_weight)
                .min(self.weights.expansion_cap),
            crowd_score: MAX_CROWD_SCORE.saturating_sub(spot.crowd_score) as f32
                * self.weights.crowd_weight,
            hidden_gem_score: if spot.is_hidden_gem {
                self.weights.hidden_gem_bonus
            } else {
                0.0
            },
            interest_matches: direct_matches + expansion_matches,
        };

        let total = breakdown.direct_score
            + breakdown.expansion_score
            + breakdown.crowd_score
            + breakdown.hidden_gem_score;

        (total.max(0.0), breakdown)
    }

    /// Rank a destination pool for the given interests.
    ///
    /// Duplicate ids keep their first occurrence. When no spot in the pool
    /// matches an interest, every spot gets the fallback score; otherwise
    /// zero-score spots are dropped. Ties keep pool order.
    pub fn rank_spots(&self, pool: &[Spot], interests: &[String]) -> Vec<ScoredSpot> {
        let expansions = interest_catalog::expansion_set(interests);

        let mut seen: HashSet<String> = HashSet::new();
        let mut scored: Vec<ScoredSpot> = pool
            .iter()
            .filter(|spot| seen.insert(spot.id.clone()))
            .map(|spot| {
                let (score, score_breakdown) = self.score_spot(spot, interests, &expansions);
                ScoredSpot {
                    spot: spot.clone(),
                    score,
                    score_breakdown,
                }
            })
            .collect();

        if scored.iter().any(|s| s.score_breakdown.interest_matches > 0) {
            scored.retain(|s| s.score > 0.0);
        } else if !scored.is_empty() {
            warn!(
                "No spots matched interests {:?}; using fallback score for {} spots",
                interests,
                scored.len()
            );
            for s in scored.iter_mut() {
                s.score = self.weights.fallback_score;
            }
        }

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "Ranked {} of {} spots, top score {:.1}",
            scored.len(),
            pool.len(),
            scored.first().map(|s| s.score).unwrap_or(0.0)
        );

        scored
    }
}
