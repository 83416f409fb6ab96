use crate::models::scraped_content::ScrapedContent;
use crate::models::spot::Spot;
use serde::Serialize;

pub const DEFAULT_GEM_LIMIT: usize = 5;
const MIN_GEM_SCORE: u32 = 30;
const MAX_REASONS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct HiddenGem {
    pub spot: Spot,
    pub score: u32,
    pub reasons: Vec<String>,
    pub instagram_mentions: usize,
    pub trust_score: u32,
}

/// Rate how much of an undiscovered find a spot is
pub fn score_hidden_gem(spot: &Spot, posts: &[ScrapedContent], interests: &[String]) -> HiddenGem {
    let mut score = 0;
    let mut reasons: Vec<String> = Vec::new();

    if spot.crowd_score <= 3 {
        score += 40;
        reasons.push("Very peaceful, minimal tourists".to_string());
    } else if spot.crowd_score <= 6 {
        score += 20;
        reasons.push("Relatively peaceful".to_string());
    }

    let mentions = posts.iter().filter(|p| p.mentions(&spot.name)).count();
    if mentions == 0 {
        score += 30;
        reasons.push("Undiscovered gem - no Instagram mentions".to_string());
    } else if mentions <= 2 {
        score += 15;
        reasons.push("Rarely featured on social media".to_string());
    }

    let interest_matches = spot
        .tags
        .iter()
        .filter(|tag| interests.iter().any(|i| i.eq_ignore_ascii_case(tag)))
        .count() as u32;
    score += interest_matches * 10;

    if spot.has_tag("nature") || spot.has_tag("photography") {
        score += 10;
        reasons.push("Great for authentic experiences".to_string());
    }

    if spot.is_hidden_gem {
        score += 20;
        reasons.push("Verified hidden gem".to_string());
    }

    reasons.truncate(MAX_REASONS);

    HiddenGem {
        spot: spot.clone(),
        score,
        reasons,
        instagram_mentions: mentions,
        trust_score: score.min(100),
    }
}

/// Best hidden gems in a pool, highest score first
pub fn find_hidden_gems(
    spots: &[Spot],
    posts: &[ScrapedContent],
    interests: &[String],
    limit: usize,
) -> Vec<HiddenGem> {
    let mut gems: Vec<HiddenGem> = spots
        .iter()
        .map(|spot| score_hidden_gem(spot, posts, interests))
        .filter(|gem| gem.score >= MIN_GEM_SCORE)
        .collect();
    gems.sort_by(|a, b| b.score.cmp(&a.score));
    gems.truncate(limit);
    gems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(name: &str, tags: &[&str], crowd: u8, gem: bool) -> Spot {
        Spot {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            lat: 31.1,
            lng: 77.1,
            best_time: None,
            entry_fee: None,
            opening_hours: None,
            crowd_score: crowd,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            instagram_captions: Vec::new(),
            image_url: None,
            is_hidden_gem: gem,
        }
    }

    fn post(content: &str) -> ScrapedContent {
        ScrapedContent {
            id: "p".to_string(),
            source: "Instagram".to_string(),
            title: None,
            content: content.to_string(),
            geo_tags: Vec::new(),
            tags: Vec::new(),
            url: None,
            timestamp: "2025-01-01".to_string(),
            destination_id: None,
        }
    }

    #[test]
    fn test_quiet_unmentioned_gem_scores_high() {
        let gem = score_hidden_gem(
            &spot("Chadwick Falls", &["nature"], 2, true),
            &[],
            &["nature".to_string()],
        );
        // 40 quiet + 30 unmentioned + 10 interest + 10 nature + 20 flagged
        assert_eq!(gem.score, 110);
        assert_eq!(gem.trust_score, 100);
        assert_eq!(gem.reasons.len(), 3);
    }

    #[test]
    fn test_mentions_reduce_score() {
        let posts = vec![post("Chadwick Falls was stunning"), post("Back at chadwick falls")];
        let gem = score_hidden_gem(&spot("Chadwick Falls", &[], 5, false), &posts, &[]);
        assert_eq!(gem.instagram_mentions, 2);
        assert_eq!(gem.score, 20 + 15);
    }

    #[test]
    fn test_find_filters_and_limits() {
        let spots = vec![
            spot("Mall Road", &["shopping"], 9, false),
            spot("Tara Devi", &["culture"], 3, false),
            spot("Chail", &["nature"], 2, true),
        ];
        let posts = vec![post("Mall Road"), post("Mall Road"), post("Mall Road")];
        let gems = find_hidden_gems(&spots, &posts, &[], 1);
        assert_eq!(gems.len(), 1);
        assert_eq!(gems[0].spot.name, "Chail");

        let gems = find_hidden_gems(&spots, &posts, &[], DEFAULT_GEM_LIMIT);
        assert!(gems.iter().all(|g| g.spot.name != "Mall Road"));
    }
}
