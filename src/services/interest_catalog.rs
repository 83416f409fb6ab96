//! Interest catalog
//!
//! Static vocabulary of the interests the planner understands. Each entry
//! carries activity phrases per time of day, a typical visit length and the
//! tags used to widen matching when a spot is not tagged with the interest
//! itself.

use crate::models::itinerary::TimeOfDay;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

#[derive(Debug, Serialize)]
pub struct InterestTemplate {
    pub name: &'static str,
    pub morning: [&'static str; 4],
    pub afternoon: [&'static str; 4],
    pub evening: [&'static str; 4],
    pub difficulty: Difficulty,
    pub pace_hours: f64,
    pub related: [&'static str; 3],
    pub expansions: &'static [&'static str],
}

impl InterestTemplate {
    pub fn phrases(&self, time_of_day: TimeOfDay) -> &[&'static str] {
        match time_of_day {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Afternoon => &self.afternoon,
            TimeOfDay::Evening => &self.evening,
        }
    }

    pub fn pace_minutes(&self) -> u32 {
        (self.pace_hours * 60.0).round() as u32
    }
}

pub static INTERESTS: [InterestTemplate; 8] = [
    InterestTemplate {
        name: "trekking",
        morning: ["Early mountain hike", "Forest trail walk", "Hill viewpoint trek", "Ridge walk at sunrise"],
        afternoon: ["Steep trail challenge", "Valley crossing", "Rock climbing basics", "Cable-way adventure"],
        evening: ["Sunset viewpoint trek", "Downhill forest walk", "Night nature walk", "Trail-side camping setup"],
        difficulty: Difficulty::High,
        pace_hours: 3.5,
        related: ["trekking", "nature", "adventure"],
        expansions: &["hills", "mountains", "hiking", "climbing", "viewpoints", "elevation"],
    },
    InterestTemplate {
        name: "food",
        morning: ["Local breakfast market tour", "Street food exploration", "Café hopping", "Farm-to-table visit"],
        afternoon: ["Iconic eatery lunch experience", "Food cooking class", "Market walk with tastings", "Heritage restaurant visit"],
        evening: ["Dinner market stroll", "Local street food tour", "Rooftop dining experience", "Wine/chai tasting"],
        difficulty: Difficulty::Low,
        pace_hours: 2.0,
        related: ["food", "culture", "relaxation"],
        expansions: &["cafes", "restaurants", "markets", "bakeries", "street food", "dining"],
    },
    InterestTemplate {
        name: "photography",
        morning: ["Sunrise photoshoot location", "Golden hour photography", "Historic monument photography", "Landscape framing"],
        afternoon: ["Scenic lake photography", "Local market photography", "Architecture walkthrough", "Wildlife spotting"],
        evening: ["Sunset golden hour shoot", "Street photography walk", "Night photography preparation", "Landscape composition"],
        difficulty: Difficulty::Medium,
        pace_hours: 2.5,
        related: ["photography", "culture", "nature"],
        expansions: &["scenic", "viewpoints", "landmarks", "heritage", "colorful", "architecture", "lakes"],
    },
    InterestTemplate {
        name: "relaxation",
        morning: ["Spa and massage session", "Meditation at peaceful park", "Lakeside breakfast", "Yoga session with instructor"],
        afternoon: ["Leisurely café time", "Wellness spa treatment", "Hammock relaxation time", "Slow botanical garden walk"],
        evening: ["Sunset viewing from comfortable spot", "Wellness dinner", "Evening spa treatment", "Quiet lakeside reflection"],
        difficulty: Difficulty::Low,
        pace_hours: 1.5,
        related: ["relaxation", "nature", "food"],
        expansions: &["gardens", "parks", "lakeside", "peaceful", "quiet", "spa", "wellness"],
    },
    InterestTemplate {
        name: "culture",
        morning: ["Temple visit and prayer ceremony", "Museum heritage tour", "Historic monument exploration", "Cultural site visit"],
        afternoon: ["Craft workshop visit", "Local history guided tour", "Heritage building exploration", "Cultural performance watching"],
        evening: ["Heritage walk and dinner", "Local artisan interaction", "Cultural evening performance", "Historic site sunset view"],
        difficulty: Difficulty::Low,
        pace_hours: 2.0,
        related: ["culture", "photography", "food"],
        expansions: &["temples", "museums", "heritage", "monuments", "historical", "traditions", "crafts"],
    },
    InterestTemplate {
        name: "adventure",
        morning: ["Paragliding preparation and flight", "White water rafting start", "Zip-line adventure", "Quad biking expedition"],
        afternoon: ["Rock climbing session", "Skydiving experience", "Off-roading safari", "Bungee jumping adventure"],
        evening: ["Adventure sports debriefing", "Adventure celebration dinner", "Fire pit adventure stories", "Night adventure activity"],
        difficulty: Difficulty::High,
        pace_hours: 3.5,
        related: ["adventure", "trekking", "nature"],
        expansions: &["paragliding", "rafting", "zipline", "offroading", "boating", "sports", "thrilling"],
    },
    InterestTemplate {
        name: "nature",
        morning: ["Waterfall visit and swimming", "Botanical garden tour", "Forest nature walk", "Lake morning exploration"],
        afternoon: ["Wildlife spotting safari", "Natural pool visit", "Forest bathing (shinrin-yoku)", "River crossing adventure"],
        evening: ["Sunset nature photography", "Night forest sounds walk", "Campfire in nature", "Stargazing session"],
        difficulty: Difficulty::Medium,
        pace_hours: 2.5,
        related: ["nature", "photography", "relaxation"],
        expansions: &["waterfalls", "forests", "lakes", "rivers", "gardens", "botanical", "wildlife"],
    },
    InterestTemplate {
        name: "shopping",
        morning: ["Local market exploration", "Handicraft shopping tour", "Boutique district walk", "Street shopping starts"],
        afternoon: ["Flea market adventure", "Artisan workshop visit", "Shopping mall browsing", "Local vendor bargaining"],
        evening: ["Evening bazaar shopping", "Souvenir market walk", "Street shopping finale", "Night market exploration"],
        difficulty: Difficulty::Low,
        pace_hours: 2.0,
        related: ["shopping", "culture", "food"],
        expansions: &["bazaars", "markets", "handicrafts", "flea markets", "vendors", "souvenirs", "boutiques"],
    },
];

/// Case-insensitive lookup; unknown interests yield `None`
pub fn lookup(interest: &str) -> Option<&'static InterestTemplate> {
    let needle = interest.trim();
    INTERESTS
        .iter()
        .find(|template| template.name.eq_ignore_ascii_case(needle))
}

/// Recognised templates for a request, in request order, without repeats
pub fn recognised<S: AsRef<str>>(interests: &[S]) -> Vec<&'static InterestTemplate> {
    let mut templates: Vec<&'static InterestTemplate> = Vec::new();
    for interest in interests {
        if let Some(template) = lookup(interest.as_ref()) {
            if !templates.iter().any(|t| t.name == template.name) {
                templates.push(template);
            }
        }
    }
    templates
}

/// Union of expansion tags for the recognised interests, first occurrence wins
pub fn expansion_set<S: AsRef<str>>(interests: &[S]) -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for template in recognised(interests) {
        for tag in template.expansions {
            if !tags.contains(tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Either string contains the other, ignoring case. Empty strings never relate.
pub fn fuzzy_related(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}
