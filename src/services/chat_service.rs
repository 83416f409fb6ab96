//! Keyword-driven travel assistant.
//!
//! Answers questions about crowds, roads, weather, alternatives, food,
//! events and spot details using only the destination's own data.

use crate::models::alert::{Alert, AlertType, Severity};
use crate::models::chat::{ChatContext, ChatMessage, ChatRole};
use crate::models::scraped_content::ScrapedContent;
use crate::models::spot::Spot;
use chrono::Utc;

const BUSY_CROWD_SCORE: u8 = 7;
const PEACEFUL_CROWD_SCORE: u8 = 4;
const MAX_SUGGESTIONS: usize = 3;
const MIN_PARTIAL_WORD_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    Crowd,
    Road,
    Weather,
    Alternatives,
    Food,
    Events,
    SpotDetails,
    Help,
}

impl ChatIntent {
    pub fn detect(message: &str) -> Self {
        let text = message.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| text.contains(w));

        if has(&["crowd", "busy", "packed"]) {
            ChatIntent::Crowd
        } else if has(&["road", "traffic", "closure", "closed"]) {
            ChatIntent::Road
        } else if has(&["weather", "rain", "temperature"]) {
            ChatIntent::Weather
        } else if has(&["alternative", "instead", "recommend", "suggest"]) {
            ChatIntent::Alternatives
        } else if has(&["food", "restaurant", "eat"]) {
            ChatIntent::Food
        } else if has(&["event", "festival", "happening"]) {
            ChatIntent::Events
        } else if has(&["tell me about", "information about", "details"]) {
            ChatIntent::SpotDetails
        } else {
            ChatIntent::Help
        }
    }
}

pub struct ChatService<'a> {
    destination_name: &'a str,
    spots: &'a [Spot],
    alerts: &'a [Alert],
    posts: &'a [ScrapedContent],
}

impl<'a> ChatService<'a> {
    pub fn new(
        destination_name: &'a str,
        spots: &'a [Spot],
        alerts: &'a [Alert],
        posts: &'a [ScrapedContent],
    ) -> Self {
        Self {
            destination_name,
            spots,
            alerts,
            posts,
        }
    }

    pub fn respond(&self, message: &str) -> ChatMessage {
        let mut context = ChatContext::default();
        let content = match ChatIntent::detect(message) {
            ChatIntent::Crowd => self.crowd_reply(message, &mut context),
            ChatIntent::Road => self.road_reply(&mut context),
            ChatIntent::Weather => self.weather_reply(&mut context),
            ChatIntent::Alternatives => self.alternatives_reply(message, &mut context),
            ChatIntent::Food => self.food_reply(&mut context),
            ChatIntent::Events => self.events_reply(&mut context),
            ChatIntent::SpotDetails => self.details_reply(message, &mut context),
            ChatIntent::Help => None,
        };

        ChatMessage {
            role: ChatRole::Assistant,
            content: content.unwrap_or_else(|| self.help_text()),
            timestamp: Utc::now().to_rfc3339(),
            context,
        }
    }

    /// First spot named in the message, by full name or a distinctive word of it
    pub fn find_mentioned_spot(&self, message: &str) -> Option<&'a Spot> {
        let text = message.to_lowercase();
        self.spots.iter().find(|spot| {
            let name = spot.name.to_lowercase();
            text.contains(&name)
                || name
                    .split_whitespace()
                    .any(|word| word.chars().count() >= MIN_PARTIAL_WORD_LEN && text.contains(word))
        })
    }

    /// Spots sharing a tag with `original` that are strictly less crowded
    pub fn alternatives_to(&self, original: &Spot) -> Vec<&'a Spot> {
        let mut alternatives: Vec<&Spot> = self
            .spots
            .iter()
            .filter(|s| s.id != original.id)
            .filter(|s| s.tags.iter().any(|t| original.has_tag(t)))
            .filter(|s| s.crowd_score < original.crowd_score)
            .collect();
        alternatives.sort_by_key(|s| s.crowd_score);
        alternatives.truncate(MAX_SUGGESTIONS);
        alternatives
    }

    fn crowd_reply(&self, message: &str, context: &mut ChatContext) -> Option<String> {
        let Some(spot) = self.find_mentioned_spot(message) else {
            let peaceful: Vec<&Spot> = self
                .spots
                .iter()
                .filter(|s| s.crowd_score <= PEACEFUL_CROWD_SCORE)
                .take(MAX_SUGGESTIONS)
                .collect();
            context.spots = peaceful.iter().map(|s| (*s).clone()).collect();
            let lines: Vec<String> = peaceful
                .iter()
                .map(|s| format!("• {} (crowd level: {}/10)", s.name, s.crowd_score))
                .collect();
            return Some(format!(
                "Looking for peaceful places? Here are some less crowded spots:\n\n{}",
                lines.join("\n")
            ));
        };

        context.spots = vec![spot.clone()];
        let mut content = if spot.crowd_score >= BUSY_CROWD_SCORE {
            let suggestion = match self.alternatives_to(spot).first() {
                Some(alt) => format!(
                    "Consider visiting {} instead - similar vibe but less crowded ({}/10).",
                    alt.name, alt.crowd_score
                ),
                None => "Visit during early morning or late afternoon for a better experience."
                    .to_string(),
            };
            format!(
                "{} tends to be quite crowded (crowd level: {}/10). {}",
                spot.name, spot.crowd_score, suggestion
            )
        } else {
            let best_time = spot
                .best_time
                .as_ref()
                .map(|t| format!(" Best time to visit: {}", t))
                .unwrap_or_default();
            format!(
                "Good news! {} is relatively peaceful with a crowd level of {}/10.{}",
                spot.name, spot.crowd_score, best_time
            )
        };

        let feedback = self
            .posts
            .iter()
            .filter(|p| p.is_instagram() && p.mentions(&spot.name))
            .find(|p| p.content.to_lowercase().contains("crowd"));
        if let Some(post) = feedback {
            content.push_str(&format!(
                "\n\nRecent visitor feedback: \"{}.\"",
                first_sentence(&post.content)
            ));
            context.posts = vec![post.clone()];
        }

        Some(content)
    }

    fn road_reply(&self, context: &mut ChatContext) -> Option<String> {
        let road_alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|a| a.alert_type == AlertType::RoadClosure || a.severity >= Severity::High)
            .cloned()
            .collect();

        if road_alerts.is_empty() {
            return Some("No major road closures reported at the moment! Roads are clear for travel.".to_string());
        }

        let body: Vec<String> = road_alerts
            .iter()
            .map(|a| {
                let affected = if a.affected_areas.is_empty() {
                    String::new()
                } else {
                    format!("\nAffected: {}", a.affected_areas.join(", "))
                };
                format!("{}\n{}{}", a.title, a.description, affected)
            })
            .collect();
        context.alerts = road_alerts;
        Some(format!("Current road alerts:\n\n{}", body.join("\n\n")))
    }

    fn weather_reply(&self, context: &mut ChatContext) -> Option<String> {
        let weather_alerts = self.alerts_of(AlertType::Weather);
        if weather_alerts.is_empty() {
            return Some(
                "No weather alerts at the moment! Always carry a light jacket as temperatures can drop in the evening."
                    .to_string(),
            );
        }
        let body = Self::describe_alerts(&weather_alerts);
        context.alerts = weather_alerts;
        Some(body)
    }

    fn alternatives_reply(&self, message: &str, context: &mut ChatContext) -> Option<String> {
        if let Some(original) = self.find_mentioned_spot(message) {
            let alternatives = self.alternatives_to(original);
            if alternatives.is_empty() {
                return Some(format!(
                    "{} is already one of the quieter spots for what it offers. Try visiting early in the day.",
                    original.name
                ));
            }
            let lines: Vec<String> = alternatives
                .iter()
                .map(|s| {
                    format!(
                        "• {} - {}. (Crowd: {}/10){}",
                        s.name,
                        first_sentence(&s.description),
                        s.crowd_score,
                        if s.is_hidden_gem { " Hidden Gem" } else { "" }
                    )
                })
                .collect();
            context.spots = alternatives.into_iter().cloned().collect();
            return Some(format!(
                "Great alternatives to {}:\n\n{}",
                original.name,
                lines.join("\n\n")
            ));
        }

        let gems: Vec<&Spot> = self
            .spots
            .iter()
            .filter(|s| s.is_hidden_gem)
            .take(MAX_SUGGESTIONS)
            .collect();
        let lines: Vec<String> = gems
            .iter()
            .map(|s| format!("• {} - {}", s.name, first_sentence(&s.description)))
            .collect();
        context.spots = gems.into_iter().cloned().collect();
        Some(format!(
            "Here are some hidden gems you might love:\n\n{}",
            lines.join("\n\n")
        ))
    }

    fn food_reply(&self, context: &mut ChatContext) -> Option<String> {
        let food_posts: Vec<&ScrapedContent> = self
            .posts
            .iter()
            .filter(|p| {
                let text = p.content.to_lowercase();
                text.contains("food")
                    || text.contains("restaurant")
                    || p.tags.iter().any(|t| t.eq_ignore_ascii_case("food"))
            })
            .take(2)
            .collect();

        if !food_posts.is_empty() {
            let lines: Vec<String> = food_posts
                .iter()
                .map(|p| p.content.split('.').take(2).collect::<Vec<_>>().join("."))
                .collect();
            context.posts = food_posts.into_iter().cloned().collect();
            return Some(format!("Here's what locals recommend:\n\n{}", lines.join("\n\n")));
        }

        let food_spots: Vec<&Spot> = self
            .spots
            .iter()
            .filter(|s| s.has_tag("food"))
            .take(MAX_SUGGESTIONS)
            .collect();
        let lines: Vec<String> = food_spots.iter().map(|s| format!("• {}", s.name)).collect();
        context.spots = food_spots.into_iter().cloned().collect();
        Some(format!(
            "Check out these areas known for great food:\n\n{}",
            lines.join("\n")
        ))
    }

    fn events_reply(&self, context: &mut ChatContext) -> Option<String> {
        let events = self.alerts_of(AlertType::Event);
        if events.is_empty() {
            return Some(
                "No special events scheduled at the moment. Check back later for festival and cultural event updates!"
                    .to_string(),
            );
        }
        let body = Self::describe_alerts(&events);
        context.alerts = events;
        Some(format!("Upcoming events:\n\n{}", body))
    }

    fn details_reply(&self, message: &str, context: &mut ChatContext) -> Option<String> {
        let spot = self.find_mentioned_spot(message)?;
        context.spots = vec![spot.clone()];

        let mut lines = vec![
            spot.name.clone(),
            String::new(),
            spot.description.clone(),
            String::new(),
            format!("Location: {:.4}, {:.4}", spot.lat, spot.lng),
            format!("Hours: {}", spot.opening_hours.as_deref().unwrap_or("Always open")),
            format!("Entry: {}", spot.entry_fee.as_deref().unwrap_or("Free")),
            format!("Crowd level: {}/10", spot.crowd_score),
        ];
        if let Some(best_time) = &spot.best_time {
            lines.push(format!("Best time: {}", best_time));
        }
        if spot.is_hidden_gem {
            lines.push("This is a hidden gem!".to_string());
        }
        Some(lines.join("\n"))
    }

    fn alerts_of(&self, alert_type: AlertType) -> Vec<Alert> {
        self.alerts
            .iter()
            .filter(|a| a.alert_type == alert_type)
            .cloned()
            .collect()
    }

    fn describe_alerts(alerts: &[Alert]) -> String {
        alerts
            .iter()
            .map(|a| format!("{}\n{}", a.title, a.description))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn help_text(&self) -> String {
        format!(
            "I can help you with:\n\n\
             • Crowd levels at specific spots (e.g., \"Is Kufri crowded?\")\n\
             • Road conditions and closures\n\
             • Weather updates\n\
             • Alternative recommendations\n\
             • Food suggestions\n\
             • Event information\n\
             • Spot details\n\n\
             What would you like to know about {}?",
            self.destination_name
        )
    }
}

fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text)
}
