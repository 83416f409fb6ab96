use crate::models::itinerary::{Budget, DayPlan, ItinerarySpot, ItinerarySummary};
use regex::Regex;
use std::sync::LazyLock;

pub const FREE: &str = "Free";

static FEE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:₹|Rs\.?)\s*([\d,]+)").expect("valid fee regex"));
static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*hours?").expect("valid hours regex"));
static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*min").expect("valid minutes regex"));

pub struct PricingService;

impl PricingService {
    /// Incidental spend added on top of an entry fee for each budget tier
    pub fn budget_surcharge(budget: Budget) -> u32 {
        match budget {
            Budget::Low => 0,
            Budget::Medium => 50,
            Budget::High => 150,
        }
    }

    /// Visit cost for a spot: "Free", or the first rupee amount in the fee plus the tier surcharge
    pub fn estimate_cost(entry_fee: Option<&str>, budget: Budget) -> String {
        let fee = match entry_fee.map(str::trim) {
            None | Some("") => return FREE.to_string(),
            Some(fee) if fee.eq_ignore_ascii_case(FREE) => return FREE.to_string(),
            Some(fee) => fee,
        };

        match Self::parse_amount(fee) {
            Some(base) => Self::format_rupees(base.saturating_add(Self::budget_surcharge(budget))),
            None => FREE.to_string(),
        }
    }

    /// Integer rupee amount of a cost string; "Free" and anything unreadable are 0
    pub fn parse_cost(cost: &str) -> u32 {
        let cost = cost.trim();
        if cost.eq_ignore_ascii_case(FREE) {
            return 0;
        }
        Self::parse_amount(cost)
            .or_else(|| cost.replace(',', "").parse().ok())
            .unwrap_or(0)
    }

    fn parse_amount(text: &str) -> Option<u32> {
        FEE_AMOUNT
            .captures(text)
            .and_then(|caps| caps[1].replace(',', "").parse().ok())
    }

    pub fn format_rupees(amount: u32) -> String {
        format!("₹{}", amount)
    }

    /// Day total: "Free" when nothing is owed
    pub fn format_day_cost(amount: u32) -> String {
        if amount == 0 {
            FREE.to_string()
        } else {
            Self::format_rupees(amount)
        }
    }

    /// Visit length as shown to travellers, e.g. "2 hours" or "2.5 hours"
    pub fn format_duration(minutes: u32) -> String {
        format!("{} hours", minutes as f64 / 60.0)
    }

    pub fn format_day_time(minutes: u32) -> String {
        format!("{} hours {} min", minutes / 60, minutes % 60)
    }

    /// Minutes in an "H hours M min" string; missing parts count as 0
    pub fn parse_duration_minutes(text: &str) -> u32 {
        let hours: u32 = HOURS
            .captures(text)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0);
        let minutes: u32 = MINUTES
            .captures(text)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0);
        hours.saturating_mul(60).saturating_add(minutes)
    }

    /// Sum of a day's spot costs
    pub fn calculate_day_cost(spots: &[ItinerarySpot]) -> u32 {
        spots.iter().map(|s| Self::parse_cost(&s.cost)).sum()
    }

    /// Sum of a day's visit durations in minutes
    pub fn calculate_day_minutes(spots: &[ItinerarySpot]) -> u32 {
        spots.iter().map(|s| s.duration_minutes).sum()
    }

    /// Trip totals from the day plans' own cost and time strings
    pub fn calculate_summary(plan: &[DayPlan]) -> ItinerarySummary {
        let total_cost: u32 = plan.iter().map(|day| Self::parse_cost(&day.total_cost)).sum();
        let total_minutes: u32 = plan
            .iter()
            .map(|day| Self::parse_duration_minutes(&day.total_time))
            .sum();

        ItinerarySummary {
            total_cost: Self::format_rupees(total_cost),
            total_time: format!("{} hours", total_minutes / 60),
        }
    }
}
