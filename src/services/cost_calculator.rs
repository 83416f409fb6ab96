//! Trip cost estimates and budget planning, all amounts in rupees.

use crate::models::itinerary::Budget;
use chrono::Weekday;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
struct DailyRates {
    accommodation: f64,
    meals: f64,
    transport: f64,
    activities: f64,
}

const DEFAULT_RATES: DailyRates = DailyRates {
    accommodation: 650.0,
    meals: 450.0,
    transport: 200.0,
    activities: 350.0,
};

fn daily_rates(destination: &str) -> DailyRates {
    let rates = |accommodation, meals, transport, activities| DailyRates {
        accommodation,
        meals,
        transport,
        activities,
    };
    match destination.trim().to_lowercase().as_str() {
        "shimla" => rates(600.0, 400.0, 200.0, 300.0),
        "manali" => rates(700.0, 500.0, 250.0, 400.0),
        "goa" => rates(800.0, 600.0, 150.0, 500.0),
        "jaipur" => rates(500.0, 350.0, 150.0, 250.0),
        "delhi" => rates(800.0, 500.0, 200.0, 300.0),
        "bangalore" => rates(700.0, 450.0, 150.0, 300.0),
        "mumbai" => rates(900.0, 600.0, 200.0, 400.0),
        _ => DEFAULT_RATES,
    }
}

pub fn season_multiplier(season: &str) -> f64 {
    match season.trim().to_lowercase().as_str() {
        "spring" => 1.2,
        "summer" => 1.0,
        "autumn" => 1.3,
        "winter" => 1.25,
        _ => 1.0,
    }
}

pub fn budget_multiplier(budget: Budget) -> f64 {
    match budget {
        Budget::Low => 0.7,
        Budget::Medium => 1.0,
        Budget::High => 1.5,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyBreakdown {
    pub accommodation: u32,
    pub meals: u32,
    pub transport: u32,
    pub activities: u32,
    pub shopping: u32,
    pub emergency_buffer: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CostEstimate {
    pub accommodation: u32,
    pub meals: u32,
    pub transport: u32,
    pub activities: u32,
    pub shopping: u32,
    pub emergency: u32,
    pub total: u32,
    pub daily: u32,
    pub breakdown: DailyBreakdown,
}

pub fn calculate_trip_cost(destination: &str, days: u32, budget: Budget, season: &str) -> CostEstimate {
    let rates = daily_rates(destination);
    let season_mult = season_multiplier(season);
    let budget_mult = budget_multiplier(budget);

    let accommodation = (rates.accommodation * season_mult * budget_mult).round() as u32;
    let meals = (rates.meals * budget_mult).round() as u32;
    let transport = (rates.transport * season_mult).round() as u32;
    let activities = (rates.activities * budget_mult).round() as u32;
    let shopping = ((accommodation + meals) as f64 * 0.2).round() as u32;
    let emergency = ((accommodation + meals + transport + activities) as f64 * 0.1).round() as u32;

    let daily = accommodation + meals + transport + activities + shopping + emergency;

    CostEstimate {
        accommodation: accommodation * days,
        meals: meals * days,
        transport: transport * days,
        activities: activities * days,
        shopping: shopping * days,
        emergency: emergency * days,
        total: daily * days,
        daily,
        breakdown: DailyBreakdown {
            accommodation,
            meals,
            transport,
            activities,
            shopping,
            emergency_buffer: emergency,
        },
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PriceComparison {
    pub budget: u32,
    pub standard: u32,
    pub premium: u32,
    pub savings_budget_vs_standard: u32,
    pub savings_standard_vs_premium: u32,
}

/// Totals for every tier at off-peak (summer) rates
pub fn price_comparison(destination: &str, days: u32) -> PriceComparison {
    let low = calculate_trip_cost(destination, days, Budget::Low, "Summer").total;
    let medium = calculate_trip_cost(destination, days, Budget::Medium, "Summer").total;
    let high = calculate_trip_cost(destination, days, Budget::High, "Summer").total;

    PriceComparison {
        budget: low,
        standard: medium,
        premium: high,
        savings_budget_vs_standard: medium.saturating_sub(low),
        savings_standard_vs_premium: high.saturating_sub(medium),
    }
}

pub fn savings_tips_by_date(season: &str, weekday: Weekday) -> Vec<&'static str> {
    let mut tips = Vec::new();

    match season.trim().to_lowercase().as_str() {
        "monsoon" | "summer" => {
            tips.push("Travel during monsoon for 20-30% discounts on hotels");
            tips.push("Book hotel deals - many empty rooms in off-season");
        }
        "autumn" | "spring" => {
            tips.push("Peak season prices - book 2-3 months in advance for discounts");
            tips.push("Look for combo deals (hotel + transport packages)");
        }
        _ => {}
    }

    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        tips.push("Weekend rates are 15-20% higher - consider weekday travel");
    } else {
        tips.push("Weekday travel = better prices + fewer crowds");
    }

    tips.push("Eat at local dhabas instead of tourist restaurants (save 50-70%)");
    tips.push("Use buses instead of taxis (save 40-60%)");
    tips.push("Buy combo passes for multiple attractions");
    tips
}

pub fn savings_tips(budget: Budget) -> &'static [&'static str] {
    match budget {
        Budget::Low => &[
            "Eat at local dhabas for authentic, cheap meals (₹80-120)",
            "Use local buses instead of taxis (saves 60-70%)",
            "Book homestays or guesthouses (₹300-500/night)",
            "Visit free attractions: temples, viewpoints, nature walks",
            "Travel during off-peak seasons for 30-40% discounts",
        ],
        Budget::Medium => &[
            "Look for mid-range hotels with breakfast included",
            "Mix restaurants with local eateries (save ₹150-200/meal)",
            "Use shared cabs or local buses for short distances",
            "Buy activity passes if visiting multiple sites",
            "Eat lunch (biggest meal) at cheaper places, dinner at restaurants",
        ],
        Budget::High => &[
            "Book premium hotels with good rates during shoulder seasons",
            "Reserve fine dining for special occasions",
            "Use private taxis or Uber for convenience",
            "Get activity guides or tour operators for unique experiences",
            "Consider luxury homestays for personalized service",
        ],
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetBreakdown {
    pub accommodation: f64,
    pub meals: f64,
    pub transportation: f64,
    pub activities: f64,
    pub contingency: f64,
    pub total: f64,
    pub daily: f64,
}

/// Split a trip budget across spending categories for the tier
pub fn budget_breakdown(total_budget: f64, days: u32, budget: Budget) -> BudgetBreakdown {
    let (accommodation, meals, transportation, activities, contingency) = match budget {
        Budget::Low => (0.40, 0.25, 0.15, 0.15, 0.05),
        Budget::Medium => (0.45, 0.25, 0.15, 0.10, 0.05),
        Budget::High => (0.50, 0.25, 0.10, 0.10, 0.05),
    };

    BudgetBreakdown {
        accommodation: total_budget * accommodation,
        meals: total_budget * meals,
        transportation: total_budget * transportation,
        activities: total_budget * activities,
        contingency: total_budget * contingency,
        total: total_budget,
        daily: if days == 0 { total_budget } else { total_budget / days as f64 },
    }
}

/// Fare for a ride; under a kilometre is assumed walkable
pub fn transportation_cost(distance_km: f64, budget: Budget) -> u32 {
    if distance_km < 1.0 {
        return 0;
    }
    let per_km = match budget {
        Budget::Low => 12.0,
        Budget::Medium => 22.0,
        Budget::High => 38.0,
    };
    (distance_km * per_km).ceil() as u32
}

/// Breakfast, lunch and dinner for one day
pub fn daily_meal_cost(budget: Budget) -> u32 {
    match budget {
        Budget::Low => 80 + 150 + 150,
        Budget::Medium => 150 + 250 + 300,
        Budget::High => 250 + 400 + 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shimla_medium_summer() {
        let estimate = calculate_trip_cost("Shimla", 3, Budget::Medium, "Summer");
        // 600 + 400 + 200 + 300, shopping 200, buffer 150
        assert_eq!(estimate.daily, 1850);
        assert_eq!(estimate.total, 5550);
        assert_eq!(estimate.breakdown.shopping, 200);
        assert_eq!(estimate.breakdown.emergency_buffer, 150);
    }

    #[test]
    fn test_unknown_destination_uses_default_rates() {
        let estimate = calculate_trip_cost("atlantis", 1, Budget::Medium, "Monsoon");
        assert_eq!(estimate.breakdown.accommodation, 650);
    }

    #[test]
    fn test_comparison_is_ordered() {
        let comparison = price_comparison("goa", 4);
        assert!(comparison.budget < comparison.standard);
        assert!(comparison.standard < comparison.premium);
        assert_eq!(
            comparison.savings_budget_vs_standard,
            comparison.standard - comparison.budget
        );
    }

    #[test]
    fn test_weekend_tip() {
        let tips = savings_tips_by_date("Autumn", Weekday::Sun);
        assert!(tips.iter().any(|t| t.starts_with("Peak season")));
        assert!(tips.iter().any(|t| t.starts_with("Weekend rates")));
    }

    #[test]
    fn test_budget_breakdown_shares() {
        let breakdown = budget_breakdown(10000.0, 4, Budget::High);
        assert_eq!(breakdown.accommodation, 5000.0);
        assert_eq!(breakdown.daily, 2500.0);
    }

    #[test]
    fn test_transport_and_meals() {
        assert_eq!(transportation_cost(0.5, Budget::High), 0);
        assert_eq!(transportation_cost(10.0, Budget::Low), 120);
        assert_eq!(daily_meal_cost(Budget::Medium), 700);
    }
}
