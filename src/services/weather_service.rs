//! Static forecasts and weather advice for the supported hill and beach towns.

use crate::models::alert::{Alert, AlertType};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherForecast {
    pub date: &'static str,
    pub high: i32,
    pub low: i32,
    pub condition: &'static str,
    pub humidity: u8,
    pub wind_speed: u8,
    pub uv_index: u8,
    pub chance_of_rain: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherAdvice {
    pub condition: &'static str,
    pub safe_activities: &'static [&'static str],
    pub risky_activities: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

const fn forecast(
    date: &'static str,
    high: i32,
    low: i32,
    condition: &'static str,
    humidity: u8,
    wind_speed: u8,
    uv_index: u8,
    chance_of_rain: u8,
) -> WeatherForecast {
    WeatherForecast {
        date,
        high,
        low,
        condition,
        humidity,
        wind_speed,
        uv_index,
        chance_of_rain,
    }
}

static SHIMLA: [WeatherForecast; 3] = [
    forecast("2024-11-24", 18, 8, "Partly Cloudy", 65, 15, 5, 20),
    forecast("2024-11-25", 16, 6, "Light Rain", 75, 20, 3, 70),
    forecast("2024-11-26", 17, 7, "Cloudy", 70, 12, 4, 30),
];

static MANALI: [WeatherForecast; 3] = [
    forecast("2024-11-24", 12, 2, "Clear", 45, 10, 6, 0),
    forecast("2024-11-25", 8, -2, "Heavy Snow", 85, 35, 1, 100),
    forecast("2024-11-26", 5, -5, "Snow", 80, 25, 2, 80),
];

static GOA: [WeatherForecast; 3] = [
    forecast("2024-11-24", 32, 26, "Sunny", 70, 8, 9, 0),
    forecast("2024-11-25", 31, 25, "Sunny", 72, 9, 8, 5),
    forecast("2024-11-26", 30, 24, "Partly Cloudy", 75, 10, 7, 10),
];

static ADVICE: [WeatherAdvice; 5] = [
    WeatherAdvice {
        condition: "sunny",
        safe_activities: &["Photography", "Trekking", "Sightseeing", "Outdoor activities", "Adventure sports"],
        risky_activities: &[],
        warnings: &["Apply sunscreen", "Stay hydrated", "Peak heat 12-3 PM"],
        recommendations: &["Visit viewpoints early morning", "Use umbrella for shade", "Take water breaks every 30 min"],
    },
    WeatherAdvice {
        condition: "rainy",
        safe_activities: &["Indoor attractions", "Museums", "Cafés", "Monasteries", "Shopping"],
        risky_activities: &["Trekking", "Mountain passes", "Outdoor photography", "Adventure sports"],
        warnings: &["Roads may be slippery", "Landslide risk on mountains", "Visibility reduced"],
        recommendations: &["Postpone treks", "Carry waterproof gear if outdoors", "Check road conditions before traveling"],
    },
    WeatherAdvice {
        condition: "cloudy",
        safe_activities: &["Trekking", "Photography", "Nature walks", "Light adventure"],
        risky_activities: &["Extreme altitude trekking"],
        warnings: &["Weather can change quickly", "Visibility limited for photography"],
        recommendations: &["Perfect trekking weather", "Bring layers as temperature can drop", "Check weather updates"],
    },
    WeatherAdvice {
        condition: "snowy",
        safe_activities: &["Photography", "Skiing", "Snow activities", "Short walks", "Sightseeing"],
        risky_activities: &["Regular trekking", "Mountain passes", "Driving in high altitude"],
        warnings: &["EXTREME: Road closures likely", "Avalanche risk", "Vehicle chains mandatory"],
        recommendations: &["Only with experienced guide", "Skip passes, visit lower valleys", "Check road status hourly"],
    },
    WeatherAdvice {
        condition: "foggy",
        safe_activities: &["Local exploration", "Café visits", "Indoor activities"],
        risky_activities: &["Trekking", "Mountain passes", "Photography"],
        warnings: &["Limited visibility", "Roads dangerous", "Easy to get lost"],
        recommendations: &["Stay in town", "Visit next day", "Great for cozy café time"],
    },
];

/// Three-day outlook; unknown destinations have none
pub fn forecast_for(destination: &str) -> &'static [WeatherForecast] {
    match destination.trim().to_lowercase().as_str() {
        "shimla" => &SHIMLA,
        "manali" => &MANALI,
        "goa" => &GOA,
        _ => &[],
    }
}

pub fn recommendations(forecast: &WeatherForecast) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if forecast.chance_of_rain > 70 {
        tips.push("High rain chance - carry umbrella and waterproof gear");
    }
    if forecast.uv_index >= 8 {
        tips.push("Strong UV rays - apply SPF 50+ sunscreen, wear hat");
    }
    if forecast.high > 30 {
        tips.push("Very hot - drink plenty of water, avoid midday activity");
    }
    if forecast.low < 5 {
        tips.push("Very cold - wear thermal layers and heavy winter gear");
    }
    if forecast.wind_speed > 20 {
        tips.push("Strong winds - secure loose items, be careful on heights");
    }
    if tips.is_empty() {
        tips.push("Great weather for outdoor activities!");
    }
    tips
}

/// Advice for a condition; anything unknown is treated as cloudy
pub fn advice_for(condition: &str) -> &'static WeatherAdvice {
    let condition = condition.trim().to_lowercase();
    ADVICE
        .iter()
        .find(|a| a.condition == condition)
        .unwrap_or(&ADVICE[2])
}

pub fn weather_alerts(alerts: &[Alert]) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|a| a.alert_type == AlertType::Weather)
        .cloned()
        .collect()
}
