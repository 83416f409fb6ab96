use crate::models::spot::{MAX_CROWD_SCORE, MIN_CROWD_SCORE};
use chrono::{Datelike, Local, Timelike, Weekday};
use serde::Serialize;

const LOOKAHEAD_HOURS: u32 = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CrowdPrediction {
    pub current_crowd: u8,
    pub predicted_crowd: u8,
    pub best_time: &'static str,
    pub worst_time: &'static str,
    pub recommendation: &'static str,
}

fn scale(base: u8, factor: f64) -> u8 {
    (base as f64 * factor)
        .floor()
        .clamp(MIN_CROWD_SCORE as f64, MAX_CROWD_SCORE as f64) as u8
}

/// Crowd at a given hour: quiet at dawn and night, peaking after midday
pub fn crowd_by_hour(base: u8, hour: u32) -> u8 {
    match hour {
        6..=8 => scale(base, 0.7),
        9..=11 => base,
        12..=14 => scale(base, 1.2),
        15..=18 => scale(base, 1.1),
        _ => scale(base, 0.6),
    }
}

pub fn crowd_by_weekday(base: u8, weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sat | Weekday::Sun => scale(base, 1.3),
        _ => base,
    }
}

pub fn predict_at(base: u8, hour: u32, weekday: Weekday) -> CrowdPrediction {
    let day_level = crowd_by_weekday(base, weekday);
    let current_crowd = crowd_by_hour(day_level, hour);
    let predicted_crowd = crowd_by_hour(day_level, (hour + LOOKAHEAD_HOURS) % 24);

    let (best_time, worst_time, recommendation) = if base >= 8 {
        (
            "Night (7-10 PM) or before 7 AM",
            "12 PM - 5 PM",
            "This is a popular spot. Visit very early morning or late evening",
        )
    } else if base >= 5 {
        (
            "Morning (8-11 AM)",
            "2-4 PM",
            "Good time to visit morning or late evening",
        )
    } else {
        (
            "Early morning (6-8 AM)",
            "Afternoon (1-3 PM)",
            "Visit in early morning for fewer crowds",
        )
    };

    CrowdPrediction {
        current_crowd,
        predicted_crowd,
        best_time,
        worst_time,
        recommendation,
    }
}

pub fn predict_now(base: u8) -> CrowdPrediction {
    let now = Local::now();
    predict_at(base, now.hour(), now.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_multipliers() {
        assert_eq!(crowd_by_hour(8, 7), 5);
        assert_eq!(crowd_by_hour(5, 10), 5);
        assert_eq!(crowd_by_hour(7, 13), 8);
        assert_eq!(crowd_by_hour(9, 13), 10);
        assert_eq!(crowd_by_hour(5, 16), 5);
        assert_eq!(crowd_by_hour(1, 22), 1);
    }

    #[test]
    fn test_weekend_is_busier() {
        assert_eq!(crowd_by_weekday(5, Weekday::Sat), 6);
        assert_eq!(crowd_by_weekday(5, Weekday::Tue), 5);
    }

    #[test]
    fn test_prediction_looks_three_hours_ahead() {
        let prediction = predict_at(7, 10, Weekday::Wed);
        assert_eq!(prediction.current_crowd, 7);
        assert_eq!(prediction.predicted_crowd, 8);
        assert_eq!(prediction.best_time, "Morning (8-11 AM)");
    }

    #[test]
    fn test_popular_spot_advice() {
        let prediction = predict_at(9, 23, Weekday::Mon);
        assert_eq!(prediction.worst_time, "12 PM - 5 PM");
        // 23:00 + 3h wraps to 02:00
        assert_eq!(prediction.predicted_crowd, 5);
    }
}
