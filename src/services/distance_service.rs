//! Distance Service
//!
//! Great-circle distances between spots and the travel leg synthesised from
//! them. Planning never calls out to a routing API; the [`TravelTimeEstimator`]
//! trait is the seam where one could be plugged in.
//!
//! ## Travel modes
//! - under 1 km: walk, 15 min per km, distance shown in metres
//! - 1 to 5 km: taxi, 5 min per km
//! - 5 km and beyond: bus, 6 min per km

use crate::models::{itinerary::TravelMode, spot::Coordinates};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

const WALK_LIMIT_KM: f64 = 1.0;
const TAXI_LIMIT_KM: f64 = 5.0;

const WALK_MINUTES_PER_KM: f64 = 15.0;
const TAXI_MINUTES_PER_KM: f64 = 5.0;
const BUS_MINUTES_PER_KM: f64 = 6.0;

/// Calculate distance between two points using the Haversine formula
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// How to get from the previous spot to the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelInfo {
    pub mode: TravelMode,
    pub minutes: u32,
    pub time: String,
    pub distance: String,
}

impl TravelInfo {
    pub fn from_distance_km(distance_km: f64) -> Self {
        let distance_km = if distance_km.is_finite() {
            distance_km.max(0.0)
        } else {
            0.0
        };

        let (mode, minutes, distance) = if distance_km < WALK_LIMIT_KM {
            (
                TravelMode::Walk,
                (distance_km * WALK_MINUTES_PER_KM).ceil() as u32,
                format!("{:.0}m", distance_km * 1000.0),
            )
        } else if distance_km < TAXI_LIMIT_KM {
            (
                TravelMode::Taxi,
                (distance_km * TAXI_MINUTES_PER_KM).ceil() as u32,
                format!("{:.1} km", distance_km),
            )
        } else {
            (
                TravelMode::Bus,
                (distance_km * BUS_MINUTES_PER_KM).ceil() as u32,
                format!("{:.1} km", distance_km),
            )
        };

        Self {
            mode,
            minutes,
            time: format!("{} min", minutes),
            distance,
        }
    }

    /// Leg recorded for the first spot of a day
    pub fn day_start() -> Self {
        Self {
            mode: TravelMode::Walk,
            minutes: 0,
            time: "0 min".to_string(),
            distance: "0 km".to_string(),
        }
    }
}

/// Source of travel legs between two coordinates.
pub trait TravelTimeEstimator: Send + Sync {
    fn distance_km(&self, from: Coordinates, to: Coordinates) -> f64;

    fn travel_info(&self, from: Coordinates, to: Coordinates) -> TravelInfo {
        TravelInfo::from_distance_km(self.distance_km(from, to))
    }
}

/// Straight-line estimator, always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineEstimator;

impl TravelTimeEstimator for HaversineEstimator {
    fn distance_km(&self, from: Coordinates, to: Coordinates) -> f64 {
        haversine_km(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = Coordinates::new(31.1048, 77.1734);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = Coordinates::new(31.1048, 77.1734);
        let b = Coordinates::new(32.2396, 77.1887);
        let ab = haversine_km(a, b);
        assert!((ab - haversine_km(b, a)).abs() < 1e-9);
        // Shimla to Manali, roughly 126 km as the crow flies
        assert!(ab > 120.0 && ab < 132.0);
    }

    #[test]
    fn test_walk_leg() {
        let info = TravelInfo::from_distance_km(0.5);
        assert_eq!(info.mode, TravelMode::Walk);
        assert_eq!(info.time, "8 min");
        assert_eq!(info.minutes, 8);
        assert_eq!(info.distance, "500m");
    }

    #[test]
    fn test_taxi_leg() {
        let info = TravelInfo::from_distance_km(1.0);
        assert_eq!(info.mode, TravelMode::Taxi);
        assert_eq!(info.time, "5 min");
        assert_eq!(info.distance, "1.0 km");
    }

    #[test]
    fn test_bus_leg() {
        let info = TravelInfo::from_distance_km(12.0);
        assert_eq!(info.mode, TravelMode::Bus);
        assert_eq!(info.time, "72 min");
        assert_eq!(info.distance, "12.0 km");
    }

    #[test]
    fn test_zero_distance_is_free_walk() {
        let info = TravelInfo::from_distance_km(0.0);
        assert_eq!(info.mode, TravelMode::Walk);
        assert_eq!(info.minutes, 0);
        assert_eq!(info.distance, "0m");
    }

    #[test]
    fn test_estimator_uses_haversine() {
        let a = Coordinates::new(31.1048, 77.1734);
        let b = Coordinates::new(31.1050, 77.1736);
        let info = HaversineEstimator.travel_info(a, b);
        assert_eq!(info.mode, TravelMode::Walk);
    }
}
