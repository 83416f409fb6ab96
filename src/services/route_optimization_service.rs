//! Route Optimization Service
//!
//! Orders the spots picked for a day so the walk from one to the next stays
//! short. Uses a greedy nearest-neighbour tour anchored on the day's first
//! pick, which keeps the partitioner's lead spot in front.

use crate::services::distance_service::TravelTimeEstimator;
use crate::services::spot_scoring::ScoredSpot;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationStrategy {
    /// Greedy nearest-neighbour from the first spot
    #[default]
    NearestNeighbor,
    /// Keep the order the partitioner produced
    PreserveOrder,
}

pub struct RouteOptimizationService<'a> {
    estimator: &'a dyn TravelTimeEstimator,
    strategy: OptimizationStrategy,
}

impl<'a> RouteOptimizationService<'a> {
    pub fn new(estimator: &'a dyn TravelTimeEstimator) -> Self {
        Self {
            estimator,
            strategy: OptimizationStrategy::default(),
        }
    }

    pub fn with_strategy(estimator: &'a dyn TravelTimeEstimator, strategy: OptimizationStrategy) -> Self {
        Self { estimator, strategy }
    }

    /// Optimize the visiting order of a single day's spots
    pub fn optimize_daily_route(&self, spots: Vec<ScoredSpot>) -> Vec<ScoredSpot> {
        match self.strategy {
            OptimizationStrategy::PreserveOrder => spots,
            OptimizationStrategy::NearestNeighbor => self.tsp_nearest_neighbor(spots),
        }
    }

    /// Nearest neighbor TSP heuristic; ties go to the earlier spot
    fn tsp_nearest_neighbor(&self, spots: Vec<ScoredSpot>) -> Vec<ScoredSpot> {
        if spots.len() <= 2 {
            return spots;
        }

        let mut unvisited = spots;
        let mut route = Vec::with_capacity(unvisited.len());
        let first = unvisited.remove(0);
        let mut current_location = first.spot.coordinates();
        route.push(first);

        while !unvisited.is_empty() {
            let mut nearest_idx = 0;
            let mut nearest_km = f64::MAX;

            for (idx, candidate) in unvisited.iter().enumerate() {
                let km = self
                    .estimator
                    .distance_km(current_location, candidate.spot.coordinates());
                if km < nearest_km {
                    nearest_km = km;
                    nearest_idx = idx;
                }
            }

            let nearest = unvisited.remove(nearest_idx);
            current_location = nearest.spot.coordinates();
            route.push(nearest);
        }

        debug!("Nearest neighbor route completed with {} spots", route.len());
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::spot::Spot;
    use crate::services::distance_service::HaversineEstimator;
    use crate::services::spot_scoring::ScoreBreakdown;

    fn at(id: &str, lat: f64, lng: f64) -> ScoredSpot {
        ScoredSpot {
            spot: Spot {
                id: id.to_string(),
                name: id.to_string(),
                description: String::new(),
                lat,
                lng,
                best_time: None,
                entry_fee: None,
                opening_hours: None,
                crowd_score: 5,
                tags: Vec::new(),
                instagram_captions: Vec::new(),
                image_url: None,
                is_hidden_gem: false,
            },
            score: 10.0,
            score_breakdown: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn test_nearest_neighbor_avoids_back_and_forth() {
        let estimator = HaversineEstimator;
        let optimizer = RouteOptimizationService::new(&estimator);

        // start, far, near: the near stop should come second
        let spots = vec![
            at("start", 31.100, 77.100),
            at("far", 31.200, 77.100),
            at("near", 31.101, 77.100),
        ];
        let route = optimizer.optimize_daily_route(spots);
        let order: Vec<&str> = route.iter().map(|s| s.spot.id.as_str()).collect();
        assert_eq!(order, vec!["start", "near", "far"]);
    }

    #[test]
    fn test_first_spot_stays_first() {
        let estimator = HaversineEstimator;
        let optimizer = RouteOptimizationService::new(&estimator);
        let spots = vec![
            at("lead", 31.30, 77.10),
            at("b", 31.10, 77.10),
            at("c", 31.11, 77.10),
        ];
        let route = optimizer.optimize_daily_route(spots);
        assert_eq!(route[0].spot.id, "lead");
    }

    #[test]
    fn test_preserve_order_strategy() {
        let estimator = HaversineEstimator;
        let optimizer =
            RouteOptimizationService::with_strategy(&estimator, OptimizationStrategy::PreserveOrder);
        let spots = vec![
            at("a", 31.100, 77.100),
            at("b", 31.200, 77.100),
            at("c", 31.101, 77.100),
        ];
        let route = optimizer.optimize_daily_route(spots);
        assert_eq!(route[1].spot.id, "b");
    }
}
