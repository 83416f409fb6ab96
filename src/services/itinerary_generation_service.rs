use crate::models::itinerary::{
    DayPlan, ItineraryPlan, ItineraryRequest, ItinerarySpot, TimeOfDay, TravelerType,
};
use crate::models::spot::Spot;
use crate::services::day_partitioner::{time_of_day_slots, DayAssignment, DayPartitioner};
use crate::services::distance_service::{HaversineEstimator, TravelInfo, TravelTimeEstimator};
use crate::services::interest_catalog::{self, InterestTemplate};
use crate::services::pricing_service::PricingService;
use crate::services::route_optimization_service::{OptimizationStrategy, RouteOptimizationService};
use crate::services::spot_scoring::SpotScorer;
use chrono::{Duration, NaiveDate};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

const DAY_START_MINUTES: u32 = 9 * 60;
const FAMILY_VISIT_MINUTES: u32 = 120;
const DEFAULT_VISIT_MINUTES: u32 = 90;
const PEACEFUL_CROWD_SCORE: u8 = 3;
const MAX_REASON_CLAUSES: usize = 2;

const LANDMARK_REASON: &str = "Must-see landmark";
const HIDDEN_GEM_REASON: &str = "Local insider's hidden gem";
const PEACEFUL_REASON: &str = "Peaceful, uncrowded spot";

#[derive(Clone)]
pub struct ItineraryGenerationConfig {
    /// Minutes after midnight when each day starts
    pub day_start_minutes: u32,
    pub family_visit_minutes: u32,
    pub default_visit_minutes: u32,
    pub peaceful_crowd_score: u8,
    pub route_strategy: OptimizationStrategy,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            day_start_minutes: DAY_START_MINUTES,
            family_visit_minutes: FAMILY_VISIT_MINUTES,
            default_visit_minutes: DEFAULT_VISIT_MINUTES,
            peaceful_crowd_score: PEACEFUL_CROWD_SCORE,
            route_strategy: OptimizationStrategy::NearestNeighbor,
        }
    }
}

/// Turns a request and a destination's spot pool into a day-by-day plan.
///
/// Generation is pure over its inputs: the pool is only read, and the
/// random source only picks activity phrases, so a given request and pool
/// always yield the same spots, days and start times.
pub struct ItineraryGenerator {
    config: ItineraryGenerationConfig,
    scorer: SpotScorer,
    estimator: Box<dyn TravelTimeEstimator>,
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self {
            config: ItineraryGenerationConfig::default(),
            scorer: SpotScorer::new(),
            estimator: Box::new(HaversineEstimator),
        }
    }

    pub fn with_config(
        config: ItineraryGenerationConfig,
        scorer: SpotScorer,
        estimator: Box<dyn TravelTimeEstimator>,
    ) -> Self {
        Self {
            config,
            scorer,
            estimator,
        }
    }

    pub fn generate_itinerary<R: Rng + ?Sized>(
        &self,
        request: &ItineraryRequest,
        pool: &[Spot],
        start_date: NaiveDate,
        rng: &mut R,
    ) -> ItineraryPlan {
        if pool.is_empty() {
            warn!("No spots available for {}; returning empty itinerary", request.destination);
            return Vec::new();
        }

        let interests = request.normalized_interests();
        let templates = interest_catalog::recognised(&interests);

        let ranked = self.scorer.rank_spots(pool, &interests);
        let partitioner = DayPartitioner::new(request.traveler_type.spots_per_day());
        let assignments = partitioner.partition(ranked, request.days);

        let optimizer =
            RouteOptimizationService::with_strategy(self.estimator.as_ref(), self.config.route_strategy);
        let visit_minutes = self.visit_minutes(&templates, request.traveler_type);

        let plan: ItineraryPlan = assignments
            .into_iter()
            .map(|assignment| {
                let DayAssignment { day, arc, spots } = assignment;
                let ordered: Vec<Spot> = optimizer
                    .optimize_daily_route(spots)
                    .into_iter()
                    .map(|scored| scored.spot)
                    .collect();

                let mut day_plan =
                    self.assemble_day(&ordered, request, &templates, visit_minutes, rng);
                day_plan.day = day;
                day_plan.theme = arc.theme().to_string();
                day_plan.date = Self::day_date(start_date, day);
                day_plan
            })
            .collect();

        info!(
            "Generated itinerary for {}: {} of {} days, {} spots",
            request.destination,
            plan.len(),
            request.days,
            plan.iter().map(|d| d.spots.len()).sum::<usize>()
        );

        plan
    }

    /// Visit length: the first recognised interest's pace, else a traveler default
    fn visit_minutes(&self, templates: &[&'static InterestTemplate], traveler: TravelerType) -> u32 {
        match templates.first() {
            Some(template) => template.pace_minutes(),
            None if traveler == TravelerType::Family => self.config.family_visit_minutes,
            None => self.config.default_visit_minutes,
        }
    }

    /// Schedule one day's spots in order, starting at the configured anchor
    fn assemble_day<R: Rng + ?Sized>(
        &self,
        spots: &[Spot],
        request: &ItineraryRequest,
        templates: &[&'static InterestTemplate],
        visit_minutes: u32,
        rng: &mut R,
    ) -> DayPlan {
        let slots = time_of_day_slots(spots.len());
        let mut clock = self.config.day_start_minutes;
        let mut previous: Option<&Spot> = None;
        let mut scheduled = Vec::with_capacity(spots.len());

        for (spot, time_of_day) in spots.iter().zip(slots) {
            let travel = match previous {
                Some(prev) => self
                    .estimator
                    .travel_info(prev.coordinates(), spot.coordinates()),
                None => TravelInfo::day_start(),
            };
            clock += travel.minutes;

            scheduled.push(ItinerarySpot {
                spot_id: spot.id.clone(),
                name: spot.name.clone(),
                description: spot.description.clone(),
                time: format!("{:02}:{:02}", clock / 60, clock % 60),
                time_of_day,
                duration: PricingService::format_duration(visit_minutes),
                duration_minutes: visit_minutes,
                cost: PricingService::estimate_cost(spot.entry_fee.as_deref(), request.budget),
                travel_mode: travel.mode,
                travel_time: travel.time,
                travel_minutes: travel.minutes,
                travel_distance: travel.distance,
                reason: self.build_reason(spot, templates, time_of_day, rng),
                is_hidden_gem: spot.is_hidden_gem,
                coordinates: spot.coordinates(),
                opening_hours: spot.opening_hours.clone(),
                crowd_score: spot.crowd_score,
                tags: spot.tags.clone(),
                image_url: spot.image_url.clone(),
            });

            clock += visit_minutes;
            previous = Some(spot);
        }

        let total_cost = PricingService::calculate_day_cost(&scheduled);
        let total_minutes = PricingService::calculate_day_minutes(&scheduled);
        debug!(
            "Assembled day with {} spots, {} min, ₹{}",
            scheduled.len(),
            total_minutes,
            total_cost
        );

        DayPlan {
            day: 0,
            date: String::new(),
            theme: String::new(),
            spots: scheduled,
            total_cost: PricingService::format_day_cost(total_cost),
            total_time: PricingService::format_day_time(total_minutes),
        }
    }

    /// Up to two clauses explaining why the spot is on the plan
    fn build_reason<R: Rng + ?Sized>(
        &self,
        spot: &Spot,
        templates: &[&'static InterestTemplate],
        time_of_day: TimeOfDay,
        rng: &mut R,
    ) -> String {
        let mut clauses: Vec<String> = Vec::with_capacity(3);

        let matched = templates
            .iter()
            .find(|t| spot.has_tag(t.name))
            .or_else(|| templates.first());

        match matched {
            Some(template) => {
                let phrase = template
                    .phrases(time_of_day)
                    .choose(rng)
                    .copied()
                    .unwrap_or(LANDMARK_REASON);
                clauses.push(format!("{} — perfect for {}", phrase, template.name));
            }
            None => clauses.push(LANDMARK_REASON.to_string()),
        }

        if spot.is_hidden_gem {
            clauses.push(HIDDEN_GEM_REASON.to_string());
        }
        if spot.crowd_score <= self.config.peaceful_crowd_score {
            clauses.push(PEACEFUL_REASON.to_string());
        }

        clauses.truncate(MAX_REASON_CLAUSES);
        clauses.join(" | ")
    }

    /// "Monday, 3 March 2025" for the given day of the trip
    fn day_date(start_date: NaiveDate, day: u32) -> String {
        (start_date + Duration::days(day as i64 - 1))
            .format("%A, %-d %B %Y")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{Budget, TravelMode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spot(id: &str, lat: f64, lng: f64, tags: &[&str], crowd: u8, gem: bool, fee: &str) -> Spot {
        Spot {
            id: id.to_string(),
            name: format!("Spot {}", id),
            description: String::new(),
            lat,
            lng,
            best_time: None,
            entry_fee: Some(fee.to_string()),
            opening_hours: None,
            crowd_score: crowd,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            instagram_captions: Vec::new(),
            image_url: None,
            is_hidden_gem: gem,
        }
    }

    fn request(days: u32, traveler: TravelerType, interests: &[&str]) -> ItineraryRequest {
        ItineraryRequest {
            destination: "shimla".to_string(),
            days,
            budget: Budget::Medium,
            traveler_type: traveler,
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn generator() -> ItineraryGenerator {
        ItineraryGenerator::with_config(
            ItineraryGenerationConfig::default(),
            SpotScorer::default(),
            Box::new(HaversineEstimator),
        )
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    #[test]
    fn test_first_spot_starts_at_nine_with_no_travel() {
        let pool = vec![
            spot("a", 31.1000, 77.1000, &["nature"], 4, false, "Free"),
            spot("b", 31.1027, 77.1000, &["nature"], 5, false, "₹100"),
        ];
        let plan = generator().generate_itinerary(
            &request(1, TravelerType::Couple, &["nature"]),
            &pool,
            start(),
            &mut StdRng::seed_from_u64(1),
        );

        let first = &plan[0].spots[0];
        assert_eq!(first.time, "09:00");
        assert_eq!(first.travel_mode, TravelMode::Walk);
        assert_eq!(first.travel_time, "0 min");
        assert_eq!(first.travel_distance, "0 km");

        // nature paces at 2.5 hours; ~0.3 km walk takes 5 minutes
        let second = &plan[0].spots[1];
        assert_eq!(second.travel_mode, TravelMode::Walk);
        assert_eq!(second.travel_time, "5 min");
        assert_eq!(second.time, "11:35");
        assert_eq!(second.duration, "2.5 hours");
    }

    #[test]
    fn test_day_totals() {
        let pool = vec![
            spot("a", 31.1000, 77.1000, &["food"], 4, false, "₹100"),
            spot("b", 31.1010, 77.1000, &["food"], 5, false, "Free"),
            spot("c", 31.1020, 77.1000, &["food"], 6, false, "₹20"),
        ];
        let plan = generator().generate_itinerary(
            &request(1, TravelerType::Family, &["food"]),
            &pool,
            start(),
            &mut StdRng::seed_from_u64(2),
        );

        let day = &plan[0];
        assert_eq!(day.spots.len(), 3);
        // medium budget adds 50 to each paid entry
        assert_eq!(day.total_cost, "₹220");
        assert_eq!(day.total_time, "6 hours 0 min");
        assert_eq!(day.date, "Monday, 3 March 2025");
        assert_eq!(day.theme, "Perfect starting point");
    }

    #[test]
    fn test_unrecognised_interests_use_traveler_default_duration() {
        let pool = vec![spot("a", 31.1, 77.1, &["temple"], 4, false, "Free")];

        let plan = generator().generate_itinerary(
            &request(1, TravelerType::Family, &["underwater_basket_weaving"]),
            &pool,
            start(),
            &mut StdRng::seed_from_u64(3),
        );
        assert_eq!(plan[0].spots[0].duration, "2 hours");
        assert_eq!(plan[0].spots[0].reason, LANDMARK_REASON);

        let plan = generator().generate_itinerary(
            &request(1, TravelerType::Solo, &["underwater_basket_weaving"]),
            &pool,
            start(),
            &mut StdRng::seed_from_u64(3),
        );
        assert_eq!(plan[0].spots[0].duration, "1.5 hours");
    }

    #[test]
    fn test_reason_mentions_matching_interest_and_gem() {
        let pool = vec![spot("a", 31.1, 77.1, &["photography"], 2, true, "Free")];
        let plan = generator().generate_itinerary(
            &request(1, TravelerType::Solo, &["nature", "photography"]),
            &pool,
            start(),
            &mut StdRng::seed_from_u64(4),
        );
        let reason = &plan[0].spots[0].reason;
        assert!(reason.contains("perfect for photography"), "{}", reason);
        assert!(reason.contains("hidden gem"), "{}", reason);
        // only two clauses survive
        assert!(!reason.contains("uncrowded"), "{}", reason);
    }

    #[test]
    fn test_reason_notes_quiet_spot() {
        let pool = vec![spot("a", 31.1, 77.1, &["nature"], 1, false, "Free")];
        let plan = generator().generate_itinerary(
            &request(1, TravelerType::Solo, &["nature"]),
            &pool,
            start(),
            &mut StdRng::seed_from_u64(5),
        );
        assert!(plan[0].spots[0].reason.ends_with("| Peaceful, uncrowded spot"));
    }

    #[test]
    fn test_empty_pool_gives_empty_plan() {
        let plan = generator().generate_itinerary(
            &request(3, TravelerType::Solo, &["nature"]),
            &[],
            start(),
            &mut StdRng::seed_from_u64(6),
        );
        assert!(plan.is_empty());
    }
}
