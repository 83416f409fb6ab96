//! Day Partitioner
//!
//! Splits a ranked candidate list into per-day groups. Every day re-sorts
//! what is left of the pool according to where it sits in the trip, so the
//! plan opens on the busiest well-known picks, turns to hidden gems around
//! the middle and winds down with quiet spots. A spot used on one day never returns.

use crate::models::itinerary::TimeOfDay;
use crate::services::spot_scoring::ScoredSpot;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Role a day plays in the shape of the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayArc {
    Opening,
    HiddenGems,
    Discovery,
    Finale,
}

impl DayArc {
    pub fn for_day(day: u32, days: u32) -> Self {
        let midpoint = days.div_ceil(2);
        if day == 1 {
            DayArc::Opening
        } else if day == days {
            DayArc::Finale
        } else if day == midpoint {
            DayArc::HiddenGems
        } else {
            DayArc::Discovery
        }
    }

    pub fn theme(&self) -> &'static str {
        match self {
            DayArc::Opening => "Perfect starting point",
            DayArc::HiddenGems => "Hidden gem experience",
            DayArc::Discovery => "Unique discovery",
            DayArc::Finale => "Relaxing finale",
        }
    }

    fn compare(&self, a: &ScoredSpot, b: &ScoredSpot) -> Ordering {
        let by_score = || b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal);
        match self {
            // score already rewards quiet spots, so popularity leads here
            DayArc::Opening => a
                .spot
                .is_hidden_gem
                .cmp(&b.spot.is_hidden_gem)
                .then_with(|| b.spot.crowd_score.cmp(&a.spot.crowd_score))
                .then_with(by_score),
            DayArc::HiddenGems => b
                .spot
                .is_hidden_gem
                .cmp(&a.spot.is_hidden_gem)
                .then_with(|| a.spot.crowd_score.cmp(&b.spot.crowd_score))
                .then_with(by_score),
            DayArc::Finale => a
                .spot
                .crowd_score
                .cmp(&b.spot.crowd_score)
                .then_with(by_score),
            DayArc::Discovery => by_score(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DayAssignment {
    pub day: u32,
    pub arc: DayArc,
    pub spots: Vec<ScoredSpot>,
}

pub struct DayPartitioner {
    spots_per_day: usize,
}

impl DayPartitioner {
    pub fn new(spots_per_day: usize) -> Self {
        Self {
            spots_per_day: spots_per_day.max(1),
        }
    }

    /// Partition ranked spots into at most `days` groups.
    ///
    /// Stops early once the pool is exhausted, so the result may hold fewer
    /// days than requested. Quotas are spread so a short pool still covers
    /// as many days as it can.
    pub fn partition(&self, ranked: Vec<ScoredSpot>, days: u32) -> Vec<DayAssignment> {
        let capacity = days as usize * self.spots_per_day;
        let mut pool: Vec<ScoredSpot> = ranked.into_iter().take(capacity).collect();
        let mut used: HashSet<String> = HashSet::new();
        let mut assignments = Vec::with_capacity(days as usize);

        for day in 1..=days {
            pool.retain(|s| !used.contains(&s.spot.id));
            if pool.is_empty() {
                debug!("Pool exhausted after {} of {} days", day - 1, days);
                break;
            }

            let days_left = (days - day + 1) as usize;
            let quota = self.spots_per_day.min(pool.len().div_ceil(days_left));

            let arc = DayArc::for_day(day, days);
            pool.sort_by(|a, b| arc.compare(a, b));

            let spots: Vec<ScoredSpot> = pool.drain(..quota).collect();
            for s in &spots {
                used.insert(s.spot.id.clone());
            }

            assignments.push(DayAssignment { day, arc, spots });
        }

        assignments
    }
}

/// Morning, afternoon and evening slots for a day of `count` spots, in order.
///
/// Morning takes the first ceil(n/3) spots; any day with two or more spots
/// ends with at least one evening visit.
pub fn time_of_day_slots(count: usize) -> Vec<TimeOfDay> {
    let morning = count.div_ceil(3);
    let evening = if count >= 2 { (count / 3).max(1) } else { 0 };
    let afternoon = count - morning - evening;

    std::iter::repeat(TimeOfDay::Morning)
        .take(morning)
        .chain(std::iter::repeat(TimeOfDay::Afternoon).take(afternoon))
        .chain(std::iter::repeat(TimeOfDay::Evening).take(evening))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::spot::Spot;
    use crate::services::spot_scoring::ScoreBreakdown;

    fn scored(id: &str, score: f32, crowd: u8, gem: bool) -> ScoredSpot {
        ScoredSpot {
            spot: Spot {
                id: id.to_string(),
                name: id.to_string(),
                description: String::new(),
                lat: 31.1,
                lng: 77.1,
                best_time: None,
                entry_fee: None,
                opening_hours: None,
                crowd_score: crowd,
                tags: Vec::new(),
                instagram_captions: Vec::new(),
                image_url: None,
                is_hidden_gem: gem,
            },
            score,
            score_breakdown: ScoreBreakdown::default(),
        }
    }

    fn ids(assignment: &DayAssignment) -> Vec<&str> {
        assignment.spots.iter().map(|s| s.spot.id.as_str()).collect()
    }

    #[test]
    fn test_arc_for_day() {
        assert_eq!(DayArc::for_day(1, 1), DayArc::Opening);
        assert_eq!(DayArc::for_day(2, 2), DayArc::Finale);
        assert_eq!(DayArc::for_day(2, 3), DayArc::HiddenGems);
        assert_eq!(DayArc::for_day(3, 5), DayArc::HiddenGems);
        assert_eq!(DayArc::for_day(2, 5), DayArc::Discovery);
        assert_eq!(DayArc::for_day(4, 5), DayArc::Discovery);
        assert_eq!(DayArc::for_day(5, 5), DayArc::Finale);
    }

    #[test]
    fn test_time_of_day_slots() {
        use TimeOfDay::*;
        assert!(time_of_day_slots(0).is_empty());
        assert_eq!(time_of_day_slots(1), vec![Morning]);
        assert_eq!(time_of_day_slots(2), vec![Morning, Evening]);
        assert_eq!(time_of_day_slots(3), vec![Morning, Afternoon, Evening]);
        assert_eq!(time_of_day_slots(4), vec![Morning, Morning, Afternoon, Evening]);
        assert_eq!(
            time_of_day_slots(5),
            vec![Morning, Morning, Afternoon, Afternoon, Evening]
        );
    }

    #[test]
    fn test_partition_never_repeats_spots() {
        let ranked: Vec<ScoredSpot> = (0..10)
            .map(|i| scored(&format!("s{}", i), 50.0 - i as f32, (i % 9 + 1) as u8, i % 4 == 0))
            .collect();
        let days = DayPartitioner::new(3).partition(ranked, 4);

        let mut seen = HashSet::new();
        for day in &days {
            assert!(day.spots.len() <= 3);
            for s in &day.spots {
                assert!(seen.insert(s.spot.id.clone()), "{} repeated", s.spot.id);
            }
        }
        assert_eq!(days.len(), 4);
    }

    #[test]
    fn test_partition_stops_when_pool_runs_out() {
        let ranked = vec![scored("a", 40.0, 3, false), scored("b", 30.0, 5, false)];
        let days = DayPartitioner::new(4).partition(ranked, 5);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].spots.len(), 1);
        assert_eq!(days[1].spots.len(), 1);
    }

    #[test]
    fn test_partition_empty_pool() {
        assert!(DayPartitioner::new(4).partition(Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_opening_defers_gems_and_midpoint_takes_them() {
        let ranked = vec![
            scored("gem-top", 60.0, 2, true),
            scored("popular", 55.0, 8, false),
            scored("solid", 50.0, 6, false),
            scored("quiet-gem", 45.0, 1, true),
            scored("calm", 40.0, 3, false),
            scored("plain", 35.0, 5, false),
        ];
        let days = DayPartitioner::new(2).partition(ranked, 3);

        assert_eq!(days[0].arc, DayArc::Opening);
        assert_eq!(ids(&days[0]), vec!["popular", "solid"]);
        assert_eq!(days[1].arc, DayArc::HiddenGems);
        assert_eq!(ids(&days[1]), vec!["quiet-gem", "gem-top"]);
        assert_eq!(days[2].arc, DayArc::Finale);
        assert_eq!(ids(&days[2]), vec!["calm", "plain"]);
    }

    #[test]
    fn test_candidate_pool_is_capped_by_capacity() {
        let ranked: Vec<ScoredSpot> = (0..20)
            .map(|i| scored(&format!("s{}", i), 100.0 - i as f32, 5, false))
            .collect();
        let days = DayPartitioner::new(3).partition(ranked, 2);
        let total: usize = days.iter().map(|d| d.spots.len()).sum();
        assert_eq!(total, 6);
        assert!(days
            .iter()
            .flat_map(|d| d.spots.iter())
            .all(|s| s.score > 94.0));
    }

    #[test]
    fn test_opening_takes_busy_spots_and_leaves_quiet_ones_for_finale() {
        let ranked = vec![
            scored("quiet-match", 90.0, 2, false),
            scored("gem", 80.0, 1, true),
            scored("landmark", 40.0, 9, false),
            scored("bazaar", 30.0, 8, false),
            scored("garden", 25.0, 3, false),
            scored("museum", 20.0, 4, false),
        ];
        let days = DayPartitioner::new(2).partition(ranked, 3);

        assert_eq!(ids(&days[0]), vec!["landmark", "bazaar"]);
        assert_eq!(ids(&days[1]), vec!["gem", "quiet-match"]);
        assert_eq!(ids(&days[2]), vec!["garden", "museum"]);

        let crowd = |d: &DayAssignment| d.spots.iter().map(|s| s.spot.crowd_score as u32).sum::<u32>();
        assert!(crowd(&days[2]) <= crowd(&days[0]));
    }
}
