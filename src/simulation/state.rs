use crate::geometry::{interpolate, Coordinate};
use crate::models::Route;
use super::random::RandomSource;
use super::step::MotionProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Moving,
}

/// What the status panel shows for a train, by waypoint index into its route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainStatus {
    Approaching { waypoint: usize },
    Reached { waypoint: usize },
}

impl TrainStatus {
    /// Render the status line against the route's station names
    #[must_use]
    pub fn describe(self, route: &Route) -> String {
        match self {
            Self::Approaching { waypoint } => {
                format!("On Time | Approaching {}", route.waypoint(waypoint).name)
            }
            Self::Reached { waypoint } => format!("Reached {}", route.waypoint(waypoint).name),
        }
    }
}

/// Per-route simulation state
///
/// `segment_index` is always below the route's segment count and `progress`
/// stays in `[0, 1)`. `position` and `status` hold the last emitted values so
/// a stopped train keeps reporting where it arrived, including the final
/// station of a route whose next segment wraps back to the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub segment_index: usize,
    pub progress: f64,
    pub phase: Phase,
    pub stop_ticks_remaining: u32,
    pub position: Coordinate,
    pub status: TrainStatus,
}

impl SimulationState {
    /// Train leaving the first station of the route
    #[must_use]
    pub fn at_departure(route: &Route) -> Self {
        Self::moving_at(route, 0, 0.0)
    }

    /// Train part-way along a segment
    ///
    /// Out-of-range segments wrap onto the route and a progress outside
    /// `[0, 1)` restarts the segment.
    #[must_use]
    pub fn moving_at(route: &Route, segment_index: usize, progress: f64) -> Self {
        let segment_index = segment_index % route.segment_count();
        let progress = if (0.0..1.0).contains(&progress) { progress } else { 0.0 };
        let (start, end) = route.segment(segment_index);

        Self {
            segment_index,
            progress,
            phase: Phase::Moving,
            stop_ticks_remaining: 0,
            position: interpolate(start.coordinate(), end.coordinate(), progress),
            status: TrainStatus::Approaching { waypoint: segment_index + 1 },
        }
    }

    /// Train waiting at the start station of a segment
    #[must_use]
    pub fn stopped_at(route: &Route, segment_index: usize, ticks: u32) -> Self {
        if ticks == 0 {
            return Self::moving_at(route, segment_index, 0.0);
        }
        let segment_index = segment_index % route.segment_count();

        Self {
            segment_index,
            progress: 0.0,
            phase: Phase::Stopped,
            stop_ticks_remaining: ticks,
            position: route.waypoint(segment_index).coordinate(),
            status: TrainStatus::Reached { waypoint: segment_index },
        }
    }

    /// Random start so that routes sharing a timer do not move in lockstep
    ///
    /// Picks a segment uniformly, then a stagger in `0..=dwell_ticks`. A
    /// non-zero stagger starts the train dwelling at the segment's first
    /// station; zero starts it moving at a uniform progress.
    #[must_use]
    pub fn randomized<R: RandomSource + ?Sized>(
        route: &Route,
        profile: &MotionProfile,
        rng: &mut R,
    ) -> Self {
        let segment_index = rng.next_index(route.segment_count());
        let stagger_bound = usize::try_from(profile.dwell_ticks)
            .ok()
            .and_then(|dwell| dwell.checked_add(1))
            .unwrap_or(usize::MAX);
        let stagger = rng.next_index(stagger_bound);

        if stagger > 0 {
            let ticks = u32::try_from(stagger).unwrap_or(profile.dwell_ticks);
            Self::stopped_at(route, segment_index, ticks)
        } else {
            Self::moving_at(route, segment_index, rng.next_unit())
        }
    }
}
