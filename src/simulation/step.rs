use crate::geometry::interpolate;
use crate::models::Route;
use super::state::{Phase, SimulationState, TrainStatus};

/// Per-tick motion parameters shared by every route of a fleet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// Fraction of a segment covered each tick while moving
    pub progress_per_tick: f64,
    /// Ticks spent stopped after each arrival
    pub dwell_ticks: u32,
}

/// Advance a route's state by one tick
///
/// Stopped trains count down their dwell and hold position; the tick that
/// reaches zero switches them back to moving. Moving trains advance along
/// the current segment and, on completing it, snap to the arrived waypoint
/// and start dwelling there. The segment index wraps modulo the segment
/// count so routes loop forever in one direction.
#[must_use]
pub fn step(state: &SimulationState, route: &Route, profile: &MotionProfile) -> SimulationState {
    match state.phase {
        Phase::Stopped => {
            let remaining = state.stop_ticks_remaining.saturating_sub(1);
            SimulationState {
                stop_ticks_remaining: remaining,
                phase: if remaining == 0 { Phase::Moving } else { Phase::Stopped },
                ..*state
            }
        }
        Phase::Moving => advance(state, route, profile),
    }
}

fn advance(state: &SimulationState, route: &Route, profile: &MotionProfile) -> SimulationState {
    let segment_count = route.segment_count();
    let segment_index = state.segment_index % segment_count;
    let progress = state.progress + profile.progress_per_tick;

    if progress >= 1.0 {
        let arrived = segment_index + 1;
        let (phase, stop_ticks_remaining) = if profile.dwell_ticks == 0 {
            (Phase::Moving, 0)
        } else {
            (Phase::Stopped, profile.dwell_ticks)
        };

        return SimulationState {
            segment_index: arrived % segment_count,
            progress: 0.0,
            phase,
            stop_ticks_remaining,
            position: route.waypoint(arrived).coordinate(),
            status: TrainStatus::Reached { waypoint: arrived },
        };
    }

    let (start, end) = route.segment(segment_index);
    SimulationState {
        segment_index,
        progress,
        phase: Phase::Moving,
        stop_ticks_remaining: 0,
        position: interpolate(start.coordinate(), end.coordinate(), progress),
        status: TrainStatus::Approaching { waypoint: segment_index + 1 },
    }
}
