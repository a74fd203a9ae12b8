use crate::geometry::Coordinate;
use crate::models::{MarkerIcon, Route, SimulationConfig};
use super::random::{clock_seed, seeded, RandomSource};
use super::state::{Phase, SimulationState};
use super::step::{step, MotionProfile};

/// What the rendering layer receives for one route on one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub route_id: String,
    pub route_name: String,
    pub icon: MarkerIcon,
    pub position: Coordinate,
    pub phase: Phase,
    pub status: String,
}

/// Owns a route and its simulation state
#[derive(Debug, Clone)]
pub struct RouteController {
    route: Route,
    state: SimulationState,
}

impl RouteController {
    #[must_use]
    pub const fn new(route: Route, state: SimulationState) -> Self {
        Self { route, state }
    }

    #[must_use]
    pub fn randomized<R: RandomSource + ?Sized>(route: Route, profile: &MotionProfile, rng: &mut R) -> Self {
        let state = SimulationState::randomized(&route, profile, rng);
        Self { route, state }
    }

    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Advance one tick and report the new marker position and status
    pub fn tick(&mut self, profile: &MotionProfile) -> TickOutput {
        self.state = step(&self.state, &self.route, profile);
        self.output()
    }

    /// Current output without advancing
    #[must_use]
    pub fn output(&self) -> TickOutput {
        TickOutput {
            route_id: self.route.id().to_string(),
            route_name: self.route.name().to_string(),
            icon: self.route.marker_icon(),
            position: self.state.position,
            phase: self.state.phase,
            status: self.state.status.describe(&self.route),
        }
    }
}

/// Every route controller driven by one timer
#[derive(Debug, Clone)]
pub struct Fleet {
    controllers: Vec<RouteController>,
    profile: MotionProfile,
    ticks: u64,
}

impl Fleet {
    /// Create a fleet with randomized, independent start states
    #[must_use]
    pub fn new<R: RandomSource + ?Sized>(routes: Vec<Route>, profile: MotionProfile, rng: &mut R) -> Self {
        let controllers = routes
            .into_iter()
            .map(|route| RouteController::randomized(route, &profile, &mut *rng))
            .collect();

        Self { controllers, profile, ticks: 0 }
    }

    /// Create a fleet from configuration, seeding from the clock unless a seed is set
    #[must_use]
    pub fn from_config(routes: Vec<Route>, config: &SimulationConfig) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Self::new(routes, config.motion_profile(), &mut seeded(seed))
    }

    /// Create a fleet from explicit controllers
    #[must_use]
    pub const fn with_controllers(controllers: Vec<RouteController>, profile: MotionProfile) -> Self {
        Self { controllers, profile, ticks: 0 }
    }

    /// Advance every route once
    pub fn tick_all(&mut self) -> Vec<TickOutput> {
        self.ticks += 1;
        let profile = self.profile;
        self.controllers.iter_mut().map(|c| c.tick(&profile)).collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<TickOutput> {
        self.controllers.iter().map(RouteController::output).collect()
    }

    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub const fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    #[must_use]
    pub fn controllers(&self) -> &[RouteController] {
        &self.controllers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
