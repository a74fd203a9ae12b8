mod carbon;
mod config;
mod route;
mod station;
mod waste;

pub use carbon::{CarbonFootprint, CarbonInputs, TransportMode};
pub use config::SimulationConfig;
pub use route::{MarkerIcon, Route, RouteDefinition, Waypoint};
pub use station::{Station, StationDirectory};
pub use waste::{ScheduleLookup, WasteSchedule, WasteSchedules};
