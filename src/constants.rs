use crate::geometry::Coordinate;

/// Default tick period of the train simulation in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 50;

/// Default train speed in route segments per second
pub const DEFAULT_SPEED: f64 = 0.1;

/// Default number of ticks a train waits at each station
pub const DEFAULT_DWELL_TICKS: u32 = 40;

/// Map centre used before any route is loaded (New Delhi)
pub const DELHI_CENTER: Coordinate = Coordinate::new(28.6139, 77.2090);

/// Grid electricity emission factor for India, kg CO₂e per kWh
pub const ELECTRICITY_FACTOR_KG_PER_KWH: f64 = 0.8;

/// Commute days counted per month by the carbon calculator
pub const COMMUTE_DAYS_PER_MONTH: f64 = 30.0;
