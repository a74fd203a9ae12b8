use std::collections::HashSet;
use crate::models::{Route, RouteDefinition, SimulationConfig, StationDirectory, WasteSchedules};

const METRO_ROUTES_JSON: &str = include_str!("../assets/metro_routes.json");
const MAJOR_STATIONS_CSV: &str = include_str!("../assets/major_stations.csv");
const WASTE_SCHEDULES_CSV: &str = include_str!("../assets/waste_schedules.csv");
const SIMULATION_CONFIG_JSON: &str = include_str!("../assets/simulation.json");

/// Delhi metro lines bundled with the app
///
/// # Errors
///
/// Returns an error if the bundled route file is invalid
pub fn default_routes() -> Result<Vec<Route>, String> {
    load_routes(METRO_ROUTES_JSON)
}

/// Major railway stations bundled with the app
///
/// # Errors
///
/// Returns an error if the bundled station file is invalid
pub fn major_stations() -> Result<StationDirectory, String> {
    StationDirectory::from_csv(MAJOR_STATIONS_CSV)
}

/// Neighborhood waste collection schedules bundled with the app
///
/// # Errors
///
/// Returns an error if the bundled schedule file is invalid
pub fn waste_schedules() -> Result<WasteSchedules, String> {
    WasteSchedules::from_csv(WASTE_SCHEDULES_CSV)
}

/// Simulation settings bundled with the app
///
/// # Errors
///
/// Returns an error if the bundled config file is invalid
pub fn default_config() -> Result<SimulationConfig, String> {
    SimulationConfig::from_json(SIMULATION_CONFIG_JSON)
}

/// Parse a JSON array of route definitions into validated routes
///
/// # Errors
///
/// Returns an error if:
/// - The JSON does not match the route definition schema
/// - Any route fails validation (see [`Route::new`])
/// - Two routes share an id
pub fn load_routes(json: &str) -> Result<Vec<Route>, String> {
    let definitions: Vec<RouteDefinition> = serde_json::from_str(json)
        .map_err(|e| format!("Failed to parse routes: {e}"))?;

    let mut seen = HashSet::new();
    definitions
        .into_iter()
        .map(|def| {
            if !seen.insert(def.id.clone()) {
                return Err(format!("Duplicate route id '{}'", def.id));
            }
            Route::from_definition(def)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_routes_are_valid() {
        let routes = default_routes().expect("bundled routes parse");
        assert_eq!(routes.len(), 4);
        assert!(routes.iter().all(|r| r.waypoints().len() >= 2));
        let ids: Vec<_> = routes.iter().map(Route::id).collect();
        assert_eq!(ids, vec!["yellow", "blue", "red", "violet"]);
    }

    #[test]
    fn test_bundled_stations() {
        let stations = major_stations().expect("bundled stations parse");
        assert_eq!(stations.len(), 13);
        let ndls = stations.lookup("NDLS").expect("New Delhi present");
        assert_eq!(ndls.name, "New Delhi");
        assert_eq!(ndls.lat, 28.6448);
    }

    #[test]
    fn test_bundled_waste_schedules() {
        let schedules = waste_schedules().expect("bundled schedules parse");
        assert_eq!(schedules.len(), 10);
        assert!(schedules.lookup("connaught place").message().is_none());
    }

    #[test]
    fn test_bundled_config() {
        let config = default_config().expect("bundled config parses");
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.dwell_ticks, 40);
    }

    #[test]
    fn test_load_routes_rejects_short_route() {
        let json = r#"[{"id": "a", "name": "A", "color": "red",
            "waypoints": [{"name": "Only", "lat": 1.0, "lng": 2.0}]}]"#;
        let err = load_routes(json).expect_err("single waypoint");
        assert!(err.contains("at least 2 waypoints"));
    }

    #[test]
    fn test_load_routes_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "name": "A", "color": "red", "waypoints": [
                {"name": "X", "lat": 1.0, "lng": 2.0}, {"name": "Y", "lat": 1.5, "lng": 2.5}]},
            {"id": "a", "name": "A2", "color": "blue", "waypoints": [
                {"name": "X", "lat": 1.0, "lng": 2.0}, {"name": "Y", "lat": 1.5, "lng": 2.5}]}
        ]"#;
        let err = load_routes(json).expect_err("duplicate id");
        assert_eq!(err, "Duplicate route id 'a'");
    }

    #[test]
    fn test_load_routes_keeps_hex_colors() {
        let json = r##"[
            {"id": "yellow", "name": "Yellow", "color": "#ffd500", "waypoints": [
                {"name": "Samaypur Badli", "lat": 28.7446, "lng": 77.1383},
                {"name": "Jahangirpuri", "lat": 28.7259, "lng": 77.1626}]},
            {"id": "blue", "name": "Blue", "color": "#0070c0", "waypoints": [
                {"name": "Dwarka Sector 21", "lat": 28.5523, "lng": 77.0583},
                {"name": "Janakpuri West", "lat": 28.6295, "lng": 77.0780}]}
        ]"##;
        let routes = load_routes(json).expect("hex colors are valid");
        let colors: Vec<_> = routes.iter().map(Route::color).collect();
        assert_eq!(colors, vec!["#ffd500", "#0070c0"]);
    }

    #[test]
    fn test_load_routes_rejects_malformed_json() {
        let err = load_routes(r#"[{"id": "a"}]"#).expect_err("missing fields");
        assert!(err.starts_with("Failed to parse routes"));
    }

    #[test]
    fn test_load_routes_empty_list() {
        assert!(load_routes("[]").expect("empty list is fine").is_empty());
    }
}
