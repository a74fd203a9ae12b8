use serde::{Deserialize, Serialize};
use crate::geometry::Coordinate;

const MARKER_OUTLINE_COLOR: &str = "#fff";

/// A named stop along a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self { name: name.into(), lat, lng }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Glyph drawn for a route's train marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub glyph: char,
    pub fill: String,
    pub outline: &'static str,
}

/// Raw route definition as it appears in configuration files
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDefinition {
    pub id: String,
    pub name: String,
    pub color: String,
    pub waypoints: Vec<Waypoint>,
}

/// An immutable simulated transit line
///
/// A route always has at least two waypoints, so every segment index in
/// `0..segment_count()` resolves to a pair of consecutive waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: String,
    name: String,
    color: String,
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Build a route, validating its waypoints
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is empty
    /// - Fewer than two waypoints are given
    /// - A waypoint has a non-finite coordinate
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        waypoints: Vec<Waypoint>,
    ) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Route id must not be empty".to_string());
        }
        if waypoints.len() < 2 {
            return Err(format!(
                "Route '{id}' needs at least 2 waypoints, found {}",
                waypoints.len()
            ));
        }
        if let Some(bad) = waypoints.iter().find(|w| !w.coordinate().is_finite()) {
            return Err(format!("Route '{id}' has an invalid coordinate at '{}'", bad.name));
        }

        Ok(Self {
            id,
            name: name.into(),
            color: color.into(),
            waypoints,
        })
    }

    /// Validate a deserialized definition into a route
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Route::new`].
    pub fn from_definition(def: RouteDefinition) -> Result<Self, String> {
        Self::new(def.id, def.name, def.color, def.waypoints)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of traversable segments (`waypoints - 1`, never zero)
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Start and end waypoint of a segment, wrapping out-of-range indices
    #[must_use]
    pub fn segment(&self, index: usize) -> (&Waypoint, &Waypoint) {
        let index = index % self.segment_count();
        (&self.waypoints[index], &self.waypoints[index + 1])
    }

    #[must_use]
    pub fn waypoint(&self, index: usize) -> &Waypoint {
        &self.waypoints[index % self.waypoints.len()]
    }

    /// Marker icon derived from the route color and the first letter of its name
    #[must_use]
    pub fn marker_icon(&self) -> MarkerIcon {
        let glyph = self
            .name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map_or('•', |c| c.to_ascii_uppercase());

        MarkerIcon {
            glyph,
            fill: self.color.clone(),
            outline: MARKER_OUTLINE_COLOR,
        }
    }

    /// Polyline of the route in waypoint order
    pub fn polyline(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.waypoints.iter().map(Waypoint::coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Waypoint> {
        vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 1.0, 1.0),
            Waypoint::new("C", 2.0, 0.0),
        ]
    }

    #[test]
    fn test_new_valid_route() {
        let route = Route::new("yellow", "Yellow", "#ffd500", abc()).expect("valid route");
        assert_eq!(route.id(), "yellow");
        assert_eq!(route.segment_count(), 2);
        assert_eq!(route.polyline().count(), 3);
    }

    #[test]
    fn test_new_rejects_single_waypoint() {
        let result = Route::new("x", "X", "red", vec![Waypoint::new("A", 0.0, 0.0)]);
        let err = result.expect_err("one waypoint is not a route");
        assert!(err.contains("at least 2 waypoints"));
    }

    #[test]
    fn test_new_rejects_empty_id() {
        assert!(Route::new("  ", "X", "red", abc()).is_err());
    }

    #[test]
    fn test_new_rejects_nan_coordinate() {
        let mut waypoints = abc();
        waypoints[1].lat = f64::NAN;
        let err = Route::new("x", "X", "red", waypoints).expect_err("NaN is invalid");
        assert!(err.contains("'B'"));
    }

    #[test]
    fn test_segment_pairs() {
        let route = Route::new("x", "X", "red", abc()).expect("valid route");
        let (start, end) = route.segment(1);
        assert_eq!(start.name, "B");
        assert_eq!(end.name, "C");
        // Out-of-range indices wrap onto the loop
        let (start, end) = route.segment(2);
        assert_eq!(start.name, "A");
        assert_eq!(end.name, "B");
    }

    #[test]
    fn test_marker_icon() {
        let route = Route::new("blue", "blue line", "#0070c0", abc()).expect("valid route");
        let icon = route.marker_icon();
        assert_eq!(icon.glyph, 'B');
        assert_eq!(icon.fill, "#0070c0");
        assert_eq!(icon.outline, "#fff");
    }

    #[test]
    fn test_from_definition_json() {
        let json = r##"{
            "id": "red",
            "name": "Red",
            "color": "#e21f26",
            "waypoints": [
                {"name": "Rithala", "lat": 28.7208, "lng": 77.1070},
                {"name": "Netaji Subhash Place", "lat": 28.6961, "lng": 77.1526}
            ]
        }"##;
        let def: RouteDefinition = serde_json::from_str(json).expect("valid json");
        let route = Route::from_definition(def).expect("valid route");
        assert_eq!(route.waypoint(1).name, "Netaji Subhash Place");
        assert_eq!(route.color(), "#e21f26");
        assert_eq!(route.marker_icon().fill, "#e21f26");
    }
}
