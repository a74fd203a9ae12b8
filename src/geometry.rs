use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Linearly interpolates between two coordinates.
///
/// Each component is computed as `start + (end - start) * progress`, so a
/// progress of 0.0 yields `start` and 1.0 yields `end` exactly.
///
/// # Examples
/// ```
/// use ecocitty_connect::geometry::{interpolate, Coordinate};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(10.0, 20.0);
/// let mid = interpolate(a, b, 0.5);
/// assert!((mid.lat - 5.0).abs() < 1e-10);
/// assert!((mid.lng - 10.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn interpolate(start: Coordinate, end: Coordinate, progress: f64) -> Coordinate {
    Coordinate {
        lat: start.lat + (end.lat - start.lat) * progress,
        lng: start.lng + (end.lng - start.lng) * progress,
    }
}

/// Axis-aligned bounding box over a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Computes the bounds of all coordinates, or `None` for an empty iterator
    pub fn from_coordinates(coords: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        coords.into_iter().fold(None, |acc, c| {
            Some(match acc {
                None => Self { min_lat: c.lat, max_lat: c.lat, min_lng: c.lng, max_lng: c.lng },
                Some(b) => Self {
                    min_lat: b.min_lat.min(c.lat),
                    max_lat: b.max_lat.max(c.lat),
                    min_lng: b.min_lng.min(c.lng),
                    max_lng: b.max_lng.max(c.lng),
                },
            })
        })
    }

    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Maps geographic coordinates onto a canvas of the given size.
///
/// Keeps the aspect ratio of the bounds (longitude on x, latitude on y with
/// north up) and centres the result inside `padding` pixels on every side.
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    bounds: Bounds,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl MapProjection {
    #[must_use]
    pub fn fit(bounds: Bounds, width: f64, height: f64, padding: f64) -> Self {
        let usable_width = (width - 2.0 * padding).max(1.0);
        let usable_height = (height - 2.0 * padding).max(1.0);

        // A degenerate box (single point or a straight line) still needs a finite scale
        let span_lng = (bounds.max_lng - bounds.min_lng).max(1e-9);
        let span_lat = (bounds.max_lat - bounds.min_lat).max(1e-9);

        let scale = (usable_width / span_lng).min(usable_height / span_lat);
        let offset_x = padding + (usable_width - span_lng * scale) / 2.0;
        let offset_y = padding + (usable_height - span_lat * scale) / 2.0;

        Self { bounds, scale, offset_x, offset_y }
    }

    /// Project a coordinate to canvas pixels `(x, y)`
    #[must_use]
    pub fn project(&self, coord: Coordinate) -> (f64, f64) {
        let x = self.offset_x + (coord.lng - self.bounds.min_lng) * self.scale;
        let y = self.offset_y + (self.bounds.max_lat - coord.lat) * self.scale;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_interpolate_endpoints_are_exact() {
        let a = Coordinate::new(28.6139, 77.2090);
        let b = Coordinate::new(28.7041, 77.1025);
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0).lat, b.lat);
        assert_eq!(interpolate(a, b, 1.0).lng, b.lng);
    }

    #[test]
    fn test_interpolate_matches_component_formula() {
        let a = Coordinate::new(28.5, 77.0);
        let b = Coordinate::new(28.9, 77.4);
        for step in 0..10 {
            let p = f64::from(step) / 10.0;
            let c = interpolate(a, b, p);
            assert!((c.lat - (a.lat + (b.lat - a.lat) * p)).abs() < EPSILON);
            assert!((c.lng - (a.lng + (b.lng - a.lng) * p)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_coordinates(Vec::new()).is_none());
    }

    #[test]
    fn test_bounds_and_center() {
        let bounds = Bounds::from_coordinates(vec![
            Coordinate::new(1.0, 5.0),
            Coordinate::new(3.0, 2.0),
            Coordinate::new(2.0, 9.0),
        ])
        .expect("non-empty");
        assert_eq!(bounds.min_lat, 1.0);
        assert_eq!(bounds.max_lat, 3.0);
        assert_eq!(bounds.min_lng, 2.0);
        assert_eq!(bounds.max_lng, 9.0);
        assert_eq!(bounds.center(), Coordinate::new(2.0, 5.5));
    }

    #[test]
    fn test_projection_puts_north_up() {
        let bounds = Bounds { min_lat: 0.0, max_lat: 10.0, min_lng: 0.0, max_lng: 10.0 };
        let projection = MapProjection::fit(bounds, 120.0, 120.0, 10.0);

        let (x_nw, y_nw) = projection.project(Coordinate::new(10.0, 0.0));
        let (x_se, y_se) = projection.project(Coordinate::new(0.0, 10.0));
        assert!((x_nw - 10.0).abs() < EPSILON);
        assert!((y_nw - 10.0).abs() < EPSILON);
        assert!((x_se - 110.0).abs() < EPSILON);
        assert!((y_se - 110.0).abs() < EPSILON);
    }

    #[test]
    fn test_projection_centres_narrow_bounds() {
        // Twice as tall as wide: horizontal slack is split evenly
        let bounds = Bounds { min_lat: 0.0, max_lat: 2.0, min_lng: 0.0, max_lng: 1.0 };
        let projection = MapProjection::fit(bounds, 100.0, 100.0, 0.0);
        let (x_left, _) = projection.project(Coordinate::new(0.0, 0.0));
        let (x_right, _) = projection.project(Coordinate::new(0.0, 1.0));
        assert!((x_left - 25.0).abs() < EPSILON);
        assert!((x_right - 75.0).abs() < EPSILON);
    }

    #[test]
    fn test_projection_handles_single_point() {
        let bounds = Bounds::from_coordinates(vec![Coordinate::new(28.6, 77.2)]).expect("non-empty");
        let projection = MapProjection::fit(bounds, 200.0, 100.0, 10.0);
        let (x, y) = projection.project(Coordinate::new(28.6, 77.2));
        assert!(x.is_finite());
        assert!(y.is_finite());
    }
}
