use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::geometry::Coordinate;

/// A railway station with a known location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Station {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Stations keyed by upper-case station code, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationDirectory {
    stations: IndexMap<String, Station>,
}

impl StationDirectory {
    /// Parse stations from CSV with a `code,name,lat,lng` header
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be deserialized or a code repeats
    pub fn from_csv(csv_content: &str) -> Result<Self, String> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv_content.as_bytes());

        let mut stations = IndexMap::new();
        for (row, record) in reader.deserialize::<Station>().enumerate() {
            let mut station = record.map_err(|e| format!("Invalid station on row {}: {e}", row + 1))?;
            station.code = station.code.to_uppercase();
            if stations.contains_key(&station.code) {
                return Err(format!("Duplicate station code '{}'", station.code));
            }
            stations.insert(station.code.clone(), station);
        }

        Ok(Self { stations })
    }

    /// Case-insensitive lookup by station code
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&Station> {
        self.stations.get(&code.trim().to_uppercase())
    }

    /// Stations whose code or name contains the query, case-insensitively
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Station> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.stations.values().collect();
        }
        self.stations
            .values()
            .filter(|s| s.code.to_lowercase().contains(&query) || s.name.to_lowercase().contains(&query))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }
}
