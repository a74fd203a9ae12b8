use indexmap::IndexMap;
use serde::Deserialize;

/// Collection days for one neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WasteSchedule {
    pub neighborhood: String,
    pub general: String,
    pub recycling: String,
}

/// Outcome of a neighborhood search, with the text the widget shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleLookup {
    EmptyQuery,
    Found { query: String, schedule: WasteSchedule },
    NotFound { query: String },
}

impl ScheduleLookup {
    /// Message for the non-matching outcomes
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::EmptyQuery => Some("Please enter a neighborhood.".to_string()),
            Self::NotFound { query } => Some(format!("Sorry, no schedule available for \"{query}\".")),
            Self::Found { .. } => None,
        }
    }
}

/// Waste collection schedules keyed by lower-case neighborhood name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasteSchedules {
    schedules: IndexMap<String, WasteSchedule>,
}

impl WasteSchedules {
    /// Parse schedules from CSV with a `neighborhood,general,recycling` header
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be deserialized, a neighborhood is
    /// blank, or a neighborhood repeats
    pub fn from_csv(csv_content: &str) -> Result<Self, String> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv_content.as_bytes());

        let mut schedules = IndexMap::new();
        for (row, record) in reader.deserialize::<WasteSchedule>().enumerate() {
            let schedule = record.map_err(|e| format!("Invalid waste schedule on row {}: {e}", row + 1))?;
            let key = schedule.neighborhood.to_lowercase();
            if key.is_empty() {
                return Err(format!("Missing neighborhood on row {}", row + 1));
            }
            if schedules.contains_key(&key) {
                return Err(format!("Duplicate neighborhood '{}'", schedule.neighborhood));
            }
            schedules.insert(key, schedule);
        }

        Ok(Self { schedules })
    }

    /// Case-insensitive lookup of a neighborhood as typed by the user
    #[must_use]
    pub fn lookup(&self, query: &str) -> ScheduleLookup {
        let query = query.trim();
        if query.is_empty() {
            return ScheduleLookup::EmptyQuery;
        }
        match self.schedules.get(&query.to_lowercase()) {
            Some(schedule) => ScheduleLookup::Found {
                query: query.to_string(),
                schedule: schedule.clone(),
            },
            None => ScheduleLookup::NotFound { query: query.to_string() },
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn neighborhoods(&self) -> impl Iterator<Item = &str> {
        self.schedules.values().map(|s| s.neighborhood.as_str())
    }
}
