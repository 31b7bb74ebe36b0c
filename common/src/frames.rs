//! Frame (category) configuration for the taxi index.

use serde::{Deserialize, Serialize};

pub const INDEX_NAME: &str = "taxi";

pub const CAB_TYPE: &str = "cab_type";
pub const PASSENGER_COUNT: &str = "passenger_count";
pub const TOTAL_AMOUNT_DOLLARS: &str = "total_amount_dollars";
pub const PICKUP_YEAR: &str = "pickup_year";
pub const PICKUP_MONTH: &str = "pickup_month";
pub const PICKUP_DAY: &str = "pickup_day";
pub const DIST_MILES: &str = "dist_miles";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct FrameSpec {
    pub name: String,
    pub label: String,
}

impl FrameSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { name: name.into(), label: label.into() }
    }
}

/// Ordered list of frames offered for selection.
///
/// The order only drives the textual layout of generated queries, so two
/// configs holding the same frames in a different order produce queries with
/// the same meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FrameConfig {
    frames: Vec<FrameSpec>,
}

impl FrameConfig {
    pub fn new(frames: Vec<FrameSpec>) -> Self {
        Self { frames }
    }

    pub fn taxi_default() -> Self {
        let frames = [
            (CAB_TYPE, "Cab type"),
            (PICKUP_YEAR, "Pickup year"),
            (PICKUP_MONTH, "Pickup month"),
            (PICKUP_DAY, "Pickup day"),
            ("pickup_time", "Pickup time"),
            (DIST_MILES, "Distance (miles)"),
            ("duration_minutes", "Duration (minutes)"),
            ("speed_mph", "Speed (mph)"),
            (PASSENGER_COUNT, "Passenger count"),
            (TOTAL_AMOUNT_DOLLARS, "Total amount ($)"),
            ("weather_condition", "Weather condition"),
            ("temp_f", "Temperature (F)"),
            ("precipitation_inches", "Precipitation (in)"),
            ("pressure_i", "Pressure"),
            ("humidity", "Humidity"),
            ("pickup_elevation", "Pickup elevation"),
            ("drop_elevation", "Drop elevation"),
        ];
        Self::new(frames.into_iter().map(|(name, label)| FrameSpec::new(name, label)).collect())
    }

    pub fn frames(&self) -> &[FrameSpec] {
        &self.frames
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.iter().any(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxi_default_starts_with_cab_type() {
        let config = FrameConfig::taxi_default();
        assert_eq!(config.len(), 17);
        assert_eq!(config.frames()[0].name, CAB_TYPE);
        assert!(config.contains(PASSENGER_COUNT));
        assert!(!config.contains("drop_grid_id"));
    }
}
