//! The canned "predefined" reports offered by the demo.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub enum PredefinedQuery {
    CabTypeCounts,
    AvgCostPerPassengerCount,
    YearPassengerCounts,
    YearPassengerDistanceCounts,
    MonthDayHeatMap,
}

impl PredefinedQuery {
    pub const ALL: [PredefinedQuery; 5] = [
        PredefinedQuery::CabTypeCounts,
        PredefinedQuery::AvgCostPerPassengerCount,
        PredefinedQuery::YearPassengerCounts,
        PredefinedQuery::YearPassengerDistanceCounts,
        PredefinedQuery::MonthDayHeatMap,
    ];

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id).checked_sub(1)?).copied()
    }

    /// 1-based id used in `predefined/<id>`.
    pub fn id(self) -> u8 {
        match self {
            Self::CabTypeCounts => 1,
            Self::AvgCostPerPassengerCount => 2,
            Self::YearPassengerCounts => 3,
            Self::YearPassengerDistanceCounts => 4,
            Self::MonthDayHeatMap => 5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CabTypeCounts => "Profile count by cab_type (Mark #1)",
            Self::AvgCostPerPassengerCount => "Average total_amount by passenger_count (Mark #2)",
            Self::YearPassengerCounts => "Profile count by (year, passenger_count) (Mark #3)",
            Self::YearPassengerDistanceCounts => {
                "Profile count by (year, passenger_count, trip_distance), ordered by (year, count) (Mark #4)"
            }
            Self::MonthDayHeatMap => "Profile count by (pickup_month, pickup_day) (Mark #5)",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Self::CabTypeCounts => "Cab types",
            Self::AvgCostPerPassengerCount => "Cost per passenger",
            Self::YearPassengerCounts => "Year x passengers",
            Self::YearPassengerDistanceCounts => "Year x passengers x distance",
            Self::MonthDayHeatMap => "Month x day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for query in PredefinedQuery::ALL {
            assert_eq!(PredefinedQuery::from_id(query.id()), Some(query));
        }
        assert_eq!(PredefinedQuery::from_id(0), None);
        assert_eq!(PredefinedQuery::from_id(6), None);
    }
}
