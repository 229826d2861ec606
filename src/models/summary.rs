use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BuildingSummary: Flattened building row for listings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingSummary {
    pub id: String,
    pub name: String,
    /// Japanese label of the primary asset type.
    #[serde(rename = "type")]
    pub type_label: String,
    /// Marker color of the primary asset type.
    pub type_color: String,
    pub acquisition_date: String,
    /// Latest cap rate. NaN when the dataset value does not parse.
    pub cap_rate: f64,
    /// Appraised price in hundred million yen (億円).
    pub evaluation_amount: f64,
    /// Occupancy of the latest snapshot, 0 when missing or unparsable.
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    CapRate,
    OccupancyRate,
    EvaluationAmount,
    AcquisitionDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

// ---------------------------------------------------------------------------
// BuildingStats: Dataset-level counts
// ---------------------------------------------------------------------------

/// Number of buildings with each asset type flag set.
///
/// A building with several flags counts once per flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeCounts {
    pub office: usize,
    pub retail: usize,
    pub hotel: usize,
    pub parking: usize,
    pub industrial: usize,
    pub logistic: usize,
    pub residential: usize,
    pub health_care: usize,
    pub other: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingStats {
    pub total_buildings: usize,
    pub asset_types: AssetTypeCounts,
    /// Mean cap rate over buildings with a parseable cap rate, formatted
    /// with two decimals. `None` when no building has one.
    pub average_cap_rate: Option<String>,
}

// ---------------------------------------------------------------------------
// SummaryStatistics: Aggregates over summary rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub count: usize,
    pub average_cap_rate: f64,
    pub average_occupancy_rate: f64,
    pub total_evaluation_amount: f64,
    pub min_cap_rate: f64,
    pub max_cap_rate: f64,
    pub min_occupancy_rate: f64,
    pub max_occupancy_rate: f64,
}

/// Inclusive min/max of a numeric field. Both zero for an empty input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}
