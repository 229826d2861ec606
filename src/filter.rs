//! Predicate builder for filtering building records in memory.
//!
//! Conditions are evaluated in the order they were added and evaluation
//! stops at the first failing one. Builder methods return `&mut Self` for
//! chaining.
//!
//! # Example
//!
//! ```rust
//! use jreit_sdk::filter::{BuildingFilter, NumericField};
//!
//! let mut filter = BuildingFilter::new();
//! filter
//!     .where_text("tokyo")
//!     .where_gte(NumericField::CapRate, 4.0)
//!     .where_lte(NumericField::CapRate, 5.0);
//! assert_eq!(filter.len(), 3);
//! ```

use crate::currency::yen_to_million_yen;
use crate::models::{BuildingRecord, FilteredResult, SearchParams};
use crate::validation::{parse_numeric, parse_numeric_or_nan};

/// A numeric property of a building that range conditions compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// Occupancy of the latest financial snapshot, percent.
    OccupancyRate,
    /// Appraised price converted to million yen.
    AppraisedPriceMillionYen,
    /// Latest cap rate, percent.
    CapRate,
}

impl NumericField {
    /// The field's value for `record`.
    ///
    /// `None` means the condition does not apply to this record: a building
    /// without financial snapshots is not constrained by occupancy bounds.
    /// Values that fail to parse come back as NaN and fail every bound.
    pub fn measure(self, record: &BuildingRecord) -> Option<f64> {
        match self {
            NumericField::OccupancyRate => record.occupancy_rate().map(parse_numeric_or_nan),
            NumericField::AppraisedPriceMillionYen => {
                Some(yen_to_million_yen(record.appraised_price() as f64))
            }
            NumericField::CapRate => Some(parse_numeric_or_nan(record.cap_rate())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Condition {
    /// Lower-cased needle matched against lower-cased name or address.
    Text(String),
    AtLeast(NumericField, f64),
    AtMost(NumericField, f64),
}

impl Condition {
    fn matches(&self, record: &BuildingRecord) -> bool {
        match self {
            Condition::Text(needle) => {
                record.name().to_lowercase().contains(needle.as_str())
                    || record.address().to_lowercase().contains(needle.as_str())
            }
            Condition::AtLeast(field, bound) => match field.measure(record) {
                None => true,
                Some(v) => !v.is_nan() && v >= *bound,
            },
            Condition::AtMost(field, bound) => match field.measure(record) {
                None => true,
                Some(v) => !v.is_nan() && v <= *bound,
            },
        }
    }
}

/// Builds a composite predicate over [`BuildingRecord`]s.
///
/// An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingFilter {
    conditions: Vec<Condition>,
}

impl BuildingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the filter for sanitized search parameters.
    ///
    /// Conditions are added text first, then occupancy, price and cap rate,
    /// each as min then max. Bounds that do not parse are skipped.
    pub fn from_params(params: &SearchParams) -> Self {
        let mut filter = Self::new();

        if let Some(q) = params.q.as_deref() {
            filter.where_text(q);
        }

        let ranges = [
            (NumericField::OccupancyRate, &params.min_yield, &params.max_yield),
            (NumericField::AppraisedPriceMillionYen, &params.min_price, &params.max_price),
            (NumericField::CapRate, &params.min_cap, &params.max_cap),
        ];
        for (field, min, max) in ranges {
            if let Some(v) = min.as_deref().and_then(parse_numeric) {
                filter.where_gte(field, v);
            }
            if let Some(v) = max.as_deref().and_then(parse_numeric) {
                filter.where_lte(field, v);
            }
        }

        filter
    }

    /// Case-insensitive substring match on name or address.
    ///
    /// Lower-casing is plain Unicode lower-casing: full-width and half-width
    /// forms of the same character do not match each other. An empty needle
    /// adds no condition.
    pub fn where_text(&mut self, needle: &str) -> &mut Self {
        if !needle.is_empty() {
            self.conditions.push(Condition::Text(needle.to_lowercase()));
        }
        self
    }

    /// Inclusive lower bound: `field >= value`.
    pub fn where_gte(&mut self, field: NumericField, value: f64) -> &mut Self {
        self.conditions.push(Condition::AtLeast(field, value));
        self
    }

    /// Inclusive upper bound: `field <= value`.
    pub fn where_lte(&mut self, field: NumericField, value: f64) -> &mut Self {
        self.conditions.push(Condition::AtMost(field, value));
        self
    }

    /// Both bounds at once.
    pub fn where_between(&mut self, field: NumericField, min: f64, max: f64) -> &mut Self {
        self.where_gte(field, min).where_lte(field, max)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether `record` satisfies every condition.
    pub fn matches(&self, record: &BuildingRecord) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }

    /// Matching records, in input order.
    pub fn apply<'a>(&self, records: &'a [BuildingRecord]) -> Vec<&'a BuildingRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Filter `records` by sanitized search parameters.
///
/// Records whose own numeric fields do not parse simply fail the affected
/// bounds; the batch is never aborted.
pub fn filter_buildings<'a>(
    records: &'a [BuildingRecord],
    params: &SearchParams,
) -> FilteredResult<'a> {
    let results = BuildingFilter::from_params(params).apply(records);
    log::debug!(
        "Search matched {} of {} buildings",
        results.len(),
        records.len()
    );
    FilteredResult {
        count: results.len(),
        results,
        filters: params.clone(),
    }
}
