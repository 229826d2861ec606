use serde::{Deserialize, Serialize};

use super::building::BuildingRecord;

// ---------------------------------------------------------------------------
// SearchParams: Sanitized search parameters
// ---------------------------------------------------------------------------

/// Search parameters after sanitization.
///
/// All fields are optional. When `None`, the corresponding filter is skipped.
/// Numeric bounds are kept as the trimmed strings the caller supplied so the
/// result can echo them back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Minimum occupancy rate, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_yield: Option<String>,
    /// Maximum occupancy rate, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_yield: Option<String>,
    /// Minimum appraised price, million yen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    /// Maximum appraised price, million yen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    /// Minimum cap rate, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cap: Option<String>,
    /// Maximum cap rate, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cap: Option<String>,
}

impl SearchParams {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.q.is_none()
            && self.min_yield.is_none()
            && self.max_yield.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_cap.is_none()
            && self.max_cap.is_none()
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Outcome of validating raw search parameters.
///
/// Every violation found is listed, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

// ---------------------------------------------------------------------------
// FilteredResult
// ---------------------------------------------------------------------------

/// Records that passed every supplied filter, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredResult<'a> {
    pub results: Vec<&'a BuildingRecord>,
    pub count: usize,
    pub filters: SearchParams,
}

impl<'a> FilteredResult<'a> {
    /// Identifiers of the matching records, in result order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.results.iter().map(|r| r.id.as_str()).collect()
    }
}
