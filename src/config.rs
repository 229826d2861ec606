use std::time::Duration;

/// Yen per million yen (百万円).
pub const YEN_PER_MILLION: f64 = 1_000_000.0;
/// Yen per hundred million yen (億円).
pub const YEN_PER_HUNDRED_MILLION: f64 = 100_000_000.0;

pub const MILLION_YEN_LABEL: &str = "百万円";
pub const HUNDRED_MILLION_YEN_LABEL: &str = "億円";
pub const PERCENTAGE_LABEL: &str = "%";

pub const MAX_QUERY_LENGTH: usize = 100;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Asset type keys accepted by type lookups.
pub const ASSET_TYPE_KEYS: [&str; 9] = [
    "office",
    "retail",
    "hotel",
    "parking",
    "industrial",
    "logistic",
    "residential",
    "healthCare",
    "other",
];

/// Inclusive bounds accepted for each numeric search field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    pub min_occupancy_rate: f64,
    pub max_occupancy_rate: f64,
    pub min_cap_rate: f64,
    pub max_cap_rate: f64,
    pub min_price_million_yen: f64,
    pub max_price_million_yen: f64,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            min_occupancy_rate: 0.0,
            max_occupancy_rate: 100.0,
            min_cap_rate: 0.0,
            max_cap_rate: 20.0,
            min_price_million_yen: 0.0,
            max_price_million_yen: 1_000_000.0,
        }
    }
}

/// Settings for parameter validation and sanitization.
///
/// Passed explicitly to the search functions; nothing is read from the
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Longest accepted free-text query, in characters.
    pub max_query_length: usize,
    /// Per-field value limits. `None` disables the limit checks and leaves
    /// only the format and min/max ordering checks.
    pub limits: Option<FieldLimits>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_length: MAX_QUERY_LENGTH,
            limits: Some(FieldLimits::default()),
        }
    }
}

impl SearchConfig {
    /// Config with format and ordering checks only.
    pub fn without_limits() -> Self {
        Self {
            limits: None,
            ..Self::default()
        }
    }
}
