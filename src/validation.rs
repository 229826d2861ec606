//! Validation and sanitization of raw search parameters.
//!
//! Raw parameters arrive as a string map (typically a URL query). Validation
//! reports every problem at once; sanitization silently keeps what is usable.
//! Neither function fails.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::{FieldLimits, SearchConfig, ASSET_TYPE_KEYS};
use crate::models::{SearchParams, ValidationResult};

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9]+)?(\.[0-9]+)?$").expect("valid number pattern"))
}

fn float_prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("valid float prefix pattern")
    })
}

/// Whether `value` is empty or an unsigned integer/decimal (`12`, `3.5`, `.5`).
pub fn is_valid_number_input(value: &str) -> bool {
    value.is_empty() || number_pattern().is_match(value)
}

/// Parse the leading number of a string, ignoring leading whitespace and
/// any trailing text (`"4.5%"` parses as 4.5). `None` when no number leads.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    float_prefix_pattern()
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// [`parse_numeric`], with NaN standing in for "not a number".
pub fn parse_numeric_or_nan(value: &str) -> f64 {
    parse_numeric(value).unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Range fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum RangeField {
    Yield,
    Price,
    CapRate,
}

impl RangeField {
    const ALL: [RangeField; 3] = [RangeField::Yield, RangeField::Price, RangeField::CapRate];

    fn keys(self) -> (&'static str, &'static str) {
        match self {
            RangeField::Yield => ("minYield", "maxYield"),
            RangeField::Price => ("minPrice", "maxPrice"),
            RangeField::CapRate => ("minCap", "maxCap"),
        }
    }

    fn label(self) -> &'static str {
        match self {
            RangeField::Yield => "yield",
            RangeField::Price => "price",
            RangeField::CapRate => "cap rate",
        }
    }

    /// Check a single well-formed, non-empty value against the field limits.
    fn check_limits(self, value: f64, field_name: &str, limits: &FieldLimits) -> Option<String> {
        match self {
            RangeField::Yield => percent_limits(
                value,
                field_name,
                limits.min_occupancy_rate,
                limits.max_occupancy_rate,
            ),
            RangeField::CapRate => {
                percent_limits(value, field_name, limits.min_cap_rate, limits.max_cap_rate)
            }
            RangeField::Price => {
                if value < limits.min_price_million_yen {
                    Some(format!("{} cannot be negative", field_name))
                } else if value > limits.max_price_million_yen {
                    Some(format!("{} exceeds maximum allowed value", field_name))
                } else {
                    None
                }
            }
        }
    }
}

fn percent_limits(value: f64, field_name: &str, min: f64, max: f64) -> Option<String> {
    if value < min {
        Some(format!("{} cannot be less than {}%", field_name, min))
    } else if value > max {
        Some(format!("{} cannot be greater than {}%", field_name, max))
    } else {
        None
    }
}

fn validate_value(
    field: RangeField,
    value: &str,
    field_name: &str,
    config: &SearchConfig,
) -> Option<String> {
    if !is_valid_number_input(value) {
        return Some(format!("{} must be a valid number", field_name));
    }
    if value.is_empty() {
        return None;
    }
    let limits = config.limits.as_ref()?;
    let number = value.parse::<f64>().ok()?;
    field.check_limits(number, field_name, limits)
}

fn validate_range(
    field: RangeField,
    raw: &HashMap<String, String>,
    config: &SearchConfig,
    errors: &mut Vec<String>,
) {
    let (min_key, max_key) = field.keys();
    let label = field.label();
    let min = raw.get(min_key).map(String::as_str);
    let max = raw.get(max_key).map(String::as_str);

    if let Some(v) = min {
        if let Some(e) = validate_value(field, v, &format!("Minimum {}", label), config) {
            errors.push(e);
        }
    }
    if let Some(v) = max {
        if let Some(e) = validate_value(field, v, &format!("Maximum {}", label), config) {
            errors.push(e);
        }
    }

    if let (Some(lo), Some(hi)) = (min, max) {
        if lo.is_empty() || hi.is_empty() {
            return;
        }
        if !is_valid_number_input(lo) || !is_valid_number_input(hi) {
            return;
        }
        if let (Ok(lo), Ok(hi)) = (lo.parse::<f64>(), hi.parse::<f64>()) {
            if lo > hi {
                errors.push(format!(
                    "Minimum {} cannot be greater than maximum {}",
                    label, label
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Validate raw search parameters, collecting every violation.
///
/// Unrecognized keys are ignored. Checks, in order: query length, then for
/// occupancy (`minYield`/`maxYield`), price and cap rate: each bound's format
/// and limits, then `min <= max` when both bounds are present and valid.
pub fn validate_search_params(
    raw: &HashMap<String, String>,
    config: &SearchConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(q) = raw.get("q") {
        if q.chars().count() > config.max_query_length {
            errors.push(format!(
                "Search query must not exceed {} characters",
                config.max_query_length
            ));
        }
    }

    for field in RangeField::ALL {
        validate_range(field, raw, config, &mut errors);
    }

    ValidationResult::from_errors(errors)
}

/// Keep the usable part of raw search parameters.
///
/// Values are trimmed before the number check, so `" 4 "` is kept as `"4"`.
/// [`validate_search_params`] checks the raw value and reports the same
/// input as malformed. The query is truncated to the configured length.
/// Empty values and malformed numbers are dropped. Safe on unvalidated
/// input.
pub fn sanitize_search_params(
    raw: &HashMap<String, String>,
    config: &SearchConfig,
) -> SearchParams {
    let numeric = |key: &str| -> Option<String> {
        raw.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty() && is_valid_number_input(v))
            .map(str::to_string)
    };

    let q = raw
        .get("q")
        .map(|v| v.trim().chars().take(config.max_query_length).collect::<String>())
        .filter(|v| !v.is_empty());

    SearchParams {
        q,
        min_yield: numeric("minYield"),
        max_yield: numeric("maxYield"),
        min_price: numeric("minPrice"),
        max_price: numeric("maxPrice"),
        min_cap: numeric("minCap"),
        max_cap: numeric("maxCap"),
    }
}

/// Validate an asset type key used for type lookups.
pub fn validate_asset_type(asset_type: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if asset_type.is_empty() {
        errors.push("Asset type is required".to_string());
    } else if !ASSET_TYPE_KEYS.contains(&asset_type) {
        errors.push(format!(
            "Invalid asset type. Valid types: {}",
            ASSET_TYPE_KEYS.join(", ")
        ));
    }
    ValidationResult::from_errors(errors)
}

/// Validate a building identifier used for single-building lookups.
pub fn validate_building_id(id: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if id.is_empty() {
        errors.push("Building ID is required".to_string());
    } else if id.trim().is_empty() {
        errors.push("Building ID cannot be empty".to_string());
    }
    ValidationResult::from_errors(errors)
}
