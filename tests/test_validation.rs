//! Validation and sanitization of raw search parameters.

mod common;

use common::params;
use jreit_sdk::validation::{
    is_valid_number_input, parse_numeric, sanitize_search_params, validate_asset_type,
    validate_building_id, validate_search_params,
};
use jreit_sdk::SearchConfig;

// ---------------------------------------------------------------------------
// Number inputs
// ---------------------------------------------------------------------------

#[test]
fn number_input_accepts_integers_and_decimals() {
    for ok in ["", "0", "12", "3.5", ".5", "100.00"] {
        assert!(is_valid_number_input(ok), "{ok:?} should be accepted");
    }
}

#[test]
fn number_input_rejects_signs_letters_and_bare_dot() {
    for bad in ["-1", "+1", "abc", "1.2.3", ".", "1e3", " 5", "5%"] {
        assert!(!is_valid_number_input(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn parse_numeric_reads_leading_number() {
    assert_eq!(parse_numeric("4.5"), Some(4.5));
    assert_eq!(parse_numeric("  4.5%"), Some(4.5));
    assert_eq!(parse_numeric("-2"), Some(-2.0));
    assert_eq!(parse_numeric(".25"), Some(0.25));
    assert_eq!(parse_numeric("n/a"), None);
    assert_eq!(parse_numeric(""), None);
}

// ---------------------------------------------------------------------------
// validate_search_params
// ---------------------------------------------------------------------------

#[test]
fn empty_params_are_valid() {
    let result = validate_search_params(&params(&[]), &SearchConfig::default());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn well_formed_params_are_valid() {
    let raw = params(&[
        ("q", "tokyo"),
        ("minYield", "90"),
        ("maxYield", "100"),
        ("minPrice", "10"),
        ("maxPrice", "20"),
        ("minCap", "4"),
        ("maxCap", "5"),
    ]);
    let result = validate_search_params(&raw, &SearchConfig::default());
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
}

#[test]
fn query_longer_than_limit_is_rejected() {
    let long = "a".repeat(101);
    let result = validate_search_params(&params(&[("q", long.as_str())]), &SearchConfig::default());
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Search query must not exceed 100 characters"]);
}

#[test]
fn query_length_counts_characters_not_bytes() {
    let jp = "東".repeat(100);
    let result = validate_search_params(&params(&[("q", jp.as_str())]), &SearchConfig::default());
    assert!(result.is_valid);
}

#[test]
fn malformed_number_is_reported() {
    let result = validate_search_params(&params(&[("minCap", "abc")]), &SearchConfig::default());
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Minimum cap rate must be a valid number"]);
}

#[test]
fn empty_bound_is_not_an_error() {
    let raw = params(&[("minPrice", ""), ("maxPrice", "5")]);
    let result = validate_search_params(&raw, &SearchConfig::default());
    assert!(result.is_valid);
}

#[test]
fn inverted_range_is_reported() {
    let raw = params(&[("minCap", "6"), ("maxCap", "5")]);
    let result = validate_search_params(&raw, &SearchConfig::default());
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Minimum cap rate cannot be greater than maximum cap rate"]);
}

#[test]
fn inverted_range_with_malformed_bound_reports_format_only() {
    let raw = params(&[("minYield", "x"), ("maxYield", "5")]);
    let result = validate_search_params(&raw, &SearchConfig::default());
    assert_eq!(result.errors, vec!["Minimum yield must be a valid number"]);
}

#[test]
fn every_violation_is_collected() {
    let raw = params(&[
        ("q", "x".repeat(150).as_str()),
        ("minYield", "bad"),
        ("minPrice", "30"),
        ("maxPrice", "20"),
        ("maxCap", "?"),
    ]);
    let result = validate_search_params(&raw, &SearchConfig::default());
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            "Search query must not exceed 100 characters",
            "Minimum yield must be a valid number",
            "Minimum price cannot be greater than maximum price",
            "Maximum cap rate must be a valid number",
        ]
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let raw = params(&[("sort", "desc"), ("page", "-1")]);
    assert!(validate_search_params(&raw, &SearchConfig::default()).is_valid);
}

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

#[test]
fn occupancy_above_hundred_is_rejected() {
    let result = validate_search_params(&params(&[("maxYield", "120")]), &SearchConfig::default());
    assert_eq!(result.errors, vec!["Maximum yield cannot be greater than 100%"]);
}

#[test]
fn cap_rate_above_twenty_is_rejected() {
    let result = validate_search_params(&params(&[("minCap", "25")]), &SearchConfig::default());
    assert_eq!(result.errors, vec!["Minimum cap rate cannot be greater than 20%"]);
}

#[test]
fn price_above_maximum_is_rejected() {
    let result =
        validate_search_params(&params(&[("maxPrice", "1000001")]), &SearchConfig::default());
    assert_eq!(result.errors, vec!["Maximum price exceeds maximum allowed value"]);
}

#[test]
fn limits_can_be_disabled() {
    let raw = params(&[("maxYield", "120"), ("minCap", "25"), ("maxPrice", "5000000")]);
    let result = validate_search_params(&raw, &SearchConfig::without_limits());
    assert!(result.is_valid);
}

#[test]
fn custom_query_length() {
    let config = SearchConfig {
        max_query_length: 5,
        ..SearchConfig::default()
    };
    let result = validate_search_params(&params(&[("q", "abcdef")]), &config);
    assert_eq!(result.errors, vec!["Search query must not exceed 5 characters"]);
}

// ---------------------------------------------------------------------------
// sanitize_search_params
// ---------------------------------------------------------------------------

#[test]
fn sanitize_trims_and_drops_empty_values() {
    let raw = params(&[("q", "  tokyo  "), ("minCap", " 4 "), ("maxCap", "   ")]);
    let clean = sanitize_search_params(&raw, &SearchConfig::default());
    assert_eq!(clean.q.as_deref(), Some("tokyo"));
    assert_eq!(clean.min_cap.as_deref(), Some("4"));
    assert_eq!(clean.max_cap, None);
}

#[test]
fn padded_number_is_trimmed_by_sanitize_but_rejected_by_validate() {
    let raw = params(&[("minCap", " 4 ")]);
    let config = SearchConfig::default();

    let clean = sanitize_search_params(&raw, &config);
    assert_eq!(clean.min_cap.as_deref(), Some("4"));

    let result = validate_search_params(&raw, &config);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Minimum cap rate must be a valid number"]);
}

#[test]
fn sanitize_drops_malformed_numbers() {
    let raw = params(&[("minPrice", "12abc"), ("maxPrice", "20")]);
    let clean = sanitize_search_params(&raw, &SearchConfig::default());
    assert_eq!(clean.min_price, None);
    assert_eq!(clean.max_price.as_deref(), Some("20"));
}

#[test]
fn sanitize_truncates_query() {
    let raw = params(&[("q", "あ".repeat(120).as_str())]);
    let clean = sanitize_search_params(&raw, &SearchConfig::default());
    assert_eq!(clean.q.unwrap().chars().count(), 100);
}

#[test]
fn sanitize_keeps_inverted_ranges() {
    let raw = params(&[("minCap", "6"), ("maxCap", "5")]);
    let clean = sanitize_search_params(&raw, &SearchConfig::default());
    assert_eq!(clean.min_cap.as_deref(), Some("6"));
    assert_eq!(clean.max_cap.as_deref(), Some("5"));
}

#[test]
fn sanitize_of_empty_map_is_empty() {
    let clean = sanitize_search_params(&params(&[]), &SearchConfig::default());
    assert!(clean.is_empty());
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[test]
fn asset_type_validation() {
    assert!(validate_asset_type("office").is_valid);
    assert!(validate_asset_type("healthCare").is_valid);

    let missing = validate_asset_type("");
    assert_eq!(missing.errors, vec!["Asset type is required"]);

    let unknown = validate_asset_type("castle");
    assert!(!unknown.is_valid);
    assert!(unknown.errors[0].starts_with("Invalid asset type. Valid types: office, retail"));
}

#[test]
fn building_id_validation() {
    assert!(validate_building_id("42").is_valid);
    assert_eq!(validate_building_id("").errors, vec!["Building ID is required"]);
    assert_eq!(validate_building_id("   ").errors, vec!["Building ID cannot be empty"]);
}
