//! Currency conversion and formatting for yen amounts.
//!
//! Appraisal values are stored in yen. Search bounds are expressed in
//! million yen (百万円) and listings show hundred million yen (億円).

use serde::{Deserialize, Serialize};

use crate::config::{
    HUNDRED_MILLION_YEN_LABEL, MILLION_YEN_LABEL, PERCENTAGE_LABEL, YEN_PER_HUNDRED_MILLION,
    YEN_PER_MILLION,
};

pub fn yen_to_million_yen(yen: f64) -> f64 {
    yen / YEN_PER_MILLION
}

pub fn yen_to_hundred_million_yen(yen: f64) -> f64 {
    yen / YEN_PER_HUNDRED_MILLION
}

pub fn million_yen_to_yen(million_yen: f64) -> f64 {
    million_yen * YEN_PER_MILLION
}

pub fn hundred_million_yen_to_yen(hundred_million_yen: f64) -> f64 {
    hundred_million_yen * YEN_PER_HUNDRED_MILLION
}

/// One amount expressed in every unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmounts {
    pub yen: f64,
    pub million_yen: f64,
    pub hundred_million_yen: f64,
}

impl CurrencyAmounts {
    pub fn from_yen(yen: f64) -> Self {
        Self {
            yen,
            million_yen: yen_to_million_yen(yen),
            hundred_million_yen: yen_to_hundred_million_yen(yen),
        }
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrencyUnit {
    Yen,
    Million,
    HundredMillion,
    /// Hundred million from 10億円 up, million from 10百万円 up, yen below.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyFormat {
    pub unit: CurrencyUnit,
    pub decimals: usize,
    pub include_unit: bool,
    /// Use the short labels (`億`, `百万`).
    pub compact: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            unit: CurrencyUnit::Auto,
            decimals: 2,
            include_unit: true,
            compact: false,
        }
    }
}

/// Format a yen amount in the requested unit, with comma grouping.
///
/// Trailing zeros left by rounding are dropped (`12.50` prints as `12.5`).
pub fn format_currency_amount(yen: f64, format: &CurrencyFormat) -> String {
    let unit = match format.unit {
        CurrencyUnit::Auto if yen >= YEN_PER_HUNDRED_MILLION * 10.0 => CurrencyUnit::HundredMillion,
        CurrencyUnit::Auto if yen >= YEN_PER_MILLION * 10.0 => CurrencyUnit::Million,
        CurrencyUnit::Auto => CurrencyUnit::Yen,
        other => other,
    };

    let (value, label) = match unit {
        CurrencyUnit::HundredMillion => (
            yen_to_hundred_million_yen(yen),
            if format.compact { "億" } else { HUNDRED_MILLION_YEN_LABEL },
        ),
        CurrencyUnit::Million => (
            yen_to_million_yen(yen),
            if format.compact { "百万" } else { MILLION_YEN_LABEL },
        ),
        _ => (yen, "円"),
    };

    let rounded = format!("{:.*}", format.decimals, value);
    let number = group_thousands(trim_fraction(&rounded));
    if format.include_unit {
        format!("{}{}", number, label)
    } else {
        number
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Insert `,` between groups of three integer digits.
fn group_thousands(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", number),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    format!("{}{}{}", sign, grouped, frac_part)
}

pub fn format_percentage(value: f64, decimals: usize, include_symbol: bool) -> String {
    let formatted = format!("{:.*}", decimals, value);
    if include_symbol {
        format!("{}{}", formatted, PERCENTAGE_LABEL)
    } else {
        formatted
    }
}

/// Cap rate with two decimals, e.g. `4.50%`. Unparsable input prints `NaN%`.
pub fn format_cap_rate(cap_rate: &str) -> String {
    format_percentage(crate::validation::parse_numeric_or_nan(cap_rate), 2, true)
}

/// Occupancy rate with one decimal, e.g. `95.0%`.
pub fn format_occupancy_rate(occupancy_rate: &str) -> String {
    format_percentage(crate::validation::parse_numeric_or_nan(occupancy_rate), 1, true)
}

/// Parse a formatted amount (`"1,234.5百万円"`) back to a number.
///
/// Everything except digits, `.` and `-` is stripped; 0 when nothing parses.
pub fn parse_currency_string(s: &str) -> f64 {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    crate::validation::parse_numeric(&cleaned).unwrap_or(0.0)
}

/// Convert user input in `unit` to yen. `Auto` is treated as yen.
pub fn input_to_yen(input: &str, unit: CurrencyUnit) -> f64 {
    let value = parse_currency_string(input);
    match unit {
        CurrencyUnit::HundredMillion => hundred_million_yen_to_yen(value),
        CurrencyUnit::Million => million_yen_to_yen(value),
        CurrencyUnit::Yen | CurrencyUnit::Auto => value,
    }
}

/// Percentage change from `old` to `new`. From zero: 0 if still zero, else 100.
pub fn percentage_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        return if new == 0.0 { 0.0 } else { 100.0 };
    }
    (new - old) / old * 100.0
}

/// Signed percentage change, e.g. `+12.5%`.
pub fn format_percentage_change(change: f64, decimals: usize) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{}{:.*}{}", sign, decimals, change, PERCENTAGE_LABEL)
}
