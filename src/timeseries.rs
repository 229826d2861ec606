//! Granularity detection and bucketed aggregation of history series.
//!
//! A series is first reduced to [`HistoryPoint`]s through caller-supplied
//! accessors, so the same code serves cap-rate histories, occupancy
//! snapshots or any other dated numeric records.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jreit_sdk::models::{Granularity, HistoryPoint};
//! use jreit_sdk::timeseries::{analyze_granularity, bucket_and_aggregate};
//!
//! let d = |m| NaiveDate::from_ymd_opt(2020, m, 1).unwrap();
//! let points = vec![HistoryPoint::new(d(1), 4.5), HistoryPoint::new(d(2), 4.6)];
//!
//! assert!(analyze_granularity(&points).is_monthly_available);
//! let yearly = bucket_and_aggregate(&points, Granularity::Year);
//! assert_eq!(yearly.len(), 1);
//! assert_eq!(yearly[0].value, 4.55);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::{JreitError, Result};
use crate::models::{
    ChartPoint, ChartSeries, DataGranularity, Granularity, HistoryPoint, TimeWindow,
};
use crate::validation::parse_numeric;

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Parse a history date: RFC 3339, ISO date-time without offset,
/// `YYYY-MM-DD` or `YYYY/MM/DD`.
pub fn parse_history_date(value: &str) -> Option<NaiveDate> {
    let s = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .ok()
}

/// Turn arbitrary dated records into history points.
///
/// `date_of` and `value_of` return the raw date and numeric strings of a
/// record, or `None` when the record has none. Records whose date or value
/// does not parse are skipped.
pub fn extract_history<T, D, V>(records: &[T], date_of: D, value_of: V) -> Vec<HistoryPoint>
where
    D: Fn(&T) -> Option<&str>,
    V: Fn(&T) -> Option<&str>,
{
    let mut skipped = 0usize;
    let points: Vec<HistoryPoint> = records
        .iter()
        .filter_map(|r| {
            let date = date_of(r).and_then(parse_history_date);
            let value = value_of(r).and_then(parse_numeric);
            match (date, value) {
                (Some(date), Some(value)) => Some(HistoryPoint { date, value }),
                _ => {
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {} history records without a usable date or value", skipped);
    }
    points
}

// ---------------------------------------------------------------------------
// Granularity analysis
// ---------------------------------------------------------------------------

/// Approximate months from `from` to `to`; a day counts as 1/30 month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> f64 {
    let year_diff = (to.year() - from.year()) as f64;
    let month_diff = to.month0() as f64 - from.month0() as f64;
    let day_diff = to.day() as f64 - from.day() as f64;
    year_diff * 12.0 + month_diff + day_diff / 30.0
}

/// Find the smallest sampling interval of a series and the granularities
/// it supports. Fewer than two points support every granularity.
pub fn analyze_granularity(points: &[HistoryPoint]) -> DataGranularity {
    if points.len() < 2 {
        return DataGranularity::permissive();
    }

    let mut dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
    dates.sort();

    let min_interval = dates
        .windows(2)
        .map(|w| months_between(w[0], w[1]))
        .fold(f64::INFINITY, f64::min);

    DataGranularity::from_min_interval(min_interval)
}

/// The finest granularity the data supports.
pub fn select_initial_granularity(granularity: &DataGranularity) -> Granularity {
    Granularity::ALL
        .into_iter()
        .find(|g| granularity.is_available(*g))
        .unwrap_or(Granularity::Year)
}

// ---------------------------------------------------------------------------
// Bucketing
// ---------------------------------------------------------------------------

/// Period key of `date`: (year, month | quarter | half | 0).
fn bucket_key(date: NaiveDate, granularity: Granularity) -> (i32, u32) {
    match granularity.months_per_bucket() {
        Some(months) => (date.year(), date.month().div_ceil(months)),
        None => (date.year(), 0),
    }
}

/// Axis label of a bucket's representative date.
pub fn format_label(date: NaiveDate, granularity: Granularity) -> String {
    let pattern = match granularity {
        Granularity::Month => "%Y/%m/%d",
        Granularity::Quarter | Granularity::HalfYear => "%Y/%m",
        Granularity::Year => "%Y",
    };
    date.format(pattern).to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Group points into calendar buckets and average each bucket.
///
/// Each bucket yields one [`ChartPoint`] whose value is the mean of its
/// members rounded to two decimals, and whose date is the member at index
/// `(n - 1) / 2` of the date-sorted bucket (the lower middle when `n` is
/// even). Output is ascending by date.
///
/// Averaging an already bucketed series again at a coarser granularity is a
/// mean of means, which only equals the mean of the raw values when every
/// finer bucket holds the same number of samples.
pub fn bucket_and_aggregate(points: &[HistoryPoint], granularity: Granularity) -> Vec<ChartPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.date);

    let mut buckets: BTreeMap<(i32, u32), Vec<HistoryPoint>> = BTreeMap::new();
    for point in sorted {
        buckets
            .entry(bucket_key(point.date, granularity))
            .or_default()
            .push(point);
    }

    let mut chart: Vec<ChartPoint> = buckets
        .into_values()
        .map(|members| {
            let mean = members.iter().map(|p| p.value).sum::<f64>() / members.len() as f64;
            let representative = members[(members.len() - 1) / 2].date;
            ChartPoint {
                date: format_label(representative, granularity),
                value: round2(mean),
                sort_key: representative,
            }
        })
        .collect();

    chart.sort_by_key(|p| p.sort_key);
    chart
}

/// Points dated on or after `cutoff`.
pub fn since(points: &[HistoryPoint], cutoff: NaiveDate) -> Vec<HistoryPoint> {
    points.iter().filter(|p| p.date >= cutoff).copied().collect()
}

/// Points inside `window`, counted back from `today`. [`TimeWindow::All`]
/// keeps everything.
pub fn within_window(
    points: &[HistoryPoint],
    window: TimeWindow,
    today: NaiveDate,
) -> Vec<HistoryPoint> {
    match window.cutoff(today) {
        Some(cutoff) => since(points, cutoff),
        None => points.to_vec(),
    }
}

/// Analyze a series and bucket it at `requested`, or at the finest available
/// granularity when `requested` is `None`.
///
/// Fails with [`JreitError::InvalidArgument`] when the requested granularity
/// is finer than the data supports.
pub fn build_series(
    points: &[HistoryPoint],
    requested: Option<Granularity>,
) -> Result<ChartSeries> {
    let granularity = analyze_granularity(points);
    let selected = match requested {
        Some(g) if !granularity.is_available(g) => {
            return Err(JreitError::InvalidArgument(format!(
                "Granularity {} is not available: samples are at least {:.1} months apart",
                g, granularity.min_interval_months
            )));
        }
        Some(g) => g,
        None => select_initial_granularity(&granularity),
    };

    Ok(ChartSeries {
        granularity,
        selected,
        points: bucket_and_aggregate(points, selected),
    })
}
