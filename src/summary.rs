//! Flattened building rows, sorting, grouping and aggregate statistics.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::currency::yen_to_hundred_million_yen;
use crate::models::{
    AssetType, AssetTypeCounts, BuildingRecord, BuildingStats, BuildingSummary, NumericRange,
    SortField, SortOrder, SummaryStatistics,
};
use crate::timeseries::parse_history_date;
use crate::validation::{parse_numeric, parse_numeric_or_nan};

/// Flatten a record into a listing row.
pub fn summarize(record: &BuildingRecord) -> BuildingSummary {
    let kind = record.primary_asset_type();
    BuildingSummary {
        id: record.id.clone(),
        name: record.name().to_string(),
        type_label: kind.label().to_string(),
        type_color: kind.color().to_string(),
        acquisition_date: record.acquisition.acquisition_date.clone(),
        cap_rate: parse_numeric_or_nan(record.cap_rate()),
        evaluation_amount: yen_to_hundred_million_yen(record.appraised_price() as f64),
        occupancy_rate: record
            .occupancy_rate()
            .and_then(parse_numeric)
            .unwrap_or(0.0),
    }
}

pub fn summarize_all<'a, I>(records: I) -> Vec<BuildingSummary>
where
    I: IntoIterator<Item = &'a BuildingRecord>,
{
    records.into_iter().map(summarize).collect()
}

/// Sorted copy of `rows`. Names compare case-insensitively and acquisition
/// dates that do not parse sort first. NaN numbers sort last in both
/// directions. The sort is stable, so ties keep their input order.
pub fn sort_summaries(
    rows: &[BuildingSummary],
    by: SortField,
    order: SortOrder,
) -> Vec<BuildingSummary> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| match by {
        SortField::Name => directed(a.name.to_lowercase().cmp(&b.name.to_lowercase()), order),
        SortField::AcquisitionDate => directed(
            parse_history_date(&a.acquisition_date).cmp(&parse_history_date(&b.acquisition_date)),
            order,
        ),
        SortField::CapRate => compare_nan_last(a.cap_rate, b.cap_rate, order),
        SortField::OccupancyRate => compare_nan_last(a.occupancy_rate, b.occupancy_rate, order),
        SortField::EvaluationAmount => {
            compare_nan_last(a.evaluation_amount, b.evaluation_amount, order)
        }
    });
    sorted
}

fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}

fn compare_nan_last(a: f64, b: f64, order: SortOrder) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => directed(a.total_cmp(&b), order),
    }
}

/// Rows grouped by asset type label.
pub fn group_by_type(rows: &[BuildingSummary]) -> BTreeMap<String, Vec<BuildingSummary>> {
    let mut groups: BTreeMap<String, Vec<BuildingSummary>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.type_label.clone()).or_default().push(row.clone());
    }
    groups
}

/// Min and max of `value` over `rows`, ignoring NaN. Zeroes when empty.
pub fn range_of<F>(rows: &[BuildingSummary], value: F) -> NumericRange
where
    F: Fn(&BuildingSummary) -> f64,
{
    let values: Vec<f64> = rows.iter().map(&value).filter(|v| !v.is_nan()).collect();
    if values.is_empty() {
        return NumericRange::default();
    }
    NumericRange {
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

/// Mean of `value` over `rows`, ignoring NaN. Zero when nothing is left.
fn mean_of<F>(rows: &[BuildingSummary], value: F) -> f64
where
    F: Fn(&BuildingSummary) -> f64,
{
    let values: Vec<f64> = rows.iter().map(value).filter(|v| !v.is_nan()).collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Averages, totals and ranges over listing rows. All zero when empty.
/// Averages and ranges skip NaN values, so a row whose cap rate does not
/// parse still counts but does not move the cap-rate figures.
pub fn summary_statistics(rows: &[BuildingSummary]) -> SummaryStatistics {
    if rows.is_empty() {
        return SummaryStatistics::default();
    }
    let cap = range_of(rows, |r| r.cap_rate);
    let occupancy = range_of(rows, |r| r.occupancy_rate);

    SummaryStatistics {
        count: rows.len(),
        average_cap_rate: mean_of(rows, |r| r.cap_rate),
        average_occupancy_rate: mean_of(rows, |r| r.occupancy_rate),
        total_evaluation_amount: rows.iter().map(|r| r.evaluation_amount).sum(),
        min_cap_rate: cap.min,
        max_cap_rate: cap.max,
        min_occupancy_rate: occupancy.min,
        max_occupancy_rate: occupancy.max,
    }
}

/// Dataset-level counts per asset type flag and the mean cap rate.
pub fn building_stats(records: &[BuildingRecord]) -> BuildingStats {
    let count = |t: AssetType| records.iter().filter(|r| r.asset_type.has(t)).count();
    let asset_types = AssetTypeCounts {
        office: count(AssetType::Office),
        retail: count(AssetType::Retail),
        hotel: count(AssetType::Hotel),
        parking: count(AssetType::Parking),
        industrial: count(AssetType::Industrial),
        logistic: count(AssetType::Logistics),
        residential: count(AssetType::Residential),
        health_care: count(AssetType::HealthCare),
        other: count(AssetType::Other),
    };

    let cap_rates: Vec<f64> = records
        .iter()
        .filter_map(|r| parse_numeric(r.cap_rate()))
        .collect();
    let average_cap_rate = if cap_rates.is_empty() {
        None
    } else {
        let mean = cap_rates.iter().sum::<f64>() / cap_rates.len() as f64;
        Some(format!("{:.2}", mean))
    };

    BuildingStats {
        total_buildings: records.len(),
        asset_types,
        average_cap_rate,
    }
}
