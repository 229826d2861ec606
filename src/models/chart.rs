use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::JreitError;

// ---------------------------------------------------------------------------
// Granularity: Time-bucket width for history charts
// ---------------------------------------------------------------------------

/// Bucket width used to aggregate a history series, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[serde(rename = "1month")]
    Month,
    #[serde(rename = "3months")]
    Quarter,
    #[serde(rename = "6months")]
    HalfYear,
    #[serde(rename = "1year")]
    Year,
}

impl Granularity {
    /// All granularities, finest to coarsest.
    pub const ALL: [Granularity; 4] = [
        Granularity::Month,
        Granularity::Quarter,
        Granularity::HalfYear,
        Granularity::Year,
    ];

    /// Months covered by one bucket. `None` for Year, which has no finer
    /// sampling requirement.
    pub fn months_per_bucket(self) -> Option<u32> {
        match self {
            Granularity::Month => Some(1),
            Granularity::Quarter => Some(3),
            Granularity::HalfYear => Some(6),
            Granularity::Year => None,
        }
    }

    /// Largest minimum sampling interval (in months) for which this
    /// granularity is still meaningful. Includes a 0.1 month allowance for
    /// uneven month lengths.
    pub fn threshold_months(self) -> f64 {
        match self {
            Granularity::Month => 1.1,
            Granularity::Quarter => 3.1,
            Granularity::HalfYear => 6.1,
            Granularity::Year => f64::INFINITY,
        }
    }

    /// Wire value (`1month`, `3months`, `6months`, `1year`).
    pub fn value(self) -> &'static str {
        match self {
            Granularity::Month => "1month",
            Granularity::Quarter => "3months",
            Granularity::HalfYear => "6months",
            Granularity::Year => "1year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Month => "1ヶ月",
            Granularity::Quarter => "4半期",
            Granularity::HalfYear => "半期",
            Granularity::Year => "1年",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Granularity {
    type Err = JreitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.value() == s)
            .ok_or_else(|| {
                JreitError::InvalidArgument(format!(
                    "Unknown granularity '{}'. Valid values: 1month, 3months, 6months, 1year",
                    s
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// DataGranularity: Which granularities a series supports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGranularity {
    pub min_interval_months: f64,
    pub is_monthly_available: bool,
    pub is_quarterly_available: bool,
    pub is_half_yearly_available: bool,
}

impl DataGranularity {
    /// Every granularity available. Used when the series is too short to
    /// contradict any of them.
    pub fn permissive() -> Self {
        Self {
            min_interval_months: 0.0,
            is_monthly_available: true,
            is_quarterly_available: true,
            is_half_yearly_available: true,
        }
    }

    /// Availability derived from the smallest interval between samples.
    pub fn from_min_interval(min_interval_months: f64) -> Self {
        Self {
            min_interval_months,
            is_monthly_available: min_interval_months <= Granularity::Month.threshold_months(),
            is_quarterly_available: min_interval_months
                <= Granularity::Quarter.threshold_months(),
            is_half_yearly_available: min_interval_months
                <= Granularity::HalfYear.threshold_months(),
        }
    }

    pub fn is_available(&self, granularity: Granularity) -> bool {
        match granularity {
            Granularity::Month => self.is_monthly_available,
            Granularity::Quarter => self.is_quarterly_available,
            Granularity::HalfYear => self.is_half_yearly_available,
            Granularity::Year => true,
        }
    }

    /// Available granularities, finest first. Always ends with Year.
    pub fn available(&self) -> Vec<Granularity> {
        Granularity::ALL
            .into_iter()
            .filter(|g| self.is_available(*g))
            .collect()
    }
}

impl Default for DataGranularity {
    fn default() -> Self {
        Self::permissive()
    }
}

// ---------------------------------------------------------------------------
// HistoryPoint / ChartPoint / ChartSeries
// ---------------------------------------------------------------------------

/// One dated sample of a history series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl HistoryPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

impl From<&ChartPoint> for HistoryPoint {
    fn from(point: &ChartPoint) -> Self {
        Self {
            date: point.sort_key,
            value: point.value,
        }
    }
}

/// One aggregated bucket, ready for a chart axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Display label of the representative date.
    pub date: String,
    /// Bucket mean, rounded to two decimals.
    pub value: f64,
    /// Representative date of the bucket.
    pub sort_key: NaiveDate,
}

/// A bucketed series together with the granularity analysis it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub granularity: DataGranularity,
    pub selected: Granularity,
    pub points: Vec<ChartPoint>,
}

// ---------------------------------------------------------------------------
// TimeWindow: Trailing period shown on a chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "all")]
    All,
}

impl TimeWindow {
    pub fn months(self) -> Option<u32> {
        match self {
            TimeWindow::OneMonth => Some(1),
            TimeWindow::ThreeMonths => Some(3),
            TimeWindow::SixMonths => Some(6),
            TimeWindow::OneYear => Some(12),
            TimeWindow::All => None,
        }
    }

    /// Earliest date inside the window ending at `today`. `None` means
    /// unbounded.
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        self.months()
            .and_then(|m| today.checked_sub_months(Months::new(m)))
    }
}
