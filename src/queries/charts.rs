//! History series of a building, bucketed for charts.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::{ChartSeries, Granularity, HistoryPoint};
use crate::queries::buildings::BuildingQuery;
use crate::timeseries::{build_series, extract_history};

// ---------------------------------------------------------------------------
// ChartQuery
// ---------------------------------------------------------------------------

/// Query interface for a building's cap-rate and occupancy history.
pub struct ChartQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> ChartQuery<'a> {
    /// Create a new `ChartQuery` over the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Cap-rate history points (`closingDate` / `capRate`).
    pub fn cap_rate_points(&self, id: &str) -> Result<Vec<HistoryPoint>> {
        let building = BuildingQuery::new(self.dataset).require(id)?;
        Ok(extract_history(
            &building.cap_rate_histories,
            |h| Some(h.closing_date.as_str()),
            |h| Some(h.cap_rate.as_str()),
        ))
    }

    /// Occupancy history points (`closingDate` / `leasing.occupancyRate`).
    ///
    /// Snapshots without a closing date are left out.
    pub fn occupancy_points(&self, id: &str) -> Result<Vec<HistoryPoint>> {
        let building = BuildingQuery::new(self.dataset).require(id)?;
        Ok(extract_history(
            &building.financials,
            |f| f.closing_date.as_deref(),
            |f| Some(f.leasing.occupancy_rate.as_str()),
        ))
    }

    /// Bucketed cap-rate series. `None` picks the finest supported granularity.
    pub fn cap_rate_series(
        &self,
        id: &str,
        granularity: Option<Granularity>,
    ) -> Result<ChartSeries> {
        build_series(&self.cap_rate_points(id)?, granularity)
    }

    /// Bucketed occupancy series. `None` picks the finest supported granularity.
    pub fn occupancy_series(
        &self,
        id: &str,
        granularity: Option<Granularity>,
    ) -> Result<ChartSeries> {
        build_series(&self.occupancy_points(id)?, granularity)
    }
}
