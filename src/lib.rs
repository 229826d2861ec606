//! J-REIT building SDK for Rust.
//!
//! Loads a J-REIT building dataset (the `jReitBuildings` list) from a file,
//! a URL or memory, and answers two kinds of questions over it: which
//! buildings match a text and numeric-range search, and how a building's
//! cap-rate or occupancy history looks when bucketed for a chart.
//!
//! # Quick start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use jreit_sdk::{Granularity, JreitSdk};
//!
//! let sdk = JreitSdk::builder().path("data/buildings.json").build().unwrap();
//!
//! // Search by name/address and ranges
//! let raw = HashMap::from([
//!     ("q".to_string(), "tokyo".to_string()),
//!     ("minCap".to_string(), "4".to_string()),
//! ]);
//! let found = sdk.search().search(&raw).unwrap();
//! println!("{} buildings", found.count);
//!
//! // Yearly cap-rate chart of one building
//! let series = sdk.charts().cap_rate_series("1", Some(Granularity::Year)).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod models;
pub mod queries;
pub mod source;
pub mod summary;
pub mod timeseries;
pub mod validation;

#[cfg(feature = "async")]
pub use async_client::AsyncJreitSdk;
pub use config::{FieldLimits, SearchConfig};
pub use dataset::Dataset;
pub use error::{JreitError, Result};
pub use filter::{filter_buildings, BuildingFilter, NumericField};
pub use models::{
    AssetType, BuildingRecord, ChartPoint, ChartSeries, DataGranularity, FilteredResult,
    Granularity, HistoryPoint, SearchParams, TimeWindow, ValidationResult,
};
pub use source::{DataSource, DatasetLoader};
pub use timeseries::{
    analyze_granularity, bucket_and_aggregate, build_series, select_initial_granularity,
};
pub use validation::{sanitize_search_params, validate_search_params};

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::config::DEFAULT_TIMEOUT;

// ---------------------------------------------------------------------------
// JreitSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`JreitSdk`] instance.
///
/// Use [`JreitSdk::builder()`] to obtain a builder, set a data source, and
/// call [`build()`](JreitSdkBuilder::build) to load the dataset.
pub struct JreitSdkBuilder {
    source: Option<DataSource>,
    offline: bool,
    timeout: Duration,
    search_config: SearchConfig,
}

impl Default for JreitSdkBuilder {
    fn default() -> Self {
        Self {
            source: None,
            offline: false,
            timeout: DEFAULT_TIMEOUT,
            search_config: SearchConfig::default(),
        }
    }
}

impl JreitSdkBuilder {
    /// Set the data source explicitly.
    pub fn source(mut self, source: DataSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Load from a local JSON file. Files ending in `.gz` are decompressed.
    pub fn path<P: AsRef<Path>>(self, path: P) -> Self {
        self.source(DataSource::file(path))
    }

    /// Load from a URL serving the dataset document.
    pub fn url(self, url: impl Into<String>) -> Self {
        self.source(DataSource::url(url))
    }

    /// Use records already in memory.
    pub fn records(self, records: Vec<BuildingRecord>) -> Self {
        self.source(DataSource::Records(records))
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, URL sources are refused instead of fetched. Defaults
    /// to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for URL sources.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the validation limits used by [`JreitSdk::search()`].
    pub fn search_config(mut self, config: SearchConfig) -> Self {
        self.search_config = config;
        self
    }

    /// Build the SDK, loading the dataset eagerly.
    pub fn build(self) -> Result<JreitSdk> {
        let source = self.source.ok_or_else(|| {
            JreitError::InvalidArgument("No data source configured".to_string())
        })?;
        let loader = DatasetLoader::new(self.offline, self.timeout);
        let dataset = Dataset::load(&source, &loader)?;
        Ok(JreitSdk {
            dataset,
            source,
            loader,
            config: self.search_config,
        })
    }
}

// ---------------------------------------------------------------------------
// JreitSdk
// ---------------------------------------------------------------------------

/// The main entry point for the J-REIT SDK.
///
/// Owns a loaded [`Dataset`] and exposes query interfaces as lightweight
/// borrowing wrappers.
///
/// Created via [`JreitSdk::builder()`].
pub struct JreitSdk {
    dataset: Dataset,
    source: DataSource,
    loader: DatasetLoader,
    config: SearchConfig,
}

impl JreitSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> JreitSdkBuilder {
        JreitSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the building query interface.
    pub fn buildings(&self) -> queries::BuildingQuery<'_> {
        queries::BuildingQuery::new(&self.dataset)
    }

    /// Access the search interface.
    ///
    /// Validation uses the [`SearchConfig`] given to the builder.
    pub fn search(&self) -> queries::SearchQuery<'_> {
        queries::SearchQuery::new(&self.dataset, &self.config)
    }

    /// Access the chart query interface.
    pub fn charts(&self) -> queries::ChartQuery<'_> {
        queries::ChartQuery::new(&self.dataset)
    }

    // -- Dataset and utility methods ---------------------------------------

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.config
    }

    /// Load the data source again and swap in the new dataset.
    ///
    /// On failure the current dataset is kept. Returns the new building
    /// count.
    pub fn reload(&mut self) -> Result<usize> {
        let dataset = Dataset::load(&self.source, &self.loader)?;
        log::debug!(
            "Replacing dataset of {} buildings with {}",
            self.dataset.len(),
            dataset.len()
        );
        self.dataset = dataset;
        Ok(self.dataset.len())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for JreitSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JreitSdk(source={}, buildings={}, offline={})",
            self.source.describe(),
            self.dataset.len(),
            self.loader.offline
        )
    }
}
