//! Building lookups and dataset statistics.

use crate::dataset::Dataset;
use crate::error::{JreitError, Result};
use crate::models::{AssetType, BuildingRecord, BuildingStats, BuildingSummary};
use crate::summary::{building_stats, summarize_all};
use crate::validation::{validate_asset_type, validate_building_id};

// ---------------------------------------------------------------------------
// BuildingQuery
// ---------------------------------------------------------------------------

/// Query interface for building records.
pub struct BuildingQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> BuildingQuery<'a> {
    /// Create a new `BuildingQuery` over the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Every building, in dataset order.
    pub fn all(&self) -> &'a [BuildingRecord] {
        self.dataset.records()
    }

    pub fn count(&self) -> usize {
        self.dataset.len()
    }

    // -- Single building lookup --------------------------------------------

    /// Retrieve a building by id. A blank id is an invalid argument.
    pub fn get(&self, id: &str) -> Result<Option<&'a BuildingRecord>> {
        let validation = validate_building_id(id);
        if !validation.is_valid {
            return Err(JreitError::InvalidArgument(validation.errors.join("; ")));
        }
        Ok(self.dataset.get(id))
    }

    /// Like [`get`](Self::get), but a missing building is an error.
    pub fn require(&self, id: &str) -> Result<&'a BuildingRecord> {
        self.get(id)?
            .ok_or_else(|| JreitError::NotFound(format!("Building not found: {}", id)))
    }

    // -- Asset type lookup -------------------------------------------------

    /// Buildings with the flag for `asset_type` set (e.g. `"office"`,
    /// `"healthCare"`). Buildings with several flags appear under each.
    pub fn by_asset_type(&self, asset_type: &str) -> Result<Vec<&'a BuildingRecord>> {
        let validation = validate_asset_type(asset_type);
        let kind = match AssetType::from_key(asset_type) {
            Some(kind) if validation.is_valid => kind,
            _ => return Err(JreitError::InvalidArgument(validation.errors.join("; "))),
        };

        Ok(self
            .dataset
            .records()
            .iter()
            .filter(|r| r.asset_type.has(kind))
            .collect())
    }

    // -- Aggregates --------------------------------------------------------

    /// Counts per asset type and the mean cap rate.
    pub fn stats(&self) -> BuildingStats {
        building_stats(self.dataset.records())
    }

    /// Listing rows for every building.
    pub fn summaries(&self) -> Vec<BuildingSummary> {
        summarize_all(self.dataset.records())
    }
}
