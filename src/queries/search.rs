//! Search queries: validation, sanitization and filtering of the dataset.

use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::error::{JreitError, Result};
use crate::filter::filter_buildings;
use crate::models::{FilteredResult, SearchParams, ValidationResult};
use crate::validation::{sanitize_search_params, validate_search_params};

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// Query interface for filtering buildings by text and numeric ranges.
pub struct SearchQuery<'a> {
    dataset: &'a Dataset,
    config: &'a SearchConfig,
}

impl<'a> SearchQuery<'a> {
    /// Create a new `SearchQuery` over the given dataset.
    pub fn new(dataset: &'a Dataset, config: &'a SearchConfig) -> Self {
        Self { dataset, config }
    }

    /// Validate raw parameters. See [`validate_search_params`].
    pub fn validate(&self, raw: &HashMap<String, String>) -> ValidationResult {
        validate_search_params(raw, self.config)
    }

    /// Sanitize raw parameters. See [`sanitize_search_params`].
    pub fn sanitize(&self, raw: &HashMap<String, String>) -> SearchParams {
        sanitize_search_params(raw, self.config)
    }

    /// Filter the dataset by already sanitized parameters.
    pub fn filter(&self, params: &SearchParams) -> FilteredResult<'a> {
        filter_buildings(self.dataset.records(), params)
    }

    /// Validate, sanitize and filter in one step.
    ///
    /// Returns [`JreitError::Validation`] with every problem found when the
    /// raw parameters are invalid.
    pub fn search(&self, raw: &HashMap<String, String>) -> Result<FilteredResult<'a>> {
        let validation = self.validate(raw);
        if !validation.is_valid {
            log::debug!("Rejected search parameters: {:?}", validation.errors);
            return Err(JreitError::Validation(validation.errors));
        }
        Ok(self.filter(&self.sanitize(raw)))
    }

    /// Free-text search on name and address. The query is required.
    pub fn text(&self, q: &str) -> Result<FilteredResult<'a>> {
        let raw = HashMap::from([("q".to_string(), q.to_string())]);
        let params = self.sanitize(&raw);
        if params.q.is_none() {
            return Err(JreitError::InvalidArgument(
                "Search query parameter is required".to_string(),
            ));
        }
        Ok(self.filter(&params))
    }
}
