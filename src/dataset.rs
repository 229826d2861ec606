//! In-memory building dataset with an identifier index.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::BuildingRecord;
use crate::source::{records_from_document, DataSource, DatasetLoader};

/// Immutable collection of building records, indexed by id.
///
/// Record order is preserved as loaded. When two records share an id,
/// lookups by id return the first one.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<BuildingRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new(records: Vec<BuildingRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.contains_key(&record.id) {
                log::warn!("Duplicate building id {}; keeping the first record", record.id);
                continue;
            }
            index.insert(record.id.clone(), i);
        }
        Self { records, index }
    }

    /// Load a dataset from `source`.
    pub fn load(source: &DataSource, loader: &DatasetLoader) -> Result<Self> {
        Ok(Self::new(loader.load(source)?))
    }

    /// Parse a dataset document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: serde_json::Value = serde_json::from_str(json)?;
        Ok(Self::new(records_from_document(doc)?))
    }

    pub fn records(&self) -> &[BuildingRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&BuildingRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
