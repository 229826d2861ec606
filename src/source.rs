//! Dataset sources and loading.
//!
//! A dataset document is JSON shaped as `{"data": {"jReitBuildings": [...]}}`.
//! It can come from a local file (optionally gzip-compressed), an HTTP(S)
//! URL, an in-memory JSON value, or a ready-made record list.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::DEFAULT_TIMEOUT;
use crate::error::{JreitError, Result};
use crate::models::BuildingRecord;

/// Where a dataset comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local JSON file. Files ending in `.gz` are decompressed transparently.
    File(PathBuf),
    /// Remote JSON document fetched with a blocking GET.
    Url(String),
    /// An already parsed dataset document.
    Json(Value),
    /// Records supplied directly by the caller.
    Records(Vec<BuildingRecord>),
}

impl DataSource {
    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        DataSource::File(path.as_ref().to_path_buf())
    }

    pub fn url(url: impl Into<String>) -> Self {
        DataSource::Url(url.into())
    }

    /// Short description for log lines.
    pub fn describe(&self) -> String {
        match self {
            DataSource::File(p) => format!("file {}", p.display()),
            DataSource::Url(u) => format!("url {}", u),
            DataSource::Json(_) => "inline JSON".to_string(),
            DataSource::Records(r) => format!("{} inline records", r.len()),
        }
    }
}

/// Loads building records from a [`DataSource`].
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    /// If true, URL sources are refused.
    pub offline: bool,
    timeout: Duration,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(false, DEFAULT_TIMEOUT)
    }
}

impl DatasetLoader {
    pub fn new(offline: bool, timeout: Duration) -> Self {
        Self { offline, timeout }
    }

    /// HTTP client for one download. Built per call so no blocking client
    /// outlives the load.
    fn client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?)
    }

    /// Load every building record from `source`.
    pub fn load(&self, source: &DataSource) -> Result<Vec<BuildingRecord>> {
        log::info!("Loading building dataset from {}", source.describe());
        let records = match source {
            DataSource::File(path) => records_from_document(read_json_file(path)?)?,
            DataSource::Url(url) => records_from_document(self.fetch(url)?)?,
            DataSource::Json(doc) => records_from_document(doc.clone())?,
            DataSource::Records(records) => records.clone(),
        };
        log::info!("Loaded {} buildings", records.len());
        Ok(records)
    }

    fn fetch(&self, url: &str) -> Result<Value> {
        if self.offline {
            return Err(JreitError::NotFound(format!(
                "Dataset {} cannot be fetched while offline mode is enabled",
                url
            )));
        }
        let resp = self.client()?.get(url).send()?.error_for_status()?;
        Ok(resp.json()?)
    }
}

/// Read and parse a JSON file (handles `.gz` transparently).
pub fn read_json_file(path: &Path) -> Result<Value> {
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };

    serde_json::from_str(&contents).map_err(|e| {
        log::warn!("Dataset file {} is not valid JSON: {}", path.display(), e);
        JreitError::from(e)
    })
}

/// Pull the building list out of a dataset document.
///
/// Accepts a bare array of records, otherwise tries `data.jReitBuildings`
/// and then a top-level `jReitBuildings`.
pub fn records_from_document(mut doc: Value) -> Result<Vec<BuildingRecord>> {
    let buildings = if doc.is_array() {
        doc
    } else if let Some(v) = doc.pointer_mut("/data/jReitBuildings") {
        v.take()
    } else if let Some(v) = doc.get_mut("jReitBuildings") {
        v.take()
    } else {
        return Err(JreitError::NotFound(
            "Dataset document has no jReitBuildings list".to_string(),
        ));
    };

    Ok(serde_json::from_value(buildings)?)
}
