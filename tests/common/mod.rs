//! Shared test fixtures for the J-REIT SDK integration tests.
//!
//! Provides a small sample dataset as a JSON document, as parsed records,
//! as a `Dataset`, and written to a temporary file.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;

use jreit_sdk::{BuildingRecord, Dataset};
use tempfile::NamedTempFile;

/// The sample dataset document, shaped like the published JSON
/// (`{"data": {"jReitBuildings": [...]}}`).
pub fn sample_document() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "jReitBuildings": [
                {
                    "id": "1",
                    "acquisition": {
                        "acquisitionPrice": 9_500_000_000_i64,
                        "acquisitionDate": "2015-04-01",
                        "initialCapRate": "4.8"
                    },
                    "buildingSpec": {
                        "name": "Test Building 1",
                        "address": "Tokyo, Japan",
                        "completedMonth": 3,
                        "completedYear": 2001
                    },
                    "yieldEvaluation": {
                        "appraisedPrice": 10_000_000_i64,
                        "capRate": "4.5"
                    },
                    "assetType": { "isOffice": true },
                    "capRateHistories": [
                        { "id": "h1", "jReitBuildingId": "1", "capRate": "4.6", "closingDate": "2020-02-01" },
                        { "id": "h2", "jReitBuildingId": "1", "capRate": "4.5", "closingDate": "2020-01-01" }
                    ],
                    "financials": [
                        { "leasing": { "occupancyRate": "95" }, "closingDate": "2020-06-30" },
                        { "leasing": { "occupancyRate": "93" }, "closingDate": "2019-12-31" },
                        { "leasing": { "occupancyRate": "90" } }
                    ]
                },
                {
                    "id": "2",
                    "acquisition": {
                        "acquisitionPrice": 14_000_000_000_i64,
                        "acquisitionDate": "2012-10-15",
                        "initialCapRate": "5.5"
                    },
                    "buildingSpec": {
                        "name": "Test Building 2",
                        "address": "Osaka, Japan"
                    },
                    "yieldEvaluation": {
                        "appraisedPrice": 15_000_000_i64,
                        "capRate": "5.2"
                    },
                    "assetType": { "isRetail": true }
                },
                {
                    "id": "3",
                    "acquisition": {
                        "acquisitionPrice": 30_000_000_000_i64,
                        "acquisitionDate": "2018-01-10",
                        "initialCapRate": "3.9"
                    },
                    "buildingSpec": {
                        "name": "Shinjuku Logistics Center",
                        "address": "東京都新宿区西新宿1-1"
                    },
                    "yieldEvaluation": {
                        "appraisedPrice": 32_000_000_000_i64,
                        "capRate": "3.8"
                    },
                    "assetType": { "isLogistic": true, "isOffice": true },
                    "capRateHistories": [
                        { "id": "h3", "jReitBuildingId": "3", "capRate": "4.0", "closingDate": "2018-06-30" },
                        { "id": "h4", "jReitBuildingId": "3", "capRate": "3.9", "closingDate": "2019-06-30" },
                        { "id": "h5", "jReitBuildingId": "3", "capRate": "3.8", "closingDate": "2020-06-30" }
                    ],
                    "financials": [
                        { "leasing": { "occupancyRate": "100" }, "closingDate": "2020-06-30" }
                    ]
                },
                {
                    "id": "4",
                    "acquisition": {
                        "acquisitionPrice": 2_000_000_000_i64,
                        "acquisitionDate": "not a date",
                        "initialCapRate": ""
                    },
                    "buildingSpec": {
                        "name": "Namba Hotel",
                        "address": "大阪府大阪市中央区"
                    },
                    "yieldEvaluation": {
                        "appraisedPrice": 2_500_000_000_i64,
                        "capRate": "n/a"
                    },
                    "assetType": { "isHotel": true },
                    "financials": [
                        { "leasing": { "occupancyRate": "" }, "closingDate": "2020-03-31" }
                    ]
                }
            ]
        }
    })
}

/// The sample records, parsed.
pub fn sample_records() -> Vec<BuildingRecord> {
    let doc = sample_document();
    serde_json::from_value(doc["data"]["jReitBuildings"].clone()).unwrap()
}

pub fn sample_dataset() -> Dataset {
    Dataset::new(sample_records())
}

/// Write the sample document to a temporary `.json` file.
///
/// The caller must keep the returned file alive for as long as the path is
/// used.
pub fn write_sample_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(sample_document().to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Build a raw parameter map from key/value pairs.
pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
