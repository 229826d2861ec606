//! Async client tests. Only built with the `async` feature.

#![cfg(feature = "async")]

mod common;

use common::write_sample_file;
use jreit_sdk::{AsyncJreitSdk, JreitError};

#[tokio::test]
async fn build_and_run() {
    let file = write_sample_file();
    let sdk = AsyncJreitSdk::builder().path(file.path()).build().await.unwrap();

    assert_eq!(sdk.count().await.unwrap(), 4);

    let ids = sdk
        .run(|s| {
            let found = s.search().text("osaka")?;
            Ok(found.ids().into_iter().map(String::from).collect::<Vec<_>>())
        })
        .await
        .unwrap();
    assert_eq!(ids, vec!["2"]);
}

#[tokio::test]
async fn errors_pass_through_run() {
    let file = write_sample_file();
    let sdk = AsyncJreitSdk::builder().path(file.path()).build().await.unwrap();

    let result = sdk.run(|s| s.buildings().require("99").map(|b| b.id.clone())).await;
    assert!(matches!(result, Err(JreitError::NotFound(_))));
}

#[tokio::test]
async fn reload_swaps_dataset() {
    let file = write_sample_file();
    let sdk = AsyncJreitSdk::builder().path(file.path()).build().await.unwrap();

    std::fs::write(file.path(), r#"{"jReitBuildings": [{"id": "only"}]}"#).unwrap();
    assert_eq!(sdk.reload().await.unwrap(), 1);
    assert_eq!(sdk.count().await.unwrap(), 1);
}

#[tokio::test]
async fn build_without_source_fails() {
    let result = AsyncJreitSdk::builder().build().await;
    assert!(matches!(result, Err(JreitError::InvalidArgument(_))));
}
