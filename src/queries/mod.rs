//! Query modules for the J-REIT SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Dataset`](crate::dataset::Dataset) and exposes lookups over it.

pub mod buildings;
pub mod charts;
pub mod search;

pub use buildings::BuildingQuery;
pub use charts::ChartQuery;
pub use search::SearchQuery;
