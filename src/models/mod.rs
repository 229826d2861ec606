pub mod building;
pub mod chart;
pub mod search;
pub mod summary;

pub use building::*;
pub use chart::*;
pub use search::*;
pub use summary::*;
