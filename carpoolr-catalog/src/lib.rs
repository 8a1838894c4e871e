pub mod catalog;
pub mod search;
pub mod seed;

pub use catalog::RideCatalog;
pub use search::{search, SearchCriteria};
