//! # affinity-catalog
//!
//! The static role catalog and the user results stores it is joined against.

pub mod actions;
pub mod catalog;
pub mod loader;
pub mod results;

pub use actions::get_role;
pub use catalog::RoleCatalog;
pub use loader::{load_catalog_from_path, load_catalog_from_str};
pub use results::{fetch_results, InMemoryResultsStore, JsonResultsStore};
