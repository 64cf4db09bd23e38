//! Seams to the external collaborators that supply catalog roles and user results.

mod catalog;
mod results_store;

pub use catalog::IRoleCatalog;
pub use results_store::IResultsStore;
