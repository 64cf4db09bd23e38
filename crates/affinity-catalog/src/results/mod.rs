//! User results stores.

mod json_store;
mod memory_store;

pub use json_store::JsonResultsStore;
pub use memory_store::InMemoryResultsStore;

use affinity_core::errors::AffinityResult;
use affinity_core::models::{ResultSet, UserId};
use affinity_core::traits::IResultsStore;

/// Validate a caller-supplied user id, then fetch that user's results.
///
/// A missing or malformed id fails with `InvalidUserId` before the store is
/// consulted; an unknown user fails with `ResultsNotFound`.
pub fn fetch_results(store: &dyn IResultsStore, raw_user_id: Option<&str>) -> AffinityResult<ResultSet> {
    let user_id = UserId::parse(raw_user_id.unwrap_or_default())?;
    store.fetch_user_results(&user_id)
}
