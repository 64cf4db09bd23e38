use crate::errors::AffinityResult;
use crate::models::{ResultSet, UserId};

/// Source of pre-computed user results.
pub trait IResultsStore: Send + Sync {
    /// Fetch a user's scores. Returns `AffinityError::ResultsNotFound` for unknown users.
    fn fetch_user_results(&self, user_id: &UserId) -> AffinityResult<ResultSet>;
}
