use std::collections::HashMap;

use affinity_core::errors::{AffinityError, AffinityResult};
use affinity_core::models::{ResultSet, UserId};
use affinity_core::traits::IResultsStore;

/// Results held in memory, keyed by user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultsStore {
    results: HashMap<UserId, ResultSet>,
}

impl InMemoryResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) a user's results.
    pub fn insert(&mut self, user_id: UserId, results: ResultSet) -> Option<ResultSet> {
        self.results.insert(user_id, results)
    }

    pub fn user_count(&self) -> usize {
        self.results.len()
    }
}

impl IResultsStore for InMemoryResultsStore {
    fn fetch_user_results(&self, user_id: &UserId) -> AffinityResult<ResultSet> {
        self.results
            .get(user_id)
            .cloned()
            .ok_or_else(|| AffinityError::ResultsNotFound {
                user_id: user_id.to_string(),
            })
    }
}
