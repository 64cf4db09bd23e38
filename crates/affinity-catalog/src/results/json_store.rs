use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use affinity_core::errors::{AffinityError, AffinityResult};
use affinity_core::models::{ResultSet, UserId};
use affinity_core::traits::IResultsStore;

use super::InMemoryResultsStore;

/// Read-only results store backed by a JSON document of the form
/// `{ "<user id>": { "<role id>": score, ... }, ... }`.
#[derive(Debug, Clone, Default)]
pub struct JsonResultsStore {
    inner: InMemoryResultsStore,
}

impl JsonResultsStore {
    pub fn from_json(json: &str) -> AffinityResult<Self> {
        let document: BTreeMap<String, ResultSet> =
            serde_json::from_str(json).map_err(|e| AffinityError::ResultsLoadFailed {
                reason: e.to_string(),
            })?;

        let mut inner = InMemoryResultsStore::new();
        for (raw_user, results) in document {
            inner.insert(UserId::parse(&raw_user)?, results);
        }

        debug!(users = inner.user_count(), "loaded results store");
        Ok(Self { inner })
    }

    pub fn from_path(path: impl AsRef<Path>) -> AffinityResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| AffinityError::ResultsLoadFailed {
                reason: format!("{}: {e}", path.display()),
            })?;
        Self::from_json(&content)
    }

    pub fn user_count(&self) -> usize {
        self.inner.user_count()
    }
}

impl IResultsStore for JsonResultsStore {
    fn fetch_user_results(&self, user_id: &UserId) -> AffinityResult<ResultSet> {
        self.inner.fetch_user_results(user_id)
    }
}
