//! BreakdownEngine: fetches inputs from the collaborators and computes a
//! fresh breakdown per request.

use tracing::info;

use affinity_core::config::AffinityConfig;
use affinity_core::errors::AffinityResult;
use affinity_core::models::{ResultSet, UserId};
use affinity_core::traits::{IResultsStore, IRoleCatalog};
use affinity_observability::breakdown_span;

use crate::alignment::AlignmentRules;
use crate::breakdown::{compute_breakdown, Breakdown};

/// Orchestrates catalog + results → breakdown.
pub struct BreakdownEngine<'a> {
    catalog: &'a dyn IRoleCatalog,
    results: &'a dyn IResultsStore,
    rules: AlignmentRules,
}

impl<'a> BreakdownEngine<'a> {
    pub fn new(catalog: &'a dyn IRoleCatalog, results: &'a dyn IResultsStore) -> Self {
        Self {
            catalog,
            results,
            rules: AlignmentRules::default(),
        }
    }

    /// Use the tier windows from `config`.
    pub fn with_config(mut self, config: &AffinityConfig) -> Self {
        self.rules = AlignmentRules::from(&config.alignment);
        self
    }

    pub fn with_rules(mut self, rules: AlignmentRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &AlignmentRules {
        &self.rules
    }

    /// Compute a breakdown for an already-fetched result set.
    pub fn breakdown_for_results(&self, results: &ResultSet) -> Breakdown {
        compute_breakdown(self.catalog.all_roles(), results, self.rules)
    }

    /// Validate `raw_user_id`, fetch that user's results, and compute their breakdown.
    pub fn breakdown_for_user(&self, raw_user_id: &str) -> AffinityResult<Breakdown> {
        let user_id = UserId::parse(raw_user_id)?;
        let span = breakdown_span!(user_id);
        let _guard = span.enter();

        let results = self.results.fetch_user_results(&user_id)?;
        let breakdown = self.breakdown_for_results(&results);

        info!(
            roles = breakdown.len(),
            scored = results.len(),
            top = ?breakdown.top_role().map(|r| r.id().as_str()),
            "breakdown computed"
        );
        Ok(breakdown)
    }
}
