//! Score join: catalog roles × user results → scored roles.

use tracing::{debug, warn};

use affinity_core::constants::MISSING_SCORE;
use affinity_core::models::{ResultSet, Role, ScoredRole};

/// Pair every catalog role with the user's score for it.
///
/// - Roles without a result entry score `0`; they are never excluded.
/// - Result keys that name no catalog role are ignored.
/// - Non-finite scores are treated as missing.
///
/// Output follows catalog order, one entry per role.
pub fn join(roles: &[Role], results: &ResultSet) -> Vec<ScoredRole> {
    let scored: Vec<ScoredRole> = roles
        .iter()
        .map(|role| {
            let score = match results.score_for(role.id.as_str()) {
                Some(s) if s.is_finite() => s,
                Some(s) => {
                    warn!(role = %role.id, score = s, "non-finite score treated as missing");
                    MISSING_SCORE
                }
                None => MISSING_SCORE,
            };
            ScoredRole::new(role.clone(), score)
        })
        .collect();

    let ignored = results
        .iter()
        .filter(|(key, _)| !roles.iter().any(|r| r.id.as_str() == key.as_str()))
        .count();
    debug!(roles = scored.len(), ignored, "joined results against catalog");

    scored
}
