//! # affinity-ranking
//!
//! Turns a user's raw scores into a ranked, tiered breakdown:
//! score join → stable rank → alignment tiers → narrative selection.
//!
//! Everything here is pure and synchronous. The [`BreakdownEngine`] is the
//! only piece that talks to the catalog and results collaborators, and it
//! recomputes the breakdown from scratch on every call.

pub mod alignment;
pub mod breakdown;
pub mod engine;
pub mod join;
pub mod narrative;
pub mod rank;
pub mod scale;
pub mod session;

pub use alignment::AlignmentRules;
pub use breakdown::{compute_breakdown, Breakdown, BreakdownEntry};
pub use engine::BreakdownEngine;
pub use join::join;
pub use narrative::{describe, select_variant};
pub use rank::{rank, RankedRoles};
pub use session::BreakdownSession;
