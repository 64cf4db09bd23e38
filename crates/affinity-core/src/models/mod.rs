//! Shared data model: catalog roles, user results, and derived ranking types.

mod identifiers;
mod narrative;
mod result_set;
mod role;
mod scored_role;
mod tier;

pub use identifiers::{RoleId, UserId};
pub use narrative::NarrativeVariant;
pub use result_set::ResultSet;
pub use role::Role;
pub use scored_role::ScoredRole;
pub use tier::AlignmentTier;
