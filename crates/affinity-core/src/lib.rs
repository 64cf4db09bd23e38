//! # affinity-core
//!
//! Foundation crate for the role affinity breakdown.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AffinityConfig;
pub use errors::{AffinityError, AffinityResult};
pub use models::{AlignmentTier, ResultSet, Role, RoleId, ScoredRole, UserId};
