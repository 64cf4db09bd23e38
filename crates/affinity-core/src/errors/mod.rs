mod breakdown_error;
mod catalog_error;

pub use breakdown_error::BreakdownError;
pub use catalog_error::CatalogError;

/// Crate-wide result alias.
pub type AffinityResult<T> = Result<T, AffinityError>;

/// Top-level error for every affinity subsystem.
#[derive(Debug, thiserror::Error)]
pub enum AffinityError {
    #[error("invalid role id: {raw:?}")]
    InvalidRoleId { raw: String },

    #[error("invalid user id: {raw:?}")]
    InvalidUserId { raw: String },

    #[error("unknown alignment tier: {raw:?}")]
    InvalidTier { raw: String },

    #[error("results not found for user {user_id}")]
    ResultsNotFound { user_id: String },

    #[error("failed to load results: {reason}")]
    ResultsLoadFailed { reason: String },

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Breakdown(#[from] BreakdownError),
}
