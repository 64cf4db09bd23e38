//! Span definitions for the breakdown pipeline.

/// Create a breakdown span for one user.
#[macro_export]
macro_rules! breakdown_span {
    ($user_id:expr) => {
        tracing::info_span!("affinity.breakdown", user_id = %$user_id)
    };
}

/// Create a catalog load span.
#[macro_export]
macro_rules! catalog_span {
    ($source:expr) => {
        tracing::info_span!("affinity.catalog", source = %$source)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const BREAKDOWN: &str = "affinity.breakdown";
    pub const CATALOG: &str = "affinity.catalog";
}
