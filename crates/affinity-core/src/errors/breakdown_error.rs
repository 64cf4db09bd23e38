/// Errors raised while querying a computed breakdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreakdownError {
    #[error("role {role_id} is not part of the current ranking")]
    SelectionNotFound { role_id: String },
}
