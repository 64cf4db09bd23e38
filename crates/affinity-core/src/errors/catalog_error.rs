/// Role catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse catalog: {reason}")]
    Parse { reason: String },

    #[error("duplicate role id in catalog: {role_id}")]
    DuplicateRole { role_id: String },

    #[error("catalog entry has invalid role id: {raw:?}")]
    InvalidRoleId { raw: String },
}
