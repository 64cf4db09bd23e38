use crate::models::{Role, RoleId};

/// Read access to the static role catalog.
pub trait IRoleCatalog: Send + Sync {
    /// Every role, in catalog order.
    fn all_roles(&self) -> &[Role];

    fn get_role_by_id(&self, id: &RoleId) -> Option<&Role> {
        self.all_roles().iter().find(|r| &r.id == id)
    }

    /// Whether `raw` names a role in this catalog.
    fn is_role_id(&self, raw: &str) -> bool {
        self.all_roles().iter().any(|r| r.id.as_str() == raw)
    }
}
