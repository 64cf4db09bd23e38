use std::collections::HashMap;

use affinity_core::errors::CatalogError;
use affinity_core::models::{Role, RoleId};
use affinity_core::traits::IRoleCatalog;

/// The loaded role catalog.
///
/// Role order is the order of the source document and serves as the
/// tie-break order when ranking.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: Vec<Role>,
    index: HashMap<RoleId, usize>,
}

impl RoleCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn from_roles(roles: Vec<Role>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(roles.len());
        for (position, role) in roles.iter().enumerate() {
            if index.insert(role.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateRole {
                    role_id: role.id.to_string(),
                });
            }
        }
        Ok(Self { roles, index })
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RoleId> {
        self.roles.iter().map(|r| &r.id)
    }

    /// Resolve a raw id to a known `RoleId`.
    pub fn resolve(&self, raw: &str) -> Option<&RoleId> {
        self.index.get(raw).map(|&i| &self.roles[i].id)
    }
}

impl IRoleCatalog for RoleCatalog {
    fn all_roles(&self) -> &[Role] {
        &self.roles
    }

    fn get_role_by_id(&self, id: &RoleId) -> Option<&Role> {
        self.index.get(id).map(|&i| &self.roles[i])
    }

    fn is_role_id(&self, raw: &str) -> bool {
        self.index.contains_key(raw)
    }
}
