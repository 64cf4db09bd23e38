use affinity_core::errors::{AffinityError, AffinityResult};
use affinity_core::models::{Role, RoleId};
use affinity_core::traits::IRoleCatalog;

/// Look up a single role by a caller-supplied id.
///
/// A missing id, a malformed id, and an id outside the catalog are all
/// reported as `InvalidRoleId`.
pub fn get_role(catalog: &dyn IRoleCatalog, raw_id: Option<&str>) -> AffinityResult<Role> {
    let raw = raw_id.unwrap_or_default();
    let invalid = || AffinityError::InvalidRoleId {
        raw: raw.to_string(),
    };

    let id = RoleId::parse(raw).map_err(|_| invalid())?;
    catalog.get_role_by_id(&id).cloned().ok_or_else(invalid)
}
