//! JSON catalog loading.
//!
//! The catalog document names two narratives differently from the in-memory
//! model: `core_rank_desc` becomes `high_rank_desc` and
//! `peripheral_rank_desc` becomes `low_rank_desc`. The in-memory names are
//! accepted too. Either a bare array or a `{ "roles": [...] }` envelope is
//! accepted.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use affinity_core::errors::CatalogError;
use affinity_core::models::{Role, RoleId};
use affinity_observability::catalog_span;

use crate::catalog::RoleCatalog;

#[derive(Debug, Deserialize)]
struct RoleRecord {
    id: String,
    name: String,
    #[serde(default)]
    role_desc: String,
    #[serde(default)]
    core_drive: String,
    #[serde(default)]
    most_like_when: String,
    #[serde(default, alias = "high_rank_desc")]
    core_rank_desc: String,
    #[serde(default, alias = "low_rank_desc")]
    peripheral_rank_desc: String,
    #[serde(default)]
    top_rank_desc: String,
    #[serde(default)]
    bottom_rank_desc: String,
}

impl RoleRecord {
    fn into_role(self) -> Result<Role, CatalogError> {
        let id = RoleId::parse(&self.id).map_err(|_| CatalogError::InvalidRoleId {
            raw: self.id.clone(),
        })?;
        Ok(Role {
            id,
            name: self.name,
            role_desc: self.role_desc,
            core_drive: self.core_drive,
            most_like_when: self.most_like_when,
            high_rank_desc: self.core_rank_desc,
            low_rank_desc: self.peripheral_rank_desc,
            top_rank_desc: self.top_rank_desc,
            bottom_rank_desc: self.bottom_rank_desc,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<RoleRecord>),
    Envelope { roles: Vec<RoleRecord> },
}

/// Parse a catalog from a JSON string.
pub fn load_catalog_from_str(json: &str) -> Result<RoleCatalog, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(json).map_err(|e| CatalogError::Parse {
            reason: e.to_string(),
        })?;
    let records = match document {
        CatalogDocument::Bare(records) | CatalogDocument::Envelope { roles: records } => records,
    };

    let roles = records
        .into_iter()
        .map(RoleRecord::into_role)
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = RoleCatalog::from_roles(roles)?;

    debug!(roles = catalog.len(), "loaded role catalog");
    Ok(catalog)
}

/// Read and parse a catalog file.
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<RoleCatalog, CatalogError> {
    let path = path.as_ref();
    let span = catalog_span!(path.display());
    let _guard = span.enter();

    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_catalog_from_str(&content)
}
