//! Validated identifiers.
//!
//! # Examples
//!
//! ```
//! use affinity_core::models::{RoleId, UserId};
//!
//! let role = RoleId::parse("navigator").unwrap();
//! assert_eq!(role.as_str(), "navigator");
//! assert!(RoleId::parse("").is_err());
//!
//! let user = UserId::parse("24601").unwrap();
//! assert_eq!(user.to_string(), "24601");
//! assert!(UserId::parse("../etc").is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ROLE_ID_LEN, MAX_USER_ID_LEN};
use crate::errors::{AffinityError, AffinityResult};

fn is_identifier(raw: &str, max_len: usize) -> bool {
    !raw.is_empty()
        && raw.len() <= max_len
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Identifier of a role in the catalog.
///
/// Only the syntax is checked here. Membership in the closed set of known
/// roles is decided by the loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleId(String);

impl RoleId {
    pub fn parse(raw: &str) -> AffinityResult<Self> {
        if is_identifier(raw, MAX_ROLE_ID_LEN) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AffinityError::InvalidRoleId {
                raw: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoleId {
    type Error = AffinityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoleId> for String {
    fn from(id: RoleId) -> Self {
        id.0
    }
}

impl Borrow<str> for RoleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a user whose results are looked up in the results store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: &str) -> AffinityResult<Self> {
        if is_identifier(raw, MAX_USER_ID_LEN) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AffinityError::InvalidUserId {
                raw: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = AffinityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
