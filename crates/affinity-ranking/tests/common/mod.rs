#![allow(dead_code)]

use affinity_core::models::{ResultSet, Role, RoleId};

/// A role whose narrative texts name the role and the variant.
pub fn make_role(id: &str) -> Role {
    Role {
        id: RoleId::parse(id).unwrap(),
        name: format!("Role {id}"),
        role_desc: format!("{id}:default"),
        core_drive: format!("{id}:drive"),
        most_like_when: format!("{id}:when"),
        high_rank_desc: format!("{id}:core"),
        low_rank_desc: format!("{id}:peripheral"),
        top_rank_desc: format!("{id}:top"),
        bottom_rank_desc: format!("{id}:bottom"),
    }
}

pub fn make_roles(ids: &[&str]) -> Vec<Role> {
    ids.iter().map(|id| make_role(id)).collect()
}

pub fn results(pairs: &[(&str, f64)]) -> ResultSet {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

pub fn id(raw: &str) -> RoleId {
    RoleId::parse(raw).unwrap()
}
