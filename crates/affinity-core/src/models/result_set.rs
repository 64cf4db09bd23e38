use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A user's scores, keyed by raw role id.
///
/// Keys are kept as plain strings: the store may hold ids the catalog does
/// not know, and those are only dropped when joined against the catalog.
/// Entries whose value is not a number (`null`, strings, objects) are dropped
/// on deserialization, so the role reads as having no score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    scores: BTreeMap<String, f64>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role_id: impl Into<String>, score: f64) -> Option<f64> {
        self.scores.insert(role_id.into(), score)
    }

    /// Score recorded for a role id, if any.
    pub fn score_for(&self, role_id: &str) -> Option<f64> {
        self.scores.get(role_id).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.scores.iter()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, RawScore>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(role_id, score)| match score {
                RawScore::Number(s) => Some((role_id, s)),
                RawScore::Other(_) => None,
            })
            .collect())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
