use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of complaint ids an officer confirmed as reviewed.
///
/// Persisted as a JSON array in a text column. Decoding never fails: any
/// stored value that is not an array of integers reads back as the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatedItems(BTreeSet<i64>);

impl ValidatedItems {
    /// Keep the requested ids that belong to the report's complaint.
    pub fn intersect(requested: &[i64], complaint_id: Option<i64>) -> Self {
        Self(
            complaint_id
                .filter(|id| requested.contains(id))
                .into_iter()
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.0.iter().copied().collect()
    }

    /// Encode for the `validated_items` column
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Decode the `validated_items` column
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str::<BTreeSet<i64>>(raw) {
            Ok(items) => Self(items),
            Err(e) => {
                tracing::warn!("Discarding malformed validated_items {:?}: {}", raw, e);
                Self::default()
            }
        }
    }
}

impl FromIterator<i64> for ValidatedItems {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
