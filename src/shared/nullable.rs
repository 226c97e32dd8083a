//! Deserializer for patch fields where an explicit `null` clears the value.
//!
//! Use with `#[serde(default, deserialize_with = "crate::shared::nullable::deserialize")]`
//! on an `Option<Option<T>>`: an omitted field stays `None`, `null` becomes
//! `Some(None)` and a value becomes `Some(Some(value))`.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::deserialize")]
        complaint_id: Option<Option<i64>>,
    }

    #[test]
    fn test_omitted_null_and_value_are_distinct() {
        let omitted: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(omitted.complaint_id, None);

        let cleared: Patch = serde_json::from_str(r#"{"complaint_id": null}"#).unwrap();
        assert_eq!(cleared.complaint_id, Some(None));

        let set: Patch = serde_json::from_str(r#"{"complaint_id": 42}"#).unwrap();
        assert_eq!(set.complaint_id, Some(Some(42)));
    }
}
