//! Frontend Models
//!
//! Data shapes shared between the answers store and the form/table views.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label and checked flag of one interest, as the store carries it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestAttrs {
    pub label: String,
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
}

/// One interest entry in store shape: a single-key map from id to attrs.
///
/// Invariant: exactly one key per entry, ids unique across the collection.
/// The codec in `options` rejects entries that break it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireOption(pub BTreeMap<String, InterestAttrs>);

impl WireOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, is_checked: bool) -> Self {
        let mut entry = BTreeMap::new();
        entry.insert(
            id.into(),
            InterestAttrs {
                label: label.into(),
                is_checked,
            },
        );
        Self(entry)
    }
}

/// Flat interest record consumed by the checkbox group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestOption {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

/// Partial record emitted by the checkbox group; only `id` is guaranteed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestToggle {
    pub id: String,
    pub label: Option<String>,
    pub checked: Option<bool>,
}

/// Full answers state owned by the store.
///
/// `age` is kept in form representation (a string); the validation schema
/// enforces numeric shape before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswersSnapshot {
    pub name: String,
    pub age: String,
    pub mail: String,
    pub interests: Vec<WireOption>,
}

impl Default for AnswersSnapshot {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            mail: String::new(),
            interests: vec![
                WireOption::new("sports", "Sports", false),
                WireOption::new("music", "Music", false),
                WireOption::new("movies", "Movies", false),
                WireOption::new("cooking", "Cooking", false),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_option_json_shape() {
        let entry = WireOption::new("sports", "Sports", true);
        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value, json!({ "sports": { "label": "Sports", "isChecked": true } }));
    }

    #[test]
    fn test_wire_option_json_round_trip() {
        let raw = r#"[{"sports":{"label":"Sports","isChecked":true}},{"music":{"label":"Music","isChecked":false}}]"#;
        let parsed: Vec<WireOption> = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(parsed.len(), 2);
        assert_eq!(serde_json::to_string(&parsed).expect("serialize"), raw);
    }

    #[test]
    fn test_default_snapshot_starts_unchecked() {
        let snapshot = AnswersSnapshot::default();
        assert!(snapshot.name.is_empty());
        assert!(snapshot
            .interests
            .iter()
            .flat_map(|entry| entry.0.values())
            .all(|attrs| !attrs.is_checked));
    }
}
