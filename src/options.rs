//! Interest Option Codec
//!
//! Converts between the store's interest shape (a list of single-key maps)
//! and the flat records the checkbox group renders.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{InterestOption, WireOption};

/// Conversion failure on the store-to-UI path.
///
/// A malformed entry rejects the whole collection; nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionCodecError {
    #[error("interest entry {index} is empty")]
    EmptyEntry { index: usize },
    #[error("interest entry {index} has {count} keys, expected exactly one")]
    AmbiguousEntry { index: usize, count: usize },
    #[error("interest id \"{id}\" appears more than once")]
    DuplicateId { id: String },
}

/// UI records to store shape. Total; order preserved.
pub fn to_wire(records: &[InterestOption]) -> Vec<WireOption> {
    records
        .iter()
        .map(|rec| WireOption::new(&rec.id, &rec.label, rec.checked))
        .collect()
}

/// Store shape to UI records. Order preserved.
pub fn to_ui(wire: &[WireOption]) -> Result<Vec<InterestOption>, OptionCodecError> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(wire.len());
    for (index, entry) in wire.iter().enumerate() {
        let mut pairs = entry.0.iter();
        let (id, attrs) = match (pairs.next(), pairs.next()) {
            (Some(pair), None) => pair,
            (None, _) => return Err(OptionCodecError::EmptyEntry { index }),
            (Some(_), Some(_)) => {
                return Err(OptionCodecError::AmbiguousEntry {
                    index,
                    count: entry.0.len(),
                })
            }
        };
        if !seen.insert(id.clone()) {
            return Err(OptionCodecError::DuplicateId { id: id.clone() });
        }
        records.push(InterestOption {
            id: id.clone(),
            label: attrs.label.clone(),
            checked: attrs.is_checked,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InterestAttrs;
    use std::collections::BTreeMap;

    fn sample_wire() -> Vec<WireOption> {
        vec![
            WireOption::new("sports", "Sports", true),
            WireOption::new("music", "Music", false),
        ]
    }

    fn sample_records() -> Vec<InterestOption> {
        vec![
            InterestOption {
                id: "sports".to_string(),
                label: "Sports".to_string(),
                checked: true,
            },
            InterestOption {
                id: "music".to_string(),
                label: "Music".to_string(),
                checked: false,
            },
        ]
    }

    #[test]
    fn test_to_ui_extracts_flat_records() {
        let records = to_ui(&sample_wire()).expect("well-formed wire");
        assert_eq!(records, sample_records());
    }

    #[test]
    fn test_wire_round_trip() {
        let wire = sample_wire();
        let records = to_ui(&wire).expect("well-formed wire");
        assert_eq!(to_wire(&records), wire);
    }

    #[test]
    fn test_records_round_trip() {
        let records = sample_records();
        assert_eq!(to_ui(&to_wire(&records)), Ok(records));
    }

    #[test]
    fn test_empty_in_empty_out() {
        assert_eq!(to_wire(&[]), Vec::<WireOption>::new());
        assert_eq!(to_ui(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_empty_entry_rejected() {
        let wire = vec![WireOption::new("sports", "Sports", true), WireOption(BTreeMap::new())];
        assert_eq!(to_ui(&wire), Err(OptionCodecError::EmptyEntry { index: 1 }));
    }

    #[test]
    fn test_multi_key_entry_rejected() {
        let mut entry = BTreeMap::new();
        entry.insert(
            "sports".to_string(),
            InterestAttrs {
                label: "Sports".to_string(),
                is_checked: true,
            },
        );
        entry.insert(
            "music".to_string(),
            InterestAttrs {
                label: "Music".to_string(),
                is_checked: false,
            },
        );
        assert_eq!(
            to_ui(&[WireOption(entry)]),
            Err(OptionCodecError::AmbiguousEntry { index: 0, count: 2 })
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let wire = vec![
            WireOption::new("sports", "Sports", true),
            WireOption::new("sports", "Sports again", false),
        ];
        assert_eq!(
            to_ui(&wire),
            Err(OptionCodecError::DuplicateId {
                id: "sports".to_string()
            })
        );
    }
}
