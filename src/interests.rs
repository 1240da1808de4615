//! Interests Sync Controller
//!
//! Holds the UI-side interest records between the store snapshot and the
//! checkbox group, and republishes the full list to the form layer.

use crate::models::{InterestOption, InterestToggle, WireOption};
use crate::options::{self, OptionCodecError};

/// UI-side interest list, kept in lock step with the form's field value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestsSync {
    current: Vec<InterestOption>,
}

impl InterestsSync {
    /// Seed from records already converted out of the snapshot. The caller
    /// hands the same records to the form coordinator so both sides start
    /// from one conversion.
    pub fn from_records(records: Vec<InterestOption>) -> Self {
        Self { current: records }
    }

    pub fn records(&self) -> &[InterestOption] {
        &self.current
    }

    /// Wholesale replace from an upstream snapshot change
    pub fn on_external_change(
        &mut self,
        wire: &[WireOption],
    ) -> Result<&[InterestOption], OptionCodecError> {
        self.current = options::to_ui(wire)?;
        Ok(&self.current)
    }

    /// Apply a change event from the checkbox group.
    ///
    /// The group emits the complete selection on every interaction, never a
    /// diff, so the incoming list replaces the held one wholesale. Missing
    /// attributes default to an empty label / unchecked.
    ///
    /// Returns the new record list; the caller writes it into the form's
    /// interests field as well.
    pub fn on_user_toggle(&mut self, partials: Vec<InterestToggle>) -> &[InterestOption] {
        self.current = partials
            .into_iter()
            .map(|partial| InterestOption {
                id: partial.id,
                label: partial.label.unwrap_or_default(),
                checked: partial.checked.unwrap_or(false),
            })
            .collect();
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_toggle_defaults_missing_attrs() {
        let mut sync = InterestsSync::default();
        let records = sync.on_user_toggle(vec![InterestToggle {
            id: "a".to_string(),
            label: None,
            checked: None,
        }]);
        assert_eq!(
            records,
            &[InterestOption {
                id: "a".to_string(),
                label: String::new(),
                checked: false,
            }]
        );
    }

    #[test]
    fn test_user_toggle_replaces_wholesale() {
        let wire = [
            WireOption::new("sports", "Sports", true),
            WireOption::new("music", "Music", false),
        ];
        let mut sync = InterestsSync::from_records(options::to_ui(&wire).expect("well-formed wire"));

        let records = sync
            .on_user_toggle(vec![
                InterestToggle {
                    id: "sports".to_string(),
                    label: Some("Sports".to_string()),
                    checked: Some(true),
                },
                InterestToggle {
                    id: "music".to_string(),
                    label: Some("Music".to_string()),
                    checked: Some(true),
                },
            ])
            .to_vec();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|rec| rec.checked));
        assert_eq!(sync.records(), &records[..]);
    }

    #[test]
    fn test_external_change_replaces_records() {
        let seed = [WireOption::new("sports", "Sports", false)];
        let mut sync = InterestsSync::from_records(options::to_ui(&seed).expect("well-formed wire"));

        let records = sync
            .on_external_change(&[WireOption::new("movies", "Movies", true)])
            .expect("well-formed wire");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "movies");
        assert!(records[0].checked);
    }

    #[test]
    fn test_external_change_surfaces_codec_error() {
        let mut sync = InterestsSync::default();
        let malformed = WireOption(Default::default());
        assert_eq!(
            sync.on_external_change(&[malformed]),
            Err(OptionCodecError::EmptyEntry { index: 0 })
        );
    }
}
