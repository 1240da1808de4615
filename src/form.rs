//! Form State Coordinator
//!
//! Controlled state for the answers form: every field re-validates on each
//! change, and the submit gate allows at most one request in flight.

use crate::models::{AnswersSnapshot, InterestOption};
use crate::options::{self, OptionCodecError};
use crate::validation::{self, FieldError};

/// Lifecycle of a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldState {
    /// Untouched; no message shown even if the value would not validate
    Pristine,
    Valid,
    Invalid(FieldError),
}

impl FieldState {
    /// Inline message for the field's helper line
    pub fn message(&self) -> Option<String> {
        match self {
            FieldState::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }

    fn from_rule(outcome: Result<(), FieldError>) -> Self {
        match outcome {
            Ok(()) => FieldState::Valid,
            Err(err) => FieldState::Invalid(err),
        }
    }
}

/// Form-level lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPhase {
    /// At least one field does not validate
    Incomplete,
    /// All fields validate; submission is enabled
    Ready,
    /// A request is in flight; submission is disabled
    Submitting,
    /// Last submission landed
    Settled,
    /// Last submission failed; the user may resubmit, nothing auto-retries
    Failed(String),
}

/// The four answer fields bound to validated, controlled state
#[derive(Debug, Clone, PartialEq)]
pub struct AnswersForm {
    name: String,
    age: String,
    mail: String,
    interests: Vec<InterestOption>,
    name_state: FieldState,
    age_state: FieldState,
    mail_state: FieldState,
    interests_state: FieldState,
    phase: SubmitPhase,
}

impl AnswersForm {
    /// Build the controlled form from the store snapshot.
    ///
    /// The interest records produced here are the same ones the view hands
    /// to the checkbox group, so the field value and the rendered checkboxes
    /// start from a single conversion.
    pub fn from_snapshot(snapshot: &AnswersSnapshot) -> Result<Self, OptionCodecError> {
        let interests = options::to_ui(&snapshot.interests)?;
        let mut form = Self {
            name: snapshot.name.clone(),
            age: snapshot.age.clone(),
            mail: snapshot.mail.clone(),
            interests,
            name_state: FieldState::Pristine,
            age_state: FieldState::Pristine,
            mail_state: FieldState::Pristine,
            interests_state: FieldState::Pristine,
            phase: SubmitPhase::Incomplete,
        };
        // Seeded values validate immediately; untouched empties stay pristine.
        if !form.name.is_empty() {
            form.name_state = FieldState::from_rule(validation::validate_name(&form.name));
        }
        if !form.age.is_empty() {
            form.age_state = FieldState::from_rule(validation::validate_age(&form.age));
        }
        if !form.mail.is_empty() {
            form.mail_state = FieldState::from_rule(validation::validate_mail(&form.mail));
        }
        if form.interests.iter().any(|rec| rec.checked) {
            form.interests_state =
                FieldState::from_rule(validation::validate_interests(&form.interests));
        }
        form.refresh_phase();
        Ok(form)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn mail(&self) -> &str {
        &self.mail
    }

    pub fn interests(&self) -> &[InterestOption] {
        &self.interests
    }

    pub fn name_state(&self) -> &FieldState {
        &self.name_state
    }

    pub fn age_state(&self) -> &FieldState {
        &self.age_state
    }

    pub fn mail_state(&self) -> &FieldState {
        &self.mail_state
    }

    pub fn interests_state(&self) -> &FieldState {
        &self.interests_state
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.name_state = FieldState::from_rule(validation::validate_name(&self.name));
        self.refresh_phase();
    }

    pub fn set_age(&mut self, value: String) {
        self.age = value;
        self.age_state = FieldState::from_rule(validation::validate_age(&self.age));
        self.refresh_phase();
    }

    pub fn set_mail(&mut self, value: String) {
        self.mail = value;
        self.mail_state = FieldState::from_rule(validation::validate_mail(&self.mail));
        self.refresh_phase();
    }

    /// Write the full record list republished by the sync controller
    pub fn set_interests(&mut self, records: Vec<InterestOption>) {
        self.interests = records;
        self.interests_state =
            FieldState::from_rule(validation::validate_interests(&self.interests));
        self.refresh_phase();
    }

    /// AND of all field rules against the current values
    pub fn is_valid(&self) -> bool {
        validation::validate_name(&self.name).is_ok()
            && validation::validate_age(&self.age).is_ok()
            && validation::validate_mail(&self.mail).is_ok()
            && validation::validate_interests(&self.interests).is_ok()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Submit gate. Returns the store payload and enters `Submitting`, or
    /// `None` while the form is invalid or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<AnswersSnapshot> {
        if self.is_submitting() || !self.is_valid() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(AnswersSnapshot {
            name: self.name.clone(),
            age: self.age.clone(),
            mail: self.mail.clone(),
            interests: options::to_wire(&self.interests),
        })
    }

    /// Record the adapter's outcome for the in-flight submission
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.phase = match outcome {
            Ok(()) => SubmitPhase::Settled,
            Err(message) => SubmitPhase::Failed(message),
        };
    }

    fn refresh_phase(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.phase = if self.is_valid() {
            SubmitPhase::Ready
        } else {
            SubmitPhase::Incomplete
        };
    }
}
