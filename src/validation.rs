//! Field Validation Schema
//!
//! On-change rules for the answers form. Each rule yields the inline
//! message shown under its field.

use thiserror::Error;

use crate::models::InterestOption;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

/// Per-field validation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Age is required")]
    AgeRequired,
    #[error("Age must be a number between {min} and {max}")]
    AgeOutOfRange { min: u32, max: u32 },
    #[error("Email is required")]
    MailRequired,
    #[error("Email must be a valid address")]
    MailInvalid,
    #[error("Select at least one interest")]
    InterestsEmpty,
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

pub fn validate_age(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::AgeRequired);
    }
    match value.parse::<u32>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(()),
        _ => Err(FieldError::AgeOutOfRange {
            min: MIN_AGE,
            max: MAX_AGE,
        }),
    }
}

/// Minimal `user@host.tld` shape; anything stricter belongs server-side
pub fn validate_mail(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::MailRequired);
    }
    let Some((user, host)) = value.split_once('@') else {
        return Err(FieldError::MailInvalid);
    };
    let host_ok = host
        .rsplit_once('.')
        .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty());
    if user.is_empty() || !host_ok || host.contains('@') || value.contains(char::is_whitespace) {
        return Err(FieldError::MailInvalid);
    }
    Ok(())
}

pub fn validate_interests(records: &[InterestOption]) -> Result<(), FieldError> {
    if records.iter().any(|rec| rec.checked) {
        return Ok(());
    }
    Err(FieldError::InterestsEmpty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, checked: bool) -> InterestOption {
        InterestOption {
            id: id.to_string(),
            label: id.to_string(),
            checked,
        }
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
        assert_eq!(validate_name("   "), Err(FieldError::NameRequired));
        assert_eq!(validate_name("Ada"), Ok(()));
    }

    #[test]
    fn test_age_rules() {
        assert_eq!(validate_age(""), Err(FieldError::AgeRequired));
        assert!(validate_age("abc").is_err());
        assert!(validate_age("0").is_err());
        assert!(validate_age("121").is_err());
        assert!(validate_age("-3").is_err());
        assert_eq!(validate_age("36"), Ok(()));
        assert_eq!(validate_age(" 36 "), Ok(()));
    }

    #[test]
    fn test_mail_rules() {
        assert_eq!(validate_mail(""), Err(FieldError::MailRequired));
        assert_eq!(validate_mail("ada"), Err(FieldError::MailInvalid));
        assert_eq!(validate_mail("ada@host"), Err(FieldError::MailInvalid));
        assert_eq!(validate_mail("@host.org"), Err(FieldError::MailInvalid));
        assert_eq!(validate_mail("ada@.org"), Err(FieldError::MailInvalid));
        assert_eq!(validate_mail("ada b@host.org"), Err(FieldError::MailInvalid));
        assert_eq!(validate_mail("ada@host.org"), Ok(()));
    }

    #[test]
    fn test_interests_rules() {
        assert_eq!(validate_interests(&[]), Err(FieldError::InterestsEmpty));
        assert_eq!(
            validate_interests(&[record("sports", false)]),
            Err(FieldError::InterestsEmpty)
        );
        assert_eq!(
            validate_interests(&[record("sports", false), record("music", true)]),
            Ok(())
        );
    }
}
