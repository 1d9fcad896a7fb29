//! Per-field validation rules for participant records.
//!
//! Validation is a pure function of the field, the raw value as typed, and the
//! activity constraints. Nothing here reads or writes form state.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::models::activity::ActivityConstraints;
use super::models::participant::{ParticipantField, ParticipantRecord};

pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 119;

/// Validation verdict for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Name must be at least 3 characters long")]
    NameTooShort,
    #[error("Invalid DNI (must have 7 or 8 digits)")]
    InvalidDni,
    #[error("Invalid age")]
    InvalidAge,
    #[error("Minimum age required: {min_age} years")]
    BelowMinimumAge { min_age: u32 },
}

pub struct FieldValidator;

impl FieldValidator {
    /// Validate one raw value, `None` when the value is acceptable
    pub fn validate(field: ParticipantField, value: &str, constraints: &ActivityConstraints) -> Option<FieldError> {
        match field {
            ParticipantField::FullName => Self::validate_full_name(value),
            ParticipantField::Dni => Self::validate_dni(value),
            ParticipantField::Age => Self::validate_age(value, constraints.min_age),
            ParticipantField::ClothingSize => Self::validate_clothing_size(value, constraints.requires_clothing_size),
        }
    }

    /// Validate every field of a record, returning only the failing ones
    pub fn validate_record(
        record: &ParticipantRecord,
        constraints: &ActivityConstraints,
    ) -> BTreeMap<ParticipantField, FieldError> {
        ParticipantField::ALL
            .iter()
            .filter_map(|&field| Self::validate(field, record.get(field), constraints).map(|error| (field, error)))
            .collect()
    }

    fn validate_full_name(value: &str) -> Option<FieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Some(FieldError::Required)
        } else if trimmed.chars().count() < MIN_NAME_LENGTH {
            Some(FieldError::NameTooShort)
        } else {
            None
        }
    }

    fn validate_dni(value: &str) -> Option<FieldError> {
        if value.trim().is_empty() {
            return Some(FieldError::Required);
        }

        let valid = (7..=8).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit());
        if valid {
            None
        } else {
            Some(FieldError::InvalidDni)
        }
    }

    fn validate_age(value: &str, min_age: Option<u32>) -> Option<FieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Some(FieldError::Required);
        }

        let age = match trimmed.parse::<i64>() {
            Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => age,
            _ => return Some(FieldError::InvalidAge),
        };

        match min_age {
            Some(min_age) if age < i64::from(min_age) => Some(FieldError::BelowMinimumAge { min_age }),
            _ => None,
        }
    }

    fn validate_clothing_size(value: &str, required: bool) -> Option<FieldError> {
        if required && value.trim().is_empty() {
            Some(FieldError::Required)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_rules() -> ActivityConstraints {
        ActivityConstraints::default()
    }

    fn zip_line_rules() -> ActivityConstraints {
        ActivityConstraints::new(Some(8), true)
    }

    #[test]
    fn test_full_name_rules() {
        let rules = no_rules();
        assert_eq!(FieldValidator::validate(ParticipantField::FullName, "", &rules), Some(FieldError::Required));
        assert_eq!(FieldValidator::validate(ParticipantField::FullName, "   ", &rules), Some(FieldError::Required));
        assert_eq!(FieldValidator::validate(ParticipantField::FullName, " Al ", &rules), Some(FieldError::NameTooShort));
        assert_eq!(FieldValidator::validate(ParticipantField::FullName, "Ana", &rules), None);
        assert_eq!(FieldValidator::validate(ParticipantField::FullName, "Íñé", &rules), None);
    }

    #[test]
    fn test_dni_rules() {
        let rules = no_rules();
        assert_eq!(FieldValidator::validate(ParticipantField::Dni, "", &rules), Some(FieldError::Required));
        assert_eq!(FieldValidator::validate(ParticipantField::Dni, "12A45678", &rules), Some(FieldError::InvalidDni));
        assert_eq!(FieldValidator::validate(ParticipantField::Dni, "123456", &rules), Some(FieldError::InvalidDni));
        assert_eq!(FieldValidator::validate(ParticipantField::Dni, "123456789", &rules), Some(FieldError::InvalidDni));
        assert_eq!(FieldValidator::validate(ParticipantField::Dni, " 1234567", &rules), Some(FieldError::InvalidDni));
        assert_eq!(FieldValidator::validate(ParticipantField::Dni, "1234567", &rules), None);
        assert_eq!(FieldValidator::validate(ParticipantField::Dni, "12345678", &rules), None);
    }

    #[test]
    fn test_age_range() {
        let rules = no_rules();
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "", &rules), Some(FieldError::Required));
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "abc", &rules), Some(FieldError::InvalidAge));
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "0", &rules), Some(FieldError::InvalidAge));
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "120", &rules), Some(FieldError::InvalidAge));
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "-4", &rules), Some(FieldError::InvalidAge));
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "1", &rules), None);
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "119", &rules), None);
    }

    #[test]
    fn test_age_minimum() {
        let rules = zip_line_rules();
        assert_eq!(
            FieldValidator::validate(ParticipantField::Age, "5", &rules),
            Some(FieldError::BelowMinimumAge { min_age: 8 })
        );
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "8", &rules), None);
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "10", &rules), None);
        // Out of range wins over the minimum
        assert_eq!(FieldValidator::validate(ParticipantField::Age, "0", &rules), Some(FieldError::InvalidAge));
    }

    #[test]
    fn test_clothing_size_only_required_when_activity_asks() {
        assert_eq!(FieldValidator::validate(ParticipantField::ClothingSize, "", &no_rules()), None);
        assert_eq!(
            FieldValidator::validate(ParticipantField::ClothingSize, "", &zip_line_rules()),
            Some(FieldError::Required)
        );
        assert_eq!(FieldValidator::validate(ParticipantField::ClothingSize, "M", &zip_line_rules()), None);
    }

    #[test]
    fn test_validate_record_reports_only_failures() {
        let record = ParticipantRecord {
            full_name: "Ana Gomez".to_string(),
            dni: "123".to_string(),
            age: "6".to_string(),
            clothing_size: String::new(),
        };

        let errors = FieldValidator::validate_record(&record, &zip_line_rules());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(&ParticipantField::Dni), Some(&FieldError::InvalidDni));
        assert_eq!(errors.get(&ParticipantField::Age), Some(&FieldError::BelowMinimumAge { min_age: 8 }));
        assert_eq!(errors.get(&ParticipantField::ClothingSize), Some(&FieldError::Required));
        assert!(!errors.contains_key(&ParticipantField::FullName));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::BelowMinimumAge { min_age: 12 }.to_string(), "Minimum age required: 12 years");
    }
}
