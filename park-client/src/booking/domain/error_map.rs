//! Sparse map of outstanding field errors.
//!
//! An index is present only while it has at least one error, and an inner map
//! is dropped as soon as its last error is cleared.

use serde::Serialize;
use std::collections::BTreeMap;

use super::field_validator::FieldError;
use super::models::participant::ParticipantField;

pub type ParticipantErrors = BTreeMap<ParticipantField, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: BTreeMap<usize, ParticipantErrors>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the verdict for one field, `None` clears it
    pub fn set(&mut self, index: usize, field: ParticipantField, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.entries.entry(index).or_default().insert(field, error);
            }
            None => {
                if let Some(errors) = self.entries.get_mut(&index) {
                    errors.remove(&field);
                    if errors.is_empty() {
                        self.entries.remove(&index);
                    }
                }
            }
        }
    }

    /// Replace all errors of one participant
    pub fn replace_participant(&mut self, index: usize, errors: ParticipantErrors) {
        if errors.is_empty() {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, errors);
        }
    }

    pub fn remove_participant(&mut self, index: usize) {
        self.entries.remove(&index);
    }

    /// Drop every entry at or beyond `len`
    pub fn truncate(&mut self, len: usize) {
        self.entries.retain(|&index, _| index < len);
    }

    pub fn get(&self, index: usize, field: ParticipantField) -> Option<&FieldError> {
        self.entries.get(&index).and_then(|errors| errors.get(&field))
    }

    pub fn for_participant(&self, index: usize) -> Option<&ParticipantErrors> {
        self.entries.get(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of participants with at least one error
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of field errors
    pub fn error_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &ParticipantErrors)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_keeps_map_sparse() {
        let mut map = ErrorMap::new();
        map.set(0, ParticipantField::Age, Some(FieldError::InvalidAge));
        map.set(0, ParticipantField::Dni, Some(FieldError::InvalidDni));
        assert_eq!(map.len(), 1);
        assert_eq!(map.error_count(), 2);

        map.set(0, ParticipantField::Age, None);
        assert_eq!(map.get(0, ParticipantField::Age), None);
        assert_eq!(map.len(), 1);

        map.set(0, ParticipantField::Dni, None);
        assert!(map.is_empty());
        assert!(map.for_participant(0).is_none());
    }

    #[test]
    fn test_clearing_absent_entry_does_not_create_one() {
        let mut map = ErrorMap::new();
        map.set(3, ParticipantField::FullName, None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_replace_participant_with_no_errors_removes_entry() {
        let mut map = ErrorMap::new();
        map.set(1, ParticipantField::Age, Some(FieldError::Required));
        map.replace_participant(1, ParticipantErrors::new());
        assert!(map.is_empty());
    }

    #[test]
    fn test_truncate_prunes_indices_beyond_roster() {
        let mut map = ErrorMap::new();
        for index in 0..4 {
            map.set(index, ParticipantField::FullName, Some(FieldError::Required));
        }
        map.truncate(2);
        let indices: Vec<usize> = map.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_serializes_as_nested_object() {
        let mut map = ErrorMap::new();
        map.set(0, ParticipantField::Age, Some(FieldError::BelowMinimumAge { min_age: 8 }));
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["0"]["age"]["kind"], "belowMinimumAge");
        assert_eq!(value["0"]["age"]["min_age"], 8);
    }
}
