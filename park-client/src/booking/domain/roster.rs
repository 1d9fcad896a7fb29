//! Participant roster.
//!
//! The roster length is the participant count: there is no separate counter
//! that could drift. The count always stays within `1..=max_count`, where
//! `max_count` is the remaining capacity of the selected slot.

use log::debug;
use serde::Serialize;

use super::errors::FormError;
use super::models::participant::{ParticipantField, ParticipantRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    records: Vec<ParticipantRecord>,
    max_count: usize,
}

impl Roster {
    /// Create a roster with one blank participant
    pub fn new(remaining_capacity: u32) -> Result<Self, FormError> {
        if remaining_capacity == 0 {
            return Err(FormError::SlotUnavailable);
        }
        Ok(Self {
            records: vec![ParticipantRecord::blank()],
            max_count: remaining_capacity as usize,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn records(&self) -> &[ParticipantRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ParticipantRecord> {
        self.records.get(index)
    }

    pub fn can_increment(&self) -> bool {
        self.records.len() < self.max_count
    }

    pub fn can_decrement(&self) -> bool {
        self.records.len() > 1
    }

    /// Resize to `requested` clamped to `1..=max_count`.
    ///
    /// Returns the indices of the removed participants, highest first.
    pub fn set_count(&mut self, requested: usize) -> Vec<usize> {
        let target = requested.clamp(1, self.max_count);
        self.resize(target)
    }

    /// Add one blank participant if capacity allows
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.records.push(ParticipantRecord::blank());
        true
    }

    /// Remove the last participant if more than one remains, returning its index
    pub fn decrement(&mut self) -> Option<usize> {
        if !self.can_decrement() {
            return None;
        }
        self.records.pop();
        Some(self.records.len())
    }

    /// Replace one field of one participant
    pub fn update_field(&mut self, index: usize, field: ParticipantField, value: impl Into<String>) -> Result<(), FormError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(FormError::IndexOutOfBounds { index, len })?;
        record.set(field, value.into());
        Ok(())
    }

    /// Apply a freshly resolved remaining capacity.
    ///
    /// Truncates the roster when it no longer fits. Re-applying the same
    /// capacity is a no-op. Returns the indices removed, highest first.
    pub fn apply_capacity(&mut self, remaining_capacity: u32) -> Result<Vec<usize>, FormError> {
        if remaining_capacity == 0 {
            return Err(FormError::SlotUnavailable);
        }

        let max_count = remaining_capacity as usize;
        if max_count != self.max_count {
            debug!("Roster capacity changed from {} to {}", self.max_count, max_count);
        }
        self.max_count = max_count;

        if self.records.len() > max_count {
            Ok(self.resize(max_count))
        } else {
            Ok(Vec::new())
        }
    }

    fn resize(&mut self, target: usize) -> Vec<usize> {
        let mut removed = Vec::new();
        while self.records.len() > target {
            self.records.pop();
            removed.push(self.records.len());
        }
        while self.records.len() < target {
            self.records.push(ParticipantRecord::blank());
        }
        removed
    }
}
