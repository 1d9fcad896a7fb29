//! # Participant Form
//!
//! Form session for the participants step of the booking flow.
//!
//! ## Responsibilities:
//! - Owns the roster and the error map and keeps them consistent
//! - Validates a field at the point where it is edited
//! - Bounds the participant count to the slot's remaining capacity
//! - Tracks the submission state machine
//!
//! Every mutation goes through a method on [`ParticipantForm`]: a roster
//! shrink prunes the error map in the same call, so the error map never holds
//! indices beyond the roster.

use log::{debug, info};
use uuid::Uuid;

use super::commands::booking::{BookingReceipt, BookingRequest, Visitor};
use super::error_map::ErrorMap;
use super::errors::{BookingError, FormError};
use super::field_validator::{FieldError, FieldValidator};
use super::models::activity::{ActivityConstraints, ActivityInfo};
use super::models::participant::{ParticipantField, ParticipantRecord, CLOTHING_SIZES};
use super::models::schedule::ScheduleSlot;
use super::roster::Roster;

/// Where the form is in the submission flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Validating,
    /// Validation failed, errors are in the error map
    Blocked,
    Submitting,
    Confirmed(BookingReceipt),
    /// Persistence failed, entered data is kept for a retry
    Failed(BookingError),
}

/// Activity and slot the form books for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTarget {
    pub activity_id: String,
    pub activity_name: String,
    pub schedule_id: i64,
    pub starts_at: String,
    pub ends_at: String,
}

#[derive(Debug, Clone)]
pub struct ParticipantForm {
    session_id: Uuid,
    target: BookingTarget,
    constraints: ActivityConstraints,
    roster: Roster,
    errors: ErrorMap,
    terms_accepted: bool,
    state: FormState,
}

impl ParticipantForm {
    /// Open a form for an activity and one of its slots.
    ///
    /// Constraints are the stricter of the catalog rules and the rules the
    /// server reports with the slot.
    pub fn open(activity: &ActivityInfo, slot: &ScheduleSlot) -> Result<Self, FormError> {
        let capacity = slot.capacity();
        if !capacity.is_available() {
            return Err(FormError::SlotUnavailable);
        }

        let session_id = Uuid::new_v4();
        info!(
            "📝 Opening participant form {} for {} (schedule {}, {} places left)",
            session_id, activity.name, slot.id, capacity.remaining
        );

        Ok(Self {
            session_id,
            target: BookingTarget {
                activity_id: activity.id.clone(),
                activity_name: activity.name.clone(),
                schedule_id: slot.id,
                starts_at: slot.starts_at.clone(),
                ends_at: slot.ends_at.clone(),
            },
            constraints: activity.constraints.stricter(slot.server_constraints),
            roster: Roster::new(capacity.remaining)?,
            errors: ErrorMap::new(),
            terms_accepted: false,
            state: FormState::Editing,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn target(&self) -> &BookingTarget {
        &self.target
    }

    pub fn constraints(&self) -> &ActivityConstraints {
        &self.constraints
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn participant_count(&self) -> usize {
        self.roster.len()
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Set the participant count, clamped to `1..=remaining capacity`
    pub fn set_count(&mut self, requested: usize) -> Result<usize, FormError> {
        self.ensure_editable()?;
        let removed = self.roster.set_count(requested);
        self.prune_errors(&removed);
        Ok(self.roster.len())
    }

    pub fn increment(&mut self) -> Result<bool, FormError> {
        self.ensure_editable()?;
        Ok(self.roster.increment())
    }

    pub fn decrement(&mut self) -> Result<bool, FormError> {
        self.ensure_editable()?;
        match self.roster.decrement() {
            Some(removed) => {
                self.errors.remove_participant(removed);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Store a new value and validate it right away
    pub fn update_field(
        &mut self,
        index: usize,
        field: ParticipantField,
        value: impl Into<String>,
    ) -> Result<Option<FieldError>, FormError> {
        self.check_editable()?;
        self.check_index(index)?;
        self.resume_editing();
        let value = value.into();
        let error = FieldValidator::validate(field, &value, &self.constraints);
        self.roster.update_field(index, field, value)?;
        self.errors.set(index, field, error.clone());
        Ok(error)
    }

    /// Re-validate the stored value of a field, e.g. when it loses focus
    pub fn blur_field(&mut self, index: usize, field: ParticipantField) -> Result<Option<FieldError>, FormError> {
        self.check_editable()?;
        self.check_index(index)?;
        self.resume_editing();
        let len = self.roster.len();
        let record = self.roster.get(index).ok_or(FormError::IndexOutOfBounds { index, len })?;
        let error = FieldValidator::validate(field, record.get(field), &self.constraints);
        self.errors.set(index, field, error.clone());
        Ok(error)
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.terms_accepted = accepted;
        Ok(())
    }

    /// Reconcile the roster with fresher data for the selected slot.
    ///
    /// Truncates the roster if fewer places are left than participants entered.
    /// Applying the same slot data twice changes nothing the second time.
    pub fn apply_slot(&mut self, slot: &ScheduleSlot) -> Result<(), FormError> {
        if slot.id != self.target.schedule_id {
            return Err(FormError::UnknownSchedule(slot.id));
        }
        match self.state {
            FormState::Confirmed(_) => return Err(FormError::Finalized),
            FormState::Submitting => return Err(FormError::SubmissionInFlight),
            _ => {}
        }

        let capacity = slot.capacity();
        if !capacity.is_available() {
            return Err(FormError::SlotUnavailable);
        }

        let removed = self.roster.apply_capacity(capacity.remaining)?;
        if !removed.is_empty() {
            info!(
                "✂️ Form {}: only {} places left, roster truncated to {}",
                self.session_id,
                capacity.remaining,
                self.roster.len()
            );
            self.prune_errors(&removed);
        }
        Ok(())
    }

    /// Recompute every error; true when no participant has an outstanding error
    pub fn validate_all(&mut self) -> bool {
        for (index, record) in self.roster.records().iter().enumerate() {
            let errors = FieldValidator::validate_record(record, &self.constraints);
            self.errors.replace_participant(index, errors);
        }
        self.errors.truncate(self.roster.len());
        debug!(
            "Form {} validated: {} field errors across {} participants",
            self.session_id,
            self.errors.error_count(),
            self.errors.len()
        );
        self.errors.is_empty()
    }

    /// Immutable payload for the booking collaborator.
    ///
    /// Only meaningful after `validate_all` returned true.
    pub fn booking_request(&self) -> Result<BookingRequest, FormError> {
        let visitors = self
            .roster
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| to_visitor(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BookingRequest {
            schedule_id: self.target.schedule_id,
            visitors,
            terms_accepted: self.terms_accepted,
        })
    }

    pub(crate) fn set_state(&mut self, state: FormState) {
        debug!("Form {} state: {:?} -> {:?}", self.session_id, self.state, state);
        self.state = state;
    }

    /// Edits are allowed while editing, after a blocked submit and after a
    /// failed one; they bring the form back to `Editing`.
    fn ensure_editable(&mut self) -> Result<(), FormError> {
        self.check_editable()?;
        self.resume_editing();
        Ok(())
    }

    fn check_editable(&self) -> Result<(), FormError> {
        match self.state {
            FormState::Confirmed(_) => Err(FormError::Finalized),
            FormState::Submitting => Err(FormError::SubmissionInFlight),
            _ => Ok(()),
        }
    }

    fn resume_editing(&mut self) {
        if self.state != FormState::Editing {
            self.set_state(FormState::Editing);
        }
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        let len = self.roster.len();
        if index < len {
            Ok(())
        } else {
            Err(FormError::IndexOutOfBounds { index, len })
        }
    }

    fn prune_errors(&mut self, removed: &[usize]) {
        for &index in removed {
            self.errors.remove_participant(index);
        }
    }
}

fn to_visitor(index: usize, record: &ParticipantRecord) -> Result<Visitor, FormError> {
    let national_id = record
        .dni
        .parse::<u64>()
        .map_err(|_| FormError::InvalidRecord { index, field: "dni" })?;
    let age = record
        .age
        .trim()
        .parse::<u32>()
        .map_err(|_| FormError::InvalidRecord { index, field: "age" })?;
    // Known sizes are sent in their canonical spelling
    let clothing_size = match record.clothing_size.trim() {
        "" => None,
        size => Some(
            CLOTHING_SIZES
                .iter()
                .find(|known| known.eq_ignore_ascii_case(size))
                .map_or_else(|| size.to_string(), |known| known.to_string()),
        ),
    };

    Ok(Visitor {
        name: record.full_name.trim().to_string(),
        national_id,
        age,
        clothing_size,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::booking::domain::capacity::ACTIVE_SCHEDULE_STATE;

    pub(crate) fn zip_line() -> ActivityInfo {
        ActivityInfo {
            id: "tirolesa".to_string(),
            name: "Tirolesa".to_string(),
            description: "Zip line".to_string(),
            constraints: ActivityConstraints::new(Some(8), false),
        }
    }

    pub(crate) fn slot(total: u32, occupied: u32) -> ScheduleSlot {
        ScheduleSlot {
            id: 11,
            activity_id: 1,
            activity_name: "Tirolesa".to_string(),
            starts_at: "10:00".to_string(),
            ends_at: "11:00".to_string(),
            total_capacity: total,
            occupied_count: occupied,
            server_state: ACTIVE_SCHEDULE_STATE.to_string(),
            server_constraints: ActivityConstraints::default(),
        }
    }

    pub(crate) fn fill_valid(form: &mut ParticipantForm, index: usize) {
        form.update_field(index, ParticipantField::FullName, "Ana Gomez").unwrap();
        form.update_field(index, ParticipantField::Dni, format!("{}", 12345670 + index)).unwrap();
        form.update_field(index, ParticipantField::Age, "30").unwrap();
    }

    fn assert_sparse(form: &ParticipantForm) {
        for (index, errors) in form.errors().iter() {
            assert!(!errors.is_empty());
            assert!(*index < form.participant_count());
        }
    }

    #[test]
    fn test_open_rejects_full_slot() {
        assert_eq!(ParticipantForm::open(&zip_line(), &slot(4, 4)).unwrap_err(), FormError::SlotUnavailable);

        let mut inactive = slot(10, 0);
        inactive.server_state = "suspendido".to_string();
        assert_eq!(ParticipantForm::open(&zip_line(), &inactive).unwrap_err(), FormError::SlotUnavailable);
    }

    #[test]
    fn test_open_merges_server_constraints() {
        let mut with_size = slot(5, 0);
        with_size.server_constraints = ActivityConstraints::new(None, true);
        let form = ParticipantForm::open(&zip_line(), &with_size).unwrap();
        assert_eq!(form.constraints().min_age, Some(8));
        assert!(form.constraints().requires_clothing_size);
    }

    #[test]
    fn test_set_count_clamps_to_remaining_capacity() {
        // minAge 8, 3 places left
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 7)).unwrap();
        assert_eq!(form.set_count(5).unwrap(), 3);
        assert_eq!(form.roster().len(), 3);
        assert_eq!(form.set_count(0).unwrap(), 1);
    }

    #[test]
    fn test_minimum_age_error_then_cleared() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 7)).unwrap();

        let error = form.update_field(0, ParticipantField::Age, "5").unwrap();
        assert_eq!(error, Some(FieldError::BelowMinimumAge { min_age: 8 }));
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.errors().error_count(), 1);
        assert_eq!(
            form.errors().get(0, ParticipantField::Age),
            Some(&FieldError::BelowMinimumAge { min_age: 8 })
        );

        assert_eq!(form.update_field(0, ParticipantField::Age, "10").unwrap(), None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_dni_error_then_cleared() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        assert_eq!(
            form.update_field(0, ParticipantField::Dni, "12A45678").unwrap(),
            Some(FieldError::InvalidDni)
        );
        assert_eq!(form.update_field(0, ParticipantField::Dni, "12345678").unwrap(), None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_update_out_of_bounds_is_reported() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        assert_eq!(
            form.update_field(3, ParticipantField::Age, "10"),
            Err(FormError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_error_map_stays_sparse_through_edits() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_count(4).unwrap();

        let edits = [
            (0, ParticipantField::FullName, "A"),
            (1, ParticipantField::Dni, "abc"),
            (3, ParticipantField::Age, "200"),
            (0, ParticipantField::FullName, "Ana Gomez"),
            (2, ParticipantField::Age, "4"),
            (1, ParticipantField::Dni, "1234567"),
            (3, ParticipantField::Age, "9"),
        ];
        for (index, field, value) in edits {
            form.update_field(index, field, value).unwrap();
            assert_sparse(&form);
        }

        let indices: Vec<usize> = form.errors().iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![2]);
    }

    #[test]
    fn test_shrinking_prunes_errors_of_removed_participants() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_count(3).unwrap();
        form.update_field(2, ParticipantField::Dni, "x").unwrap();
        form.update_field(1, ParticipantField::Dni, "x").unwrap();

        assert!(form.decrement().unwrap());
        assert!(form.errors().for_participant(2).is_none());
        assert!(form.errors().for_participant(1).is_some());

        form.set_count(1).unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_apply_slot_truncates_and_is_idempotent() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_count(5).unwrap();
        form.update_field(4, ParticipantField::Age, "1000").unwrap();

        form.apply_slot(&slot(10, 8)).unwrap();
        assert_eq!(form.participant_count(), 2);
        assert!(form.errors().is_empty());
        let roster = form.roster().clone();

        form.apply_slot(&slot(10, 8)).unwrap();
        assert_eq!(form.roster(), &roster);
    }

    #[test]
    fn test_apply_slot_for_other_schedule_is_rejected() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        let mut other = slot(10, 0);
        other.id = 99;
        assert_eq!(form.apply_slot(&other), Err(FormError::UnknownSchedule(99)));
    }

    #[test]
    fn test_apply_full_slot_keeps_roster() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_count(3).unwrap();
        assert_eq!(form.apply_slot(&slot(10, 10)), Err(FormError::SlotUnavailable));
        assert_eq!(form.participant_count(), 3);
    }

    #[test]
    fn test_validate_all_populates_and_clears() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_count(2).unwrap();
        fill_valid(&mut form, 0);

        assert!(!form.validate_all());
        assert!(form.errors().for_participant(0).is_none());
        assert_eq!(form.errors().for_participant(1).unwrap().len(), 3);

        fill_valid(&mut form, 1);
        assert!(form.validate_all());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_blur_field_validates_stored_value() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        assert_eq!(
            form.blur_field(0, ParticipantField::FullName).unwrap(),
            Some(FieldError::Required)
        );
        assert!(form.errors().get(0, ParticipantField::FullName).is_some());
    }

    #[test]
    fn test_booking_request_snapshot() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.update_field(0, ParticipantField::FullName, "  Ana Gomez ").unwrap();
        form.update_field(0, ParticipantField::Dni, "12345678").unwrap();
        form.update_field(0, ParticipantField::Age, "30").unwrap();
        form.update_field(0, ParticipantField::ClothingSize, "m").unwrap();
        form.set_terms_accepted(true).unwrap();
        assert!(form.validate_all());

        let request = form.booking_request().unwrap();
        assert_eq!(request.schedule_id, 11);
        assert!(request.terms_accepted);
        assert_eq!(
            request.visitors,
            vec![Visitor {
                name: "Ana Gomez".to_string(),
                national_id: 12345678,
                age: 30,
                clothing_size: Some("M".to_string()),
            }]
        );
    }

    #[test]
    fn test_edits_rejected_after_confirmation() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_state(FormState::Confirmed(BookingReceipt {
            inscription_ids: vec![1],
            activity_name: None,
        }));
        assert_eq!(form.update_field(0, ParticipantField::Age, "30"), Err(FormError::Finalized));
        assert_eq!(form.set_count(2), Err(FormError::Finalized));
    }

    #[test]
    fn test_edit_after_failed_returns_to_editing_with_data() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_count(2).unwrap();
        fill_valid(&mut form, 0);
        fill_valid(&mut form, 1);
        form.set_state(FormState::Failed(BookingError::Network {
            detail: "connection reset".to_string(),
        }));
        let before = form.roster().clone();

        form.update_field(1, ParticipantField::Age, "31").unwrap();
        assert_eq!(form.state(), &FormState::Editing);
        assert_eq!(form.participant_count(), 2);
        assert_eq!(form.roster().records()[0], before.records()[0]);
        assert_eq!(form.roster().records()[1].full_name, before.records()[1].full_name);
        assert_eq!(form.roster().records()[1].age, "31");
    }

    #[test]
    fn test_out_of_bounds_edit_keeps_state() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_state(FormState::Blocked);

        assert_eq!(
            form.update_field(4, ParticipantField::Age, "30"),
            Err(FormError::IndexOutOfBounds { index: 4, len: 1 })
        );
        assert_eq!(form.state(), &FormState::Blocked);

        assert_eq!(
            form.blur_field(4, ParticipantField::Age),
            Err(FormError::IndexOutOfBounds { index: 4, len: 1 })
        );
        assert_eq!(form.state(), &FormState::Blocked);
    }

    #[test]
    fn test_edit_after_blocked_returns_to_editing() {
        let mut form = ParticipantForm::open(&zip_line(), &slot(10, 0)).unwrap();
        form.set_state(FormState::Blocked);
        form.update_field(0, ParticipantField::Age, "30").unwrap();
        assert_eq!(form.state(), &FormState::Editing);
    }
}
